mod garden_error;
mod storage_error;

pub use garden_error::{GardenError, GardenResult};
pub use storage_error::StorageError;
