//! # garden-storage
//!
//! SQLite implementation of the plant persistence collaborator, used for
//! local runs and integration tests. The hosted backend stays the source of
//! truth in production; this adapter only has to honour the same contract.

pub mod engine;
pub mod migrations;
pub mod pragmas;
pub mod queries;

pub use engine::SqlitePlantStore;

use garden_core::errors::{GardenError, StorageError};

/// Wrap a SQLite failure message as a [`GardenError`].
pub(crate) fn to_storage_err(message: String) -> GardenError {
    GardenError::Storage(StorageError::Sqlite { message })
}
