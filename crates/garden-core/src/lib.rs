//! # garden-core
//!
//! Foundation crate for the garden watering tracker.
//! Defines the plant model, moisture and interval value types, errors,
//! config, constants, and the traits that persistence collaborators implement.
//! Every other crate in the workspace depends on this.

pub mod clock;
pub mod community;
pub mod config;
pub mod constants;
pub mod errors;
pub mod interval;
pub mod models;
pub mod moisture;
pub mod timestamp;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::GardenConfig;
pub use errors::{GardenError, GardenResult};
pub use interval::WateringInterval;
pub use models::{NewPlant, Plant, PlantPatch, User};
pub use moisture::{Moisture, MoistureLevel};
