//! # garden-decay
//!
//! Watering decay engine: turns `(last_watered, interval, now)` into a
//! moisture percentage and countdown label, keeps displayed plants current
//! with a cancellable periodic recompute, and resets the clock on a
//! confirmed watering.

pub mod countdown;
pub mod engine;
pub mod formula;
pub mod monitor;
pub mod scheduler;
pub mod tracing_setup;

pub use engine::WateringEngine;
pub use formula::{compute_state, compute_state_for, WateringState};
pub use monitor::WateringMonitor;
pub use scheduler::{schedule_recompute, RecomputeHandle};
