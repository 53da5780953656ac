//! Default values shared by the config sections.

use crate::constants;

pub const DEFAULT_RECOMPUTE_INTERVAL_MS: u64 = constants::RECOMPUTE_INTERVAL_MS;
pub const DEFAULT_LOW_MOISTURE_THRESHOLD: f64 = constants::LOW_MOISTURE_PERCENT;

pub const DEFAULT_DB_PATH: &str = "garden.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

pub const DEFAULT_LOG_LEVEL: &str = "info";
