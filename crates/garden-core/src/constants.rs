/// Garden system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const MS_PER_MINUTE: i64 = 60_000;
pub const MS_PER_HOUR: i64 = 3_600_000;
pub const HOURS_PER_DAY: i64 = 24;

/// Label shown once the countdown has run out.
pub const DUE_LABEL: &str = "Time to water!";

/// Moisture at or below this percentage triggers the visual warning.
pub const LOW_MOISTURE_PERCENT: f64 = 5.0;

/// How often displayed watering state is recomputed.
pub const RECOMPUTE_INTERVAL_MS: u64 = 60_000;
