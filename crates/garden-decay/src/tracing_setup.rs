//! Subscriber installation and span vocabulary.

use tracing::info;
use tracing_subscriber::EnvFilter;

use garden_core::config::ObservabilityConfig;
use garden_core::constants::VERSION;
use garden_core::errors::{GardenError, GardenResult};

/// Create a watering span.
#[macro_export]
macro_rules! watering_span {
    ($plant_id:expr) => {
        tracing::info_span!("garden.watering", plant_id = %$plant_id)
    };
}

/// Create a recompute span.
#[macro_export]
macro_rules! recompute_span {
    ($period_ms:expr) => {
        tracing::debug_span!("garden.recompute", period_ms = $period_ms)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const WATERING: &str = "garden.watering";
    pub const RECOMPUTE: &str = "garden.recompute";
}

/// Install the global fmt subscriber.
///
/// `RUST_LOG` wins over `log_level` when set. Fails if the filter does not
/// parse or a global subscriber is already installed.
pub fn init(config: &ObservabilityConfig) -> GardenResult<()> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.is_empty() => EnvFilter::try_new(directives),
        _ => EnvFilter::try_new(&config.log_level),
    }
    .map_err(|e| GardenError::InvalidConfig {
        reason: format!("invalid log filter: {e}"),
    })?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| GardenError::InvalidConfig {
        reason: format!("tracing subscriber not installed: {e}"),
    })?;
    info!(version = VERSION, json = config.json, "garden tracing initialized");
    Ok(())
}
