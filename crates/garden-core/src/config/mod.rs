//! Layered configuration loaded from TOML. Every section falls back to
//! its defaults, so an empty document is a valid config.

pub mod decay_config;
pub mod defaults;
pub mod observability_config;
pub mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use decay_config::DecayConfig;
pub use observability_config::ObservabilityConfig;
pub use storage_config::StorageConfig;

use crate::errors::{GardenError, GardenResult};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GardenConfig {
    pub decay: DecayConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl GardenConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> GardenResult<Self> {
        let config: GardenConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> GardenResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| GardenError::InvalidConfig {
            reason: format!("cannot read {}: {e}", path.display()),
        })?;
        Self::from_toml(&source)
    }

    pub fn validate(&self) -> GardenResult<()> {
        if self.decay.recompute_interval_ms == 0 {
            return Err(GardenError::InvalidConfig {
                reason: "decay.recompute_interval_ms must be greater than zero".to_string(),
            });
        }
        let threshold = self.decay.low_moisture_threshold;
        if !(0.0..=100.0).contains(&threshold) {
            return Err(GardenError::InvalidConfig {
                reason: format!(
                    "decay.low_moisture_threshold must be within [0, 100], got {threshold}"
                ),
            });
        }
        Ok(())
    }
}
