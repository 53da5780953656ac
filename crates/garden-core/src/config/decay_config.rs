use serde::{Deserialize, Serialize};

use super::defaults;

/// Watering decay configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Period between recomputes of a displayed plant (milliseconds).
    pub recompute_interval_ms: u64,
    /// Moisture percentage at or below which a plant is flagged low.
    pub low_moisture_threshold: f64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            recompute_interval_ms: defaults::DEFAULT_RECOMPUTE_INTERVAL_MS,
            low_moisture_threshold: defaults::DEFAULT_LOW_MOISTURE_THRESHOLD,
        }
    }
}

impl DecayConfig {
    pub fn recompute_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.recompute_interval_ms)
    }
}
