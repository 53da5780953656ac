use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Remaining moisture as a percentage clamped to [0.0, 100.0].
/// 100 means freshly watered, 0 means the plant is due.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[serde(from = "f64")]
#[ts(export)]
pub struct Moisture(f64);

impl Moisture {
    /// Freshly watered.
    pub const FULL: Moisture = Moisture(100.0);
    /// Due for watering.
    pub const EMPTY: Moisture = Moisture(0.0);

    /// Create a new Moisture, clamping to [0.0, 100.0]. NaN maps to 0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::EMPTY;
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// Get the raw percentage.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Percentage rounded to a whole number, as shown on the indicator.
    pub fn rounded(self) -> u8 {
        self.0.round() as u8
    }

    pub fn is_empty(self) -> bool {
        self.0 <= 0.0
    }

    /// Whether the visual warning applies at the given threshold.
    pub fn needs_attention(self, threshold: f64) -> bool {
        self.0 <= threshold
    }

    /// Classify against the low-moisture threshold.
    pub fn level(self, threshold: f64) -> MoistureLevel {
        if self.is_empty() {
            MoistureLevel::Due
        } else if self.0 <= threshold {
            MoistureLevel::Low
        } else {
            MoistureLevel::Fresh
        }
    }
}

impl Default for Moisture {
    fn default() -> Self {
        Self::FULL
    }
}

impl fmt::Display for Moisture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.rounded())
    }
}

impl From<f64> for Moisture {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Moisture> for f64 {
    fn from(m: Moisture) -> Self {
        m.0
    }
}

/// Conceptual per-plant watering state.
///
/// `Fresh → Low → Due` happens with time; the only way back to `Fresh` is
/// a confirmed watering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MoistureLevel {
    Fresh,
    Low,
    Due,
}

impl MoistureLevel {
    pub fn needs_attention(self) -> bool {
        !matches!(self, MoistureLevel::Fresh)
    }
}
