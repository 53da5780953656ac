use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{HOURS_PER_DAY, MS_PER_HOUR};

/// Configured watering interval: whole days plus hours.
///
/// Hours are conventionally 0–23 but larger values are accepted and simply
/// add to the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WateringInterval {
    pub days: u32,
    pub hours: u32,
}

impl WateringInterval {
    pub fn new(days: u32, hours: u32) -> Self {
        Self { days, hours }
    }

    /// Total interval length in milliseconds. Saturates instead of overflowing.
    pub fn total_ms(self) -> i64 {
        let hours = (self.days as i64)
            .saturating_mul(HOURS_PER_DAY)
            .saturating_add(self.hours as i64);
        hours.saturating_mul(MS_PER_HOUR)
    }

    /// Both components zero: the plant is permanently due.
    pub fn is_zero(self) -> bool {
        self.days == 0 && self.hours == 0
    }
}

impl fmt::Display for WateringInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d {}h", self.days, self.hours)
    }
}
