use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use garden_core::constants::{DUE_LABEL, LOW_MOISTURE_PERCENT};
use garden_core::{Moisture, MoistureLevel, Plant, WateringInterval};

use crate::countdown;

/// Display state for one plant at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WateringState {
    /// Remaining moisture, always within [0, 100].
    pub percentage: Moisture,
    /// Countdown label, e.g. `"3h 12m"` or `"Time to water!"`.
    pub time_left: String,
    pub level: MoistureLevel,
    /// Milliseconds until the plant is due, never negative.
    pub remaining_ms: i64,
}

impl WateringState {
    pub fn is_due(&self) -> bool {
        self.level == MoistureLevel::Due
    }
}

/// Linear watering decay.
///
/// ```text
/// elapsed    = max(0, now - last_watered)
/// percentage = clamp(100 - elapsed / interval × 100, 0, 100)
/// remaining  = max(0, interval - elapsed)
/// ```
///
/// A zero interval is permanently due: percentage 0, label "Time to water!".
/// A `last_watered` in the future counts as zero elapsed time.
pub fn compute_state(
    last_watered: DateTime<Utc>,
    watering_days: u32,
    watering_hours: u32,
    now: DateTime<Utc>,
) -> WateringState {
    let interval = WateringInterval::new(watering_days, watering_hours);
    let elapsed_ms = (now - last_watered).num_milliseconds().max(0);

    if interval.is_zero() {
        return WateringState {
            percentage: Moisture::EMPTY,
            time_left: DUE_LABEL.to_string(),
            level: MoistureLevel::Due,
            remaining_ms: 0,
        };
    }

    let total_ms = interval.total_ms();
    let percentage = Moisture::new(100.0 - (elapsed_ms as f64 / total_ms as f64) * 100.0);
    let remaining_ms = (total_ms - elapsed_ms).max(0);

    WateringState {
        percentage,
        time_left: countdown::label(remaining_ms),
        level: percentage.level(LOW_MOISTURE_PERCENT),
        remaining_ms,
    }
}

/// [`compute_state`] for a stored plant.
pub fn compute_state_for(plant: &Plant, now: DateTime<Utc>) -> WateringState {
    compute_state(
        plant.last_watered,
        plant.watering_days,
        plant.watering_hours,
        now,
    )
}
