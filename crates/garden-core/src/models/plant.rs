use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::GardenResult;
use crate::interval::WateringInterval;
use crate::timestamp::parse_timestamp;

/// A plant a gardener is growing.
///
/// `last_watered` is typed: a record with a missing or unparseable
/// timestamp fails to deserialize rather than flowing into the decay math.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Plant {
    pub id: String,
    /// Owning gardener.
    pub user_id: String,
    pub name: String,
    pub quantity: u32,
    pub image_url: String,
    /// Whole-day component of the watering interval.
    pub watering_days: u32,
    /// Hour component of the watering interval.
    pub watering_hours: u32,
    /// Stamped at creation and on every confirmed watering.
    pub last_watered: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Plant {
    pub fn interval(&self) -> WateringInterval {
        WateringInterval::new(self.watering_days, self.watering_hours)
    }

    /// Apply a confirmed patch to a local snapshot.
    pub fn apply(&mut self, patch: &PlantPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(image_url) = &patch.image_url {
            self.image_url = image_url.clone();
        }
        if let Some(days) = patch.watering_days {
            self.watering_days = days;
        }
        if let Some(hours) = patch.watering_hours {
            self.watering_hours = hours;
        }
        if let Some(ts) = patch.last_watered {
            self.last_watered = ts;
        }
    }
}

/// Insert payload. The store assigns `id`, `created_at` and `last_watered`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewPlant {
    pub user_id: String,
    pub name: String,
    pub quantity: u32,
    pub image_url: String,
    pub watering_days: u32,
    pub watering_hours: u32,
}

impl NewPlant {
    pub fn interval(&self) -> WateringInterval {
        WateringInterval::new(self.watering_days, self.watering_hours)
    }
}

/// Partial update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(default)]
pub struct PlantPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watering_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watering_hours: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_watered: Option<DateTime<Utc>>,
}

impl PlantPatch {
    /// The patch a watering action sends: only `last_watered` changes.
    pub fn watered_at(ts: DateTime<Utc>) -> Self {
        Self {
            last_watered: Some(ts),
            ..Self::default()
        }
    }

    /// Same as [`PlantPatch::watered_at`] for a timestamp received as text.
    pub fn watered_at_str(ts: &str) -> GardenResult<Self> {
        Ok(Self::watered_at(parse_timestamp(ts)?))
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
