use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn, Instrument};

use garden_core::config::DecayConfig;
use garden_core::errors::GardenResult;
use garden_core::traits::PlantStore;
use garden_core::{Clock, Moisture, MoistureLevel, Plant, PlantPatch, SystemClock};

use crate::formula::{self, WateringState};
use crate::watering_span;

/// Watering decay engine: the pure formula plus a configured low-moisture
/// threshold and an injected time source.
#[derive(Clone)]
pub struct WateringEngine {
    config: DecayConfig,
    clock: Arc<dyn Clock>,
}

impl WateringEngine {
    /// Default config, wall clock.
    pub fn new() -> Self {
        Self::with_config(DecayConfig::default())
    }

    pub fn with_config(config: DecayConfig) -> Self {
        Self {
            config,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(config: DecayConfig, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &DecayConfig {
        &self.config
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Classify a percentage against the configured threshold.
    pub fn level(&self, percentage: Moisture) -> MoistureLevel {
        percentage.level(self.config.low_moisture_threshold)
    }

    /// State of `plant` at the clock's current instant.
    pub fn compute(&self, plant: &Plant) -> WateringState {
        self.compute_at(plant, self.clock.now())
    }

    /// State of `plant` at `now`.
    pub fn compute_at(&self, plant: &Plant, now: DateTime<Utc>) -> WateringState {
        let mut state = formula::compute_state_for(plant, now);
        state.level = self.level(state.percentage);
        debug!(
            plant_id = %plant.id,
            percentage = state.percentage.value(),
            time_left = %state.time_left,
            "computed watering state"
        );
        state
    }

    /// Compute every plant against the same instant.
    pub fn process_batch(&self, plants: &[Plant]) -> Vec<(String, WateringState)> {
        let now = self.clock.now();
        plants
            .iter()
            .map(|p| (p.id.clone(), self.compute_at(p, now)))
            .collect()
    }

    /// Ask the store to stamp `last_watered` with the current time.
    ///
    /// Returns the record as confirmed by the store. Errors are passed
    /// through untouched and never retried.
    pub async fn water<S: PlantStore>(&self, store: &S, plant_id: &str) -> GardenResult<Plant> {
        let watered_at = self.clock.now();
        async {
            match store
                .update_plant(plant_id, PlantPatch::watered_at(watered_at))
                .await
            {
                Ok(plant) => {
                    info!(last_watered = %plant.last_watered, "plant watered");
                    Ok(plant)
                }
                Err(e) => {
                    warn!(error = %e, "watering failed");
                    Err(e)
                }
            }
        }
        .instrument(watering_span!(plant_id))
        .await
    }

    /// Re-read a plant from the store and compute its current state.
    pub async fn refresh<S: PlantStore>(
        &self,
        store: &S,
        plant_id: &str,
    ) -> GardenResult<(Plant, WateringState)> {
        let plant = store.read_plant(plant_id).await?;
        let state = self.compute(&plant);
        Ok((plant, state))
    }
}

impl Default for WateringEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WateringEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WateringEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
