//! Per-plant display state with periodic recompute.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::watch;
use tracing::debug;

use garden_core::errors::GardenResult;
use garden_core::traits::PlantStore;
use garden_core::Plant;

use crate::engine::WateringEngine;
use crate::formula::WateringState;
use crate::scheduler::{schedule_recompute, RecomputeHandle};

/// Keeps one plant's watering state current.
///
/// The latest state is published on a watch channel and refreshed every
/// `DecayConfig::recompute_interval_ms`. Monitors for different plants
/// share nothing.
pub struct WateringMonitor {
    engine: WateringEngine,
    plant: Arc<Mutex<Plant>>,
    state: Arc<watch::Sender<WateringState>>,
    recompute: RecomputeHandle,
}

impl WateringMonitor {
    /// Compute the initial state and start periodic recompute.
    pub fn start(engine: WateringEngine, plant: Plant) -> GardenResult<Self> {
        let initial = engine.compute(&plant);
        let (tx, _rx) = watch::channel(initial);
        let state = Arc::new(tx);
        let plant = Arc::new(Mutex::new(plant));

        let tick_engine = engine.clone();
        let tick_plant = Arc::clone(&plant);
        let tick_state = Arc::clone(&state);
        let recompute = schedule_recompute(engine.config().recompute_interval(), move || {
            // Snapshot and published state change together under the plant lock.
            let plant = lock(&tick_plant);
            tick_state.send_replace(tick_engine.compute(&plant));
        })?;

        Ok(Self {
            engine,
            plant,
            state,
            recompute,
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<WateringState> {
        self.state.subscribe()
    }

    pub fn current(&self) -> WateringState {
        self.state.borrow().clone()
    }

    pub fn plant(&self) -> Plant {
        lock(&self.plant).clone()
    }

    /// Water the plant through `store`.
    ///
    /// The displayed state only changes once the store confirms; on error
    /// the previous state stays published and the error is returned.
    pub async fn water<S: PlantStore>(&self, store: &S) -> GardenResult<WateringState> {
        let id = lock(&self.plant).id.clone();
        let confirmed = self.engine.water(store, &id).await?;
        let mut plant = lock(&self.plant);
        let state = self.engine.compute(&confirmed);
        *plant = confirmed;
        self.state.send_replace(state.clone());
        drop(plant);
        debug!(plant_id = %id, percentage = state.percentage.value(), "state reset after watering");
        Ok(state)
    }

    /// Stop periodic recompute. Idempotent.
    pub fn stop(&self) {
        self.recompute.cancel();
    }

    pub fn is_running(&self) -> bool {
        !self.recompute.is_cancelled()
    }
}

fn lock(plant: &Mutex<Plant>) -> MutexGuard<'_, Plant> {
    plant.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
