//! In-memory plant store with failure injection.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};
use garden_core::errors::{GardenError, GardenResult, StorageError};
use garden_core::traits::PlantStore;
use garden_core::{NewPlant, Plant, PlantPatch};

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()
}

pub fn make_plant(id: &str, days: u32, hours: u32, last_watered: DateTime<Utc>) -> Plant {
    Plant {
        id: id.to_string(),
        user_id: "gardener-1".to_string(),
        name: "Basil".to_string(),
        quantity: 1,
        image_url: String::new(),
        watering_days: days,
        watering_hours: hours,
        last_watered,
        created_at: last_watered,
    }
}

#[derive(Default)]
pub struct MemoryStore {
    plants: Mutex<HashMap<String, Plant>>,
    fail_updates: AtomicBool,
    pub update_calls: AtomicUsize,
}

impl MemoryStore {
    pub fn with(plants: Vec<Plant>) -> Self {
        let store = Self::default();
        {
            let mut map = store.plants.lock().unwrap();
            for p in plants {
                map.insert(p.id.clone(), p);
            }
        }
        store
    }

    pub fn fail_updates(&self, fail: bool) {
        self.fail_updates.store(fail, Ordering::SeqCst);
    }

    pub fn get(&self, id: &str) -> Option<Plant> {
        self.plants.lock().unwrap().get(id).cloned()
    }
}

impl PlantStore for MemoryStore {
    async fn read_plant(&self, id: &str) -> GardenResult<Plant> {
        self.get(id).ok_or_else(|| GardenError::PlantNotFound { id: id.to_string() })
    }

    async fn update_plant(&self, id: &str, patch: PlantPatch) -> GardenResult<Plant> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(StorageError::Sqlite {
                message: "connection reset".to_string(),
            }
            .into());
        }
        let mut map = self.plants.lock().unwrap();
        let plant = map
            .get_mut(id)
            .ok_or_else(|| GardenError::PlantNotFound { id: id.to_string() })?;
        plant.apply(&patch);
        Ok(plant.clone())
    }

    async fn create_plant(&self, plant: NewPlant) -> GardenResult<Plant> {
        let now = Utc::now();
        let id = format!("plant-{}", self.plants.lock().unwrap().len() + 1);
        let created = Plant {
            id: id.clone(),
            user_id: plant.user_id,
            name: plant.name,
            quantity: plant.quantity,
            image_url: plant.image_url,
            watering_days: plant.watering_days,
            watering_hours: plant.watering_hours,
            last_watered: now,
            created_at: now,
        };
        self.plants.lock().unwrap().insert(id, created.clone());
        Ok(created)
    }

    async fn delete_plant(&self, id: &str) -> GardenResult<()> {
        self.plants.lock().unwrap().remove(id);
        Ok(())
    }

    async fn list_plants(&self, user_id: Option<&str>) -> GardenResult<Vec<Plant>> {
        let mut plants: Vec<Plant> = self
            .plants
            .lock()
            .unwrap()
            .values()
            .filter(|p| user_id.map_or(true, |u| p.user_id == u))
            .cloned()
            .collect();
        plants.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(plants)
    }
}
