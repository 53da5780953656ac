//! SqlitePlantStore: owns the connection, runs migrations at startup, and
//! implements the plant and community collaborator traits.

use std::path::Path;
use std::sync::Arc;

use rusqlite::Connection;
use tokio::sync::Mutex;
use tracing::{debug, info};

use garden_core::config::StorageConfig;
use garden_core::errors::{GardenError, GardenResult};
use garden_core::models::PlantGardener;
use garden_core::traits::{CommunityQuery, PlantStore};
use garden_core::{Clock, NewPlant, Plant, PlantPatch, SystemClock, User};

use crate::queries::{community, plant_crud, user_ops};
use crate::{migrations, pragmas, to_storage_err};

const IN_MEMORY_PATH: &str = ":memory:";

/// SQLite-backed plant store.
///
/// A single connection guarded by an async mutex; every trait call holds it
/// only for the duration of one synchronous query.
pub struct SqlitePlantStore {
    conn: Mutex<Connection>,
    clock: Arc<dyn Clock>,
}

impl SqlitePlantStore {
    /// Open a store backed by a file on disk.
    pub fn open(path: &Path) -> GardenResult<Self> {
        Self::open_with(path, &StorageConfig::default())
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> GardenResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        Self::initialize(conn, StorageConfig::default().busy_timeout_ms, false)
    }

    /// Open the database named by `config.db_path`.
    pub fn from_config(config: &StorageConfig) -> GardenResult<Self> {
        if config.db_path == IN_MEMORY_PATH {
            let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
            return Self::initialize(conn, config.busy_timeout_ms, false);
        }
        Self::open_with(Path::new(&config.db_path), config)
    }

    fn open_with(path: &Path, config: &StorageConfig) -> GardenResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        info!(path = %path.display(), "opened plant database");
        Self::initialize(conn, config.busy_timeout_ms, true)
    }

    /// Apply pragmas and run migrations.
    fn initialize(conn: Connection, busy_timeout_ms: u64, file_backed: bool) -> GardenResult<Self> {
        pragmas::apply_pragmas(&conn, busy_timeout_ms, file_backed)?;
        let version = migrations::run_migrations(&conn)?;
        debug!(version, "schema ready");
        Ok(Self {
            conn: Mutex::new(conn),
            clock: Arc::new(SystemClock),
        })
    }

    /// Use `clock` to stamp `created_at` and `last_watered` on new plants.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Run `f` against the connection.
    pub async fn with_conn<F, T>(&self, f: F) -> GardenResult<T>
    where
        F: FnOnce(&Connection) -> GardenResult<T>,
    {
        let conn = self.conn.lock().await;
        f(&conn)
    }

    /// Seed or refresh a gardener profile.
    pub async fn insert_user(&self, user: &User) -> GardenResult<()> {
        self.with_conn(|conn| user_ops::upsert_user(conn, user)).await
    }

    pub async fn get_user(&self, id: &str) -> GardenResult<Option<User>> {
        self.with_conn(|conn| user_ops::get_user(conn, id)).await
    }

    pub async fn schema_version(&self) -> GardenResult<u32> {
        self.with_conn(migrations::current_version).await
    }
}

impl PlantStore for SqlitePlantStore {
    async fn read_plant(&self, id: &str) -> GardenResult<Plant> {
        self.with_conn(|conn| plant_crud::get_plant(conn, id))
            .await?
            .ok_or_else(|| GardenError::PlantNotFound { id: id.to_string() })
    }

    async fn update_plant(&self, id: &str, patch: PlantPatch) -> GardenResult<Plant> {
        self.with_conn(|conn| plant_crud::update_plant(conn, id, &patch))
            .await
    }

    async fn create_plant(&self, plant: NewPlant) -> GardenResult<Plant> {
        let now = self.clock.now();
        let created = Plant {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: plant.user_id,
            name: plant.name,
            quantity: plant.quantity,
            image_url: plant.image_url,
            watering_days: plant.watering_days,
            watering_hours: plant.watering_hours,
            last_watered: now,
            created_at: now,
        };
        self.with_conn(|conn| plant_crud::insert_plant(conn, &created))
            .await?;
        debug!(plant_id = %created.id, name = %created.name, "plant created");
        Ok(created)
    }

    async fn delete_plant(&self, id: &str) -> GardenResult<()> {
        let removed = self
            .with_conn(|conn| plant_crud::delete_plant(conn, id))
            .await?;
        if removed {
            Ok(())
        } else {
            Err(GardenError::PlantNotFound { id: id.to_string() })
        }
    }

    async fn list_plants(&self, user_id: Option<&str>) -> GardenResult<Vec<Plant>> {
        self.with_conn(|conn| plant_crud::list_plants(conn, user_id))
            .await
    }
}

impl CommunityQuery for SqlitePlantStore {
    async fn gardeners_for(&self, plant_name: &str) -> GardenResult<Vec<PlantGardener>> {
        self.with_conn(|conn| community::gardeners_for(conn, plant_name))
            .await
    }
}
