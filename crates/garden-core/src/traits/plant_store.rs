use crate::errors::GardenResult;
use crate::models::{NewPlant, Plant, PlantPatch};

/// Persistence collaborator for plant records.
///
/// The watering engine only needs `read_plant` and `update_plant`; the
/// remaining methods back the dashboard listing.
pub trait PlantStore: Send + Sync {
    /// Fetch one plant. Missing ids yield `GardenError::PlantNotFound`.
    async fn read_plant(&self, id: &str) -> GardenResult<Plant>;

    /// Apply a partial update and return the stored record.
    async fn update_plant(&self, id: &str, patch: PlantPatch) -> GardenResult<Plant>;

    /// Insert a plant, stamping `id`, `created_at` and `last_watered`.
    async fn create_plant(&self, plant: NewPlant) -> GardenResult<Plant>;

    async fn delete_plant(&self, id: &str) -> GardenResult<()>;

    /// All plants, or one gardener's plants, newest first.
    async fn list_plants(&self, user_id: Option<&str>) -> GardenResult<Vec<Plant>>;
}
