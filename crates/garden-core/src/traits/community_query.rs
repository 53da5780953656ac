use crate::errors::GardenResult;
use crate::models::PlantGardener;

/// Read-only community queries across gardeners.
pub trait CommunityQuery: Send + Sync {
    /// Gardeners growing a plant with exactly this name. Rows whose owner
    /// profile is missing are skipped.
    async fn gardeners_for(&self, plant_name: &str) -> GardenResult<Vec<PlantGardener>>;
}
