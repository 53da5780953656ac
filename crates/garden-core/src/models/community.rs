use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Community-wide totals for one plant name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CommunityPlant {
    pub name: String,
    pub image_url: String,
    pub total_quantity: u64,
    /// Number of plant rows with this name.
    pub gardener_count: u64,
}

/// One gardener growing a given plant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlantGardener {
    pub user_id: String,
    pub username: String,
    pub country: String,
    pub quantity: u32,
}
