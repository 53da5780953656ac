//! Cross-gardener reads.

use rusqlite::{params, Connection};

use garden_core::errors::GardenResult;
use garden_core::models::PlantGardener;

use crate::to_storage_err;

/// Gardeners growing a plant with exactly `plant_name`, newest plant first.
/// The inner join drops plants whose owner profile is missing.
pub fn gardeners_for(conn: &Connection, plant_name: &str) -> GardenResult<Vec<PlantGardener>> {
    let mut stmt = conn
        .prepare(
            "SELECT u.id, u.username, u.country, p.quantity
             FROM plants p
             JOIN users u ON u.id = p.user_id
             WHERE p.name = ?1
             ORDER BY p.created_at DESC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![plant_name], |row| {
            Ok(PlantGardener {
                user_id: row.get(0)?,
                username: row.get(1)?,
                country: row.get(2)?,
                quantity: row.get(3)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}
