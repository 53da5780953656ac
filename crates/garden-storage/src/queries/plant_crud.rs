//! Insert, get, update, delete, and list plants.

use rusqlite::{params, Connection, OptionalExtension, Row};

use garden_core::errors::{GardenError, GardenResult};
use garden_core::timestamp::{format_timestamp, parse_timestamp};
use garden_core::{Plant, PlantPatch};

use crate::to_storage_err;

const PLANT_COLUMNS: &str = "id, user_id, name, quantity, image_url, watering_days,
                             watering_hours, last_watered, created_at";

/// Insert a fully stamped plant row.
pub fn insert_plant(conn: &Connection, plant: &Plant) -> GardenResult<()> {
    conn.execute(
        "INSERT INTO plants (
            id, user_id, name, quantity, image_url, watering_days,
            watering_hours, last_watered, created_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            plant.id,
            plant.user_id,
            plant.name,
            plant.quantity,
            plant.image_url,
            plant.watering_days,
            plant.watering_hours,
            format_timestamp(plant.last_watered),
            format_timestamp(plant.created_at),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Get a single plant by ID.
pub fn get_plant(conn: &Connection, id: &str) -> GardenResult<Option<Plant>> {
    let mut stmt = conn
        .prepare(&format!("SELECT {PLANT_COLUMNS} FROM plants WHERE id = ?1"))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let result = stmt
        .query_row(params![id], map_plant_row)
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    result.transpose()
}

/// Apply a patch and return the stored row.
/// Read, write and re-read happen in one transaction.
pub fn update_plant(conn: &Connection, id: &str, patch: &PlantPatch) -> GardenResult<Plant> {
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("update_plant begin: {e}")))?;

    let mut plant = get_plant(&tx, id)?.ok_or_else(|| GardenError::PlantNotFound {
        id: id.to_string(),
    })?;
    if patch.is_empty() {
        return Ok(plant);
    }
    plant.apply(patch);

    tx.execute(
        "UPDATE plants SET
            name = ?2, quantity = ?3, image_url = ?4, watering_days = ?5,
            watering_hours = ?6, last_watered = ?7
         WHERE id = ?1",
        params![
            plant.id,
            plant.name,
            plant.quantity,
            plant.image_url,
            plant.watering_days,
            plant.watering_hours,
            format_timestamp(plant.last_watered),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    tx.commit()
        .map_err(|e| to_storage_err(format!("update_plant commit: {e}")))?;
    Ok(plant)
}

/// Delete a plant. Returns whether a row was removed.
pub fn delete_plant(conn: &Connection, id: &str) -> GardenResult<bool> {
    let rows = conn
        .execute("DELETE FROM plants WHERE id = ?1", params![id])
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(rows > 0)
}

/// All plants, or one owner's plants, newest first.
pub fn list_plants(conn: &Connection, user_id: Option<&str>) -> GardenResult<Vec<Plant>> {
    let sql = match user_id {
        Some(_) => format!(
            "SELECT {PLANT_COLUMNS} FROM plants WHERE user_id = ?1 ORDER BY created_at DESC"
        ),
        None => format!("SELECT {PLANT_COLUMNS} FROM plants ORDER BY created_at DESC"),
    };
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = match user_id {
        Some(owner) => stmt.query_map(params![owner], map_plant_row),
        None => stmt.query_map([], map_plant_row),
    }
    .map_err(|e| to_storage_err(e.to_string()))?;

    let mut plants = Vec::new();
    for row in rows {
        plants.push(row.map_err(|e| to_storage_err(e.to_string()))??);
    }
    Ok(plants)
}

fn map_plant_row(row: &Row<'_>) -> rusqlite::Result<GardenResult<Plant>> {
    Ok(row_to_plant(row))
}

/// Map a row to a Plant. Timestamps that fail to parse are reported as
/// `InvalidTimestamp` rather than replaced.
pub(crate) fn row_to_plant(row: &Row<'_>) -> GardenResult<Plant> {
    let get_err = |e: rusqlite::Error| to_storage_err(e.to_string());

    let last_watered: String = row.get(7).map_err(get_err)?;
    let created_at: String = row.get(8).map_err(get_err)?;

    Ok(Plant {
        id: row.get(0).map_err(get_err)?,
        user_id: row.get(1).map_err(get_err)?,
        name: row.get(2).map_err(get_err)?,
        quantity: row.get(3).map_err(get_err)?,
        image_url: row.get(4).map_err(get_err)?,
        watering_days: row.get(5).map_err(get_err)?,
        watering_hours: row.get(6).map_err(get_err)?,
        last_watered: parse_timestamp(&last_watered)?,
        created_at: parse_timestamp(&created_at)?,
    })
}
