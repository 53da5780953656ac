//! v002: lookup indexes for dashboard listing and community queries.

use rusqlite::Connection;

use garden_core::errors::GardenResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> GardenResult<()> {
    conn.execute_batch(
        "
        CREATE INDEX IF NOT EXISTS idx_plants_user_created ON plants(user_id, created_at);
        CREATE INDEX IF NOT EXISTS idx_plants_created ON plants(created_at);
        CREATE INDEX IF NOT EXISTS idx_plants_name ON plants(name);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
