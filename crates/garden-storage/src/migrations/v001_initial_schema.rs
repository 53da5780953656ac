//! v001: users, plants.

use rusqlite::Connection;

use garden_core::errors::GardenResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> GardenResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id          TEXT PRIMARY KEY,
            username    TEXT NOT NULL,
            email       TEXT NOT NULL,
            country     TEXT NOT NULL DEFAULT '',
            is_admin    INTEGER NOT NULL DEFAULT 0,
            created_at  TEXT NOT NULL,
            last_login  TEXT
        );

        CREATE TABLE IF NOT EXISTS plants (
            id              TEXT PRIMARY KEY,
            user_id         TEXT NOT NULL,
            name            TEXT NOT NULL,
            quantity        INTEGER NOT NULL DEFAULT 1 CHECK (quantity >= 1),
            image_url       TEXT NOT NULL DEFAULT '',
            watering_days   INTEGER NOT NULL DEFAULT 0 CHECK (watering_days >= 0),
            watering_hours  INTEGER NOT NULL DEFAULT 0 CHECK (watering_hours >= 0),
            last_watered    TEXT NOT NULL,
            created_at      TEXT NOT NULL
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
