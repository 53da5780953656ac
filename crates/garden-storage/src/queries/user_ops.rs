//! Gardener profile rows.

use rusqlite::{params, Connection, OptionalExtension, Row};

use garden_core::errors::GardenResult;
use garden_core::timestamp::{format_timestamp, parse_timestamp};
use garden_core::User;

use crate::to_storage_err;

/// Insert or replace a gardener profile.
pub fn upsert_user(conn: &Connection, user: &User) -> GardenResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO users (
            id, username, email, country, is_admin, created_at, last_login
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            user.id,
            user.username,
            user.email,
            user.country,
            user.is_admin as i32,
            format_timestamp(user.created_at),
            user.last_login.map(format_timestamp),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn get_user(conn: &Connection, id: &str) -> GardenResult<Option<User>> {
    conn.query_row(
        "SELECT id, username, email, country, is_admin, created_at, last_login
         FROM users WHERE id = ?1",
        params![id],
        |row| Ok(row_to_user(row)),
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))?
    .transpose()
}

fn row_to_user(row: &Row<'_>) -> GardenResult<User> {
    let get_err = |e: rusqlite::Error| to_storage_err(e.to_string());

    let created_at: String = row.get(5).map_err(get_err)?;
    let last_login: Option<String> = row.get(6).map_err(get_err)?;

    Ok(User {
        id: row.get(0).map_err(get_err)?,
        username: row.get(1).map_err(get_err)?,
        email: row.get(2).map_err(get_err)?,
        country: row.get(3).map_err(get_err)?,
        is_admin: row.get::<_, i32>(4).map_err(get_err)? != 0,
        created_at: parse_timestamp(&created_at)?,
        last_login: last_login.as_deref().map(parse_timestamp).transpose()?,
    })
}
