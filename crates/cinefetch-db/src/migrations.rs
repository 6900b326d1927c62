//! Schema version management using `PRAGMA user_version`.

use anyhow::{Context, Result};
use rusqlite::Connection;

/// Current schema version.
const CURRENT_VERSION: u32 = 2;

/// Runs database migrations up to `CURRENT_VERSION`.
///
/// # Errors
///
/// Returns an error if any SQL statement fails.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    let version: u32 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .context("failed to read user_version")?;

    if version < 1 {
        migrate_v1(conn).context("migration to v1 failed")?;
    }
    if version < 2 {
        migrate_v2(conn).context("migration to v2 failed")?;
    }

    if version != CURRENT_VERSION {
        tracing::debug!(from = version, to = CURRENT_VERSION, "Migrated document store");
    }
    conn.pragma_update(None, "user_version", CURRENT_VERSION)
        .context("failed to update user_version")?;

    Ok(())
}

/// Migration to v1: create the `movies` collection.
fn migrate_v1(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS movies (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       TEXT NOT NULL,
            director    TEXT,
            year        TEXT,
            imdb_id     TEXT,
            tmdb_id     INTEGER,
            plot        TEXT,
            poster_url  TEXT,
            detail_url  TEXT,
            rating      TEXT,
            genre       TEXT,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_movies_title ON movies(title);
        CREATE INDEX IF NOT EXISTS idx_movies_director ON movies(director);",
    )
    .context("failed to create movies table")?;

    Ok(())
}

/// Migration to v2: create the `teachers` collection.
fn migrate_v2(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS teachers (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            department  TEXT NOT NULL,
            position    TEXT NOT NULL,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_teachers_name ON teachers(name);
        CREATE INDEX IF NOT EXISTS idx_teachers_department ON teachers(department);
        CREATE INDEX IF NOT EXISTS idx_teachers_position ON teachers(position);",
    )
    .context("failed to create teachers table")?;

    Ok(())
}
