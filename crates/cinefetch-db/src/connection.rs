//! Database connection management.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use rusqlite::Connection;

use super::dirs::{AppDir, app_dir};
use super::migrations::run_migrations;

/// Database file name.
const DB_FILE: &str = "cinefetch.db";

/// How long a write waits on another connection's lock.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens (or creates) the database and runs migrations.
///
/// The file lives at `{dir}/cinefetch.db`, or in the per-user data
/// directory (`$XDG_DATA_HOME/cinefetch`, `~/.local/share/cinefetch`).
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or migrations fail.
pub fn open_db(dir: Option<&Path>) -> Result<Connection> {
    let db_path = app_dir(dir, AppDir::Data)?.join(DB_FILE);

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let conn = Connection::open(&db_path)
        .with_context(|| format!("failed to open database {}", db_path.display()))?;
    conn.busy_timeout(BUSY_TIMEOUT)
        .context("failed to set database busy timeout")?;
    tracing::debug!(path = %db_path.display(), "Opened document store");

    run_migrations(&conn).context("database migration failed")?;

    Ok(conn)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_open_db_creates_nested_dir() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        // Act
        let conn = open_db(Some(&nested)).unwrap();

        // Assert
        assert!(nested.join(DB_FILE).exists());
        let version: u32 = conn
            .pragma_query_value(None, "user_version", |row| row.get(0))
            .unwrap();
        assert!(version > 0);
    }

    #[test]
    fn test_reopen_keeps_documents() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let conn = open_db(Some(dir.path())).unwrap();
        conn.execute(
            "INSERT INTO teachers (name, department, position, created_at) VALUES ('a', 'b', 'c', 'd')",
            [],
        )
        .unwrap();
        drop(conn);

        // Act
        let conn = open_db(Some(dir.path())).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM teachers", [], |row| row.get(0))
            .unwrap();

        // Assert
        assert_eq!(count, 1);
    }
}
