//! Database module for clinicore.
//!
//! Owns the SQLite connection and the idempotent schema bootstrap. The
//! repositories in [`crate::repo`] borrow the connection exposed here; this
//! module itself never issues entity-level statements.

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

/// A live storage handle with the clinic schema in place.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (creating if necessary) the database file and ensures the
    /// schema exists.
    ///
    /// Safe to call on every process start: all DDL is `CREATE TABLE IF NOT
    /// EXISTS`. A failure here (file unreachable, DDL rejected) is fatal to
    /// startup and surfaced to the caller.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open database at {}", path.display()))?;
        Self::bootstrap(&conn)?;
        debug!(path = %path.display(), "database opened");
        Ok(Self { conn })
    }

    /// Opens an in-memory database with the schema in place.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
        Self::bootstrap(&conn)?;
        Ok(Self { conn })
    }

    fn bootstrap(conn: &Connection) -> Result<()> {
        // Foreign key enforcement is per-connection in SQLite and off by
        // default; the diagnosis cascade/set-null behavior depends on it.
        conn.pragma_update(None, "foreign_keys", true)
            .context("failed to enable foreign key enforcement")?;

        let schema = include_str!("schema.sql");
        conn.execute_batch(schema)
            .context("failed to execute schema")?;

        Ok(())
    }

    /// The underlying connection, for repository construction.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_creates_all_tables() {
        let db = Database::open_in_memory().unwrap();
        let count: i64 = db
            .connection()
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master
                 WHERE type = 'table' AND name IN ('users', 'patient', 'diagnosis')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn bootstrap_is_idempotent() {
        let db = Database::open_in_memory().unwrap();
        // Running the whole batch a second time must succeed unchanged.
        Database::bootstrap(db.connection()).unwrap();
    }

    #[test]
    fn foreign_keys_are_enforced() {
        let db = Database::open_in_memory().unwrap();
        let enabled: i64 = db
            .connection()
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }
}
