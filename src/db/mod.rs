use rusqlite::Connection;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::Result;

mod contacts;
mod detail;
mod projects;
mod schema;
mod visits;

pub use schema::SCHEMA_VERSION;

/// Handle to the visit log store. Owned by the caller and passed by
/// reference into every operation.
pub struct Database {
    conn: Connection,
}

/// Row counts shown on the home screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct RecordCounts {
    pub visits: u32,
    pub projects: u32,
    pub contacts: u32,
}

impl Database {
    /// Open database at `path`, creating it if needed, and bring the schema up to date
    pub fn open_at(path: PathBuf) -> Result<Self> {
        // Create parent directories
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        debug!(path = %path.display(), "opening database");
        let conn = Connection::open(&path)?;

        let db = Self { conn };
        db.ensure_schema()?;
        Ok(db)
    }

    /// Open in-memory database for testing
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;

        let db = Self { conn };
        db.ensure_schema()?;
        Ok(db)
    }

    /// Apply every pending schema step. Safe to call repeatedly.
    pub fn ensure_schema(&self) -> Result<()> {
        let mut version = self.get_schema_version()?;

        while version < SCHEMA_VERSION {
            let next = version + 1;
            // Each step commits together with its version bump
            let tx = self.conn.unchecked_transaction()?;
            match next {
                1 => tx.execute_batch(schema::SCHEMA_V1)?,
                2 => {
                    if !has_column(&tx, "Contacts", "projectId")? {
                        tx.execute_batch(schema::MIGRATION_V2_ADD_COLUMN)?;
                    }
                    tx.execute_batch(schema::MIGRATION_V2_INDEXES)?;
                }
                _ => unreachable!("no migration defined for schema version {next}"),
            }
            set_schema_version(&tx, next)?;
            tx.commit()?;

            info!(version = next, "applied schema migration");
            version = next;
        }

        Ok(())
    }

    pub fn count_records(&self) -> Result<RecordCounts> {
        let count = |table: &str| -> Result<u32> {
            let sql = format!("SELECT COUNT(*) FROM {}", table);
            Ok(self.conn.query_row(&sql, [], |row| row.get(0))?)
        };

        Ok(RecordCounts {
            visits: count("Visits")?,
            projects: count("Projects")?,
            contacts: count("Contacts")?,
        })
    }

    fn get_schema_version(&self) -> Result<i32> {
        let result: Result<i32, _> =
            self.conn
                .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                    row.get(0)
                });

        match result {
            Ok(v) => Ok(v),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
            Err(rusqlite::Error::SqliteFailure(err, msg)) => {
                // "no such table" is error code 1 (SQLITE_ERROR)
                if err.code == rusqlite::ErrorCode::Unknown
                    && msg.as_ref().map_or(false, |m| m.contains("no such table"))
                {
                    Ok(0)
                } else {
                    Err(rusqlite::Error::SqliteFailure(err, msg).into())
                }
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO schema_version (id, version) VALUES (1, ?)",
        [version],
    )?;
    Ok(())
}

fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(names.iter().any(|n| n == column))
}
