//! Database schema and connection management

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Connection to the standings database.
///
/// Dropping it closes the connection; [`StandingsDatabase::close`] does the
/// same but reports failures.
pub struct StandingsDatabase {
    pub(crate) conn: Connection,
    path: Option<PathBuf>,
}

impl StandingsDatabase {
    /// Open (creating if needed) the database file and ensure the table exists
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the parent directory exists
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database at {}", path.display()))?;
        let mut db = Self {
            conn,
            path: Some(path.to_path_buf()),
        };
        db.initialize_schema()?;
        Ok(db)
    }

    /// In-memory database with the schema applied
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn, path: None };
        db.initialize_schema()?;
        Ok(db)
    }

    /// File backing this database, `None` for in-memory databases
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Create the standings table if it does not exist yet
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn
            .execute(
                "CREATE TABLE IF NOT EXISTS standings (
                    team_id INTEGER PRIMARY KEY,
                    team_name VARCHAR(100),
                    \"rank\" INTEGER,
                    points INTEGER,
                    goals_diff INTEGER,
                    form VARCHAR(50),
                    played INTEGER,
                    win INTEGER,
                    draw INTEGER,
                    lose INTEGER
                )",
                [],
            )
            .context("Failed to create standings table")?;

        Ok(())
    }

    /// Close the connection, surfacing any error from SQLite
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| e)
            .context("Failed to close database connection")
    }
}
