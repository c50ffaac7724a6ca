// Database service module
// SQLite connection and schema management for settings and appointments

use anyhow::{Context, Result};
use rusqlite::Connection;

mod schema;

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Create a new database connection
    ///
    /// # Arguments
    /// * `path` - Path to the SQLite database file (or ":memory:" for in-memory)
    ///
    /// # Examples
    /// ```
    /// use ngo_agenda::services::database::Database;
    /// let db = Database::new(":memory:").unwrap();
    /// ```
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database at {}", path))?;

        conn.execute("PRAGMA foreign_keys = ON", [])
            .context("Failed to enable foreign keys")?;

        Ok(Self { conn })
    }

    /// Open an in-memory database with the schema in place
    pub fn in_memory() -> Result<Self> {
        let db = Self::new(":memory:")?;
        db.initialize_schema()?;
        Ok(db)
    }

    /// Create all required tables if they don't exist
    pub fn initialize_schema(&self) -> Result<()> {
        schema::initialize_schema(&self.conn)
    }

    /// Get a reference to the database connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn table_exists(db: &Database, name: &str) -> bool {
        db.connection()
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                [name],
                |row| row.get::<_, i64>(0),
            )
            .map(|count| count == 1)
            .unwrap_or(false)
    }

    #[test]
    fn test_new_database_with_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("agenda.db");
        let db_path_str = db_path.to_str().unwrap();

        let result = Database::new(db_path_str);
        assert!(result.is_ok(), "Should create file-based database");
        assert!(Path::new(db_path_str).exists(), "Database file should exist");
    }

    #[test]
    fn test_initialize_schema_creates_tables() {
        let db = Database::in_memory().unwrap();
        assert!(table_exists(&db, "settings"));
        assert!(table_exists(&db, "appointments"));
    }

    #[test]
    fn test_initialize_schema_is_idempotent() {
        let db = Database::in_memory().unwrap();
        assert!(db.initialize_schema().is_ok());
    }

    #[test]
    fn test_default_settings_inserted() {
        let db = Database::in_memory().unwrap();

        let (theme, cap, marker): (String, i64, String) = db
            .connection()
            .query_row(
                "SELECT theme, month_event_cap, now_marker FROM settings WHERE id = 1",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .unwrap();

        assert_eq!(theme, "light");
        assert_eq!(cap, 5);
        assert_eq!(marker, "live");
    }

    #[test]
    fn test_foreign_keys_enabled() {
        let db = Database::new(":memory:").unwrap();
        let enabled: i64 = db
            .connection()
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1, "Foreign keys should be enabled");
    }
}
