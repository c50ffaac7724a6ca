use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn initialize_schema(conn: &Connection) -> Result<()> {
    create_settings_table(conn)?;
    insert_default_settings(conn)?;
    create_appointments_table(conn)?;
    Ok(())
}

fn create_settings_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS settings (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            theme TEXT NOT NULL DEFAULT 'light',
            current_view TEXT NOT NULL DEFAULT 'Month',
            month_event_cap INTEGER NOT NULL DEFAULT 5,
            week_start_hour INTEGER NOT NULL DEFAULT 7,
            week_end_hour INTEGER NOT NULL DEFAULT 21,
            day_start_hour INTEGER NOT NULL DEFAULT 6,
            day_end_hour INTEGER NOT NULL DEFAULT 22,
            now_marker TEXT NOT NULL DEFAULT 'live',
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )
    .context("Failed to create settings table")?;

    Ok(())
}

fn insert_default_settings(conn: &Connection) -> Result<()> {
    conn.execute("INSERT OR IGNORE INTO settings (id) VALUES (1)", [])
        .context("Failed to insert default settings")?;
    Ok(())
}

fn create_appointments_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS appointments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date TEXT NOT NULL,
            time TEXT NOT NULL,
            subject_name TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'pending',
            procedure TEXT,
            complaint TEXT,
            session_number INTEGER,
            total_sessions INTEGER,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )
    .context("Failed to create appointments table")?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_appointments_date ON appointments(date, time)",
        [],
    )
    .context("Failed to create appointments date index")?;

    Ok(())
}
