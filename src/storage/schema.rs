//! Database schema definition.

use rusqlite::{Connection, Result};

/// The complete SQL schema for the readings database.
pub const SCHEMA_SQL: &str = r"
    -- Readings table. `time` is TEXT in 'YYYY-MM-DD HH:MM:SS.ffffff'
    -- form; fixed width, so ORDER BY time is chronological.
    CREATE TABLE IF NOT EXISTS heartrate (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        time DATETIME NOT NULL,
        name TEXT NOT NULL,
        value INTEGER NOT NULL
    );

    -- Report groups by name; chart filters by name and orders by time.
    CREATE INDEX IF NOT EXISTS idx_heartrate_name ON heartrate(name);
    CREATE INDEX IF NOT EXISTS idx_heartrate_name_time ON heartrate(name, time);
    CREATE INDEX IF NOT EXISTS idx_heartrate_time ON heartrate(time);
";

/// Apply the schema. Idempotent; safe to run on every open.
pub fn apply_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL)
}

/// Drop the readings table, discarding all stored readings.
pub fn drop_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch("DROP TABLE IF EXISTS heartrate;")
}
