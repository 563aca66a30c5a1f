//! `SQLite` storage implementation.

use crate::error::Result;
use crate::model::{ChartSeries, Reading, ReportEntry, TIME_FORMAT, format_time};
use crate::storage::schema::{apply_schema, drop_schema};
use chrono::NaiveDateTime;
use rusqlite::Connection;
use std::fmt::Write as _;
use std::path::Path;
use tracing::debug;

/// Maximum number of readings returned by [`ReadingStore::chart`].
pub const CHART_WINDOW: usize = 250;

/// SQLite-backed store for heart-rate readings.
///
/// Owns a single synchronous connection; constructed once by the
/// caller and dropped at process exit. Every operation is one
/// statement, committed immediately. Concurrent access safety is
/// delegated entirely to `SQLite`.
#[derive(Debug)]
pub struct ReadingStore {
    conn: Connection,
}

impl ReadingStore {
    /// Open (creating if needed) the database at the given path and
    /// apply the idempotent schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or
    /// schema application fails.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        apply_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        apply_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Drop and recreate the readings table.
    ///
    /// Destroys all stored readings unconditionally; there is no
    /// confirmation step here. Callers guard (the CLI requires
    /// `--force` once data exists). Calling this twice in a row leaves
    /// an empty, queryable table.
    pub fn create_schema(&self) -> Result<()> {
        drop_schema(&self.conn)?;
        apply_schema(&self.conn)?;
        debug!("readings schema recreated");
        Ok(())
    }

    /// Append one reading with an auto-assigned id.
    ///
    /// No input validation: negative values and empty names are
    /// accepted. Committed immediately.
    pub fn insert(&self, time: NaiveDateTime, name: &str, value: i64) -> Result<()> {
        self.conn.execute(
            "INSERT INTO heartrate (time, name, value) VALUES (?1, ?2, ?3)",
            rusqlite::params![format_time(&time), name, value],
        )?;
        Ok(())
    }

    /// Total number of stored readings.
    pub fn count_readings(&self) -> Result<u64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM heartrate", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Per-patient summary: one representative reading per name plus
    /// the count of readings sharing that name, ordered by time.
    ///
    /// Which row represents a multi-reading group is whatever SQLite's
    /// bare-column group-by selection yields; it is not guaranteed to
    /// be the most recent reading. Inherited behavior, kept as-is.
    ///
    /// `limit == 0` means unbounded. `offset` only applies when
    /// `limit > 0`; an offset with no limit is silently ignored (also
    /// inherited).
    pub fn report(&self, limit: u32, offset: u32) -> Result<Vec<ReportEntry>> {
        let mut sql = String::from(
            "SELECT time, name, value, COUNT(name) FROM heartrate \
             GROUP BY name ORDER BY time",
        );
        if limit > 0 {
            let _ = write!(sql, " LIMIT {limit}");
            if offset > 0 {
                let _ = write!(sql, " OFFSET {offset}");
            }
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| {
            Ok(ReportEntry {
                time: row.get(0)?,
                name: row.get(1)?,
                last_heartrate: row.get(2)?,
                records: row.get(3)?,
            })
        })?;
        let entries = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        debug!(rows = entries.len(), limit, offset, "report computed");
        Ok(entries)
    }

    /// Time series for one patient: the [`CHART_WINDOW`] most recent
    /// readings, returned oldest-first.
    ///
    /// `name` is matched exactly; no normalization. When no readings
    /// exist the result is [`ChartSeries::Empty`] rather than a pair
    /// of empty sequences (inherited shape, see [`ChartSeries`]).
    pub fn chart(&self, name: &str) -> Result<ChartSeries> {
        let mut stmt = self.conn.prepare(
            "SELECT id, time, name, value FROM heartrate \
             WHERE name = ?1 ORDER BY time DESC LIMIT ?2",
        )?;
        let rows = stmt.query_map(rusqlite::params![name, CHART_WINDOW as i64], |row| {
            let raw: String = row.get(1)?;
            let time = NaiveDateTime::parse_from_str(&raw, TIME_FORMAT).map_err(|err| {
                rusqlite::Error::FromSqlConversionFailure(
                    1,
                    rusqlite::types::Type::Text,
                    Box::new(err),
                )
            })?;
            Ok(Reading {
                id: row.get(0)?,
                time,
                name: row.get(2)?,
                value: row.get(3)?,
            })
        })?;
        let mut readings = rows.collect::<rusqlite::Result<Vec<_>>>()?;

        if readings.is_empty() {
            return Ok(ChartSeries::Empty);
        }

        // The window comes back newest-first; flip to chronological.
        readings.reverse();
        let times = readings.iter().map(|r| format_time(&r.time)).collect();
        let values = readings.iter().map(|r| r.value).collect();
        Ok(ChartSeries::Series { times, values })
    }
}
