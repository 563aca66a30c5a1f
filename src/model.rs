//! Data types for readings and query results.

use chrono::NaiveDateTime;
use serde::ser::{SerializeSeq, SerializeTuple};
use serde::{Serialize, Serializer};

/// Canonical timestamp format for storage and all string output:
/// `YYYY-MM-DD HH:MM:SS.ffffff` (zero-padded microseconds).
///
/// Timestamps are stored as TEXT in this exact form, which is
/// fixed-width, so lexicographic `ORDER BY time` matches chronological
/// order.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Format a timestamp in the canonical form.
#[must_use]
pub fn format_time(time: &NaiveDateTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// One heart-rate measurement.
///
/// Readings are insert-only: `id` is assigned by the store and never
/// changes, and rows are only destroyed by a full schema reset.
/// Duplicate (name, time) pairs are permitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub id: i64,
    pub time: NaiveDateTime,
    pub name: String,
    pub value: i64,
}

/// One row of the per-patient summary report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    /// Formatted timestamp of the representative reading.
    pub time: String,
    pub name: String,
    /// Value of the representative reading for this patient.
    pub last_heartrate: i64,
    /// Total number of readings stored for this patient.
    pub records: u64,
}

/// Result of a chart query.
///
/// The shape is asymmetric on purpose, inherited from the original
/// design: no data serializes as `[]`, while data serializes as a
/// two-element array `[times, values]` of parallel, index-aligned
/// sequences. The enum makes callers handle both shapes explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartSeries {
    Empty,
    Series {
        /// Formatted timestamps, oldest first.
        times: Vec<String>,
        /// Heart-rate values aligned with `times`.
        values: Vec<i64>,
    },
}

impl ChartSeries {
    /// Number of points in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Series { times, .. } => times.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for ChartSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Empty => {
                let seq = serializer.serialize_seq(Some(0))?;
                seq.end()
            }
            Self::Series { times, values } => {
                let mut pair = serializer.serialize_tuple(2)?;
                pair.serialize_element(times)?;
                pair.serialize_element(values)?;
                pair.end()
            }
        }
    }
}
