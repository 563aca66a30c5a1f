//! Insert command: record one heart-rate reading.

use crate::cli::InsertArgs;
use crate::config;
use crate::error::{HeartDbError, Result};
use crate::model::{TIME_FORMAT, format_time};
use chrono::{Local, NaiveDateTime};
use std::path::PathBuf;
use tracing::debug;

/// Execute the insert command.
///
/// No validation of the value range or the name: the store accepts
/// whatever is given, matching the report/chart query semantics.
pub fn execute(args: &InsertArgs, db_override: Option<&PathBuf>) -> Result<()> {
    let store = config::open_store_from(db_override)?;

    let time = match &args.time {
        Some(raw) => parse_time(raw)?,
        None => Local::now().naive_local(),
    };

    store.insert(time, &args.name, args.value)?;
    debug!(name = %args.name, value = args.value, "reading recorded");

    println!(
        "Recorded {} bpm for {} at {}",
        args.value,
        args.name,
        format_time(&time)
    );
    Ok(())
}

/// Parse a user-supplied timestamp, with or without fractional seconds.
fn parse_time(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
        .map_err(|source| HeartDbError::Timestamp {
            value: raw.to_string(),
            source,
        })
}
