//! Report command: per-patient summary of stored readings.

use crate::cli::ReportArgs;
use crate::config;
use crate::error::Result;
use crate::format;
use std::path::PathBuf;
use tracing::debug;

/// Execute the report command.
pub fn execute(args: &ReportArgs, json: bool, db_override: Option<&PathBuf>) -> Result<()> {
    let store = config::open_store_from(db_override)?;

    let entries = store.report(args.limit, args.offset)?;
    debug!(patients = entries.len(), "report ready");

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print!("{}", format::render_report(&entries));
    }
    Ok(())
}
