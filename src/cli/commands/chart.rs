//! Chart command: recent readings for one patient, oldest first.

use crate::cli::ChartArgs;
use crate::config;
use crate::error::Result;
use crate::format;
use std::path::PathBuf;
use tracing::debug;

/// Execute the chart command.
///
/// JSON output keeps the store's asymmetric shape: `[]` when the
/// patient has no readings, `[times, values]` otherwise.
pub fn execute(args: &ChartArgs, json: bool, db_override: Option<&PathBuf>) -> Result<()> {
    let store = config::open_store_from(db_override)?;

    let series = store.chart(&args.name)?;
    debug!(name = %args.name, points = series.len(), "chart ready");

    if json {
        println!("{}", serde_json::to_string_pretty(&series)?);
    } else {
        print!("{}", format::render_chart(&args.name, &series));
    }
    Ok(())
}
