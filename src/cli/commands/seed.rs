//! Seed command: insert pseudo-random demo readings.
//!
//! Readings are spread one second apart ending now, so a chart run
//! immediately afterwards shows a plausible recent series.

use crate::cli::SeedArgs;
use crate::config;
use crate::error::Result;
use chrono::{Duration, Local};
use rand::Rng;
use std::path::PathBuf;
use tracing::info;

const DEFAULT_NAMES: &[&str] = &["Ana", "Luis", "Hernan"];

/// Execute the seed command.
pub fn execute(args: &SeedArgs, db_override: Option<&PathBuf>) -> Result<()> {
    let store = config::open_store_from(db_override)?;

    let names: Vec<String> = if args.names.is_empty() {
        DEFAULT_NAMES.iter().map(ToString::to_string).collect()
    } else {
        args.names.clone()
    };

    let mut rng = rand::rng();
    let start = Local::now().naive_local() - Duration::seconds(i64::from(args.count));

    for i in 0..args.count {
        let name = &names[rng.random_range(0..names.len())];
        let value = rng.random_range(55..=110);
        let time = start + Duration::seconds(i64::from(i));
        store.insert(time, name, value)?;
    }

    info!(count = args.count, patients = names.len(), "demo readings seeded");
    println!(
        "Inserted {} readings for {} patient(s)",
        args.count,
        names.len()
    );
    Ok(())
}
