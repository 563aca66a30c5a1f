//! Init command: create the workspace and reset the readings schema.
//!
//! Schema creation is destructive (drop-and-recreate), so once the
//! database holds readings a second init refuses unless `--force` is
//! given.

use crate::cli::InitArgs;
use crate::config::{ConfigPaths, Metadata};
use crate::error::{HeartDbError, Result};
use crate::storage::ReadingStore;
use std::path::PathBuf;
use tracing::info;

/// Execute the init command.
///
/// With `--db` the workspace directory is skipped entirely and the
/// schema is reset directly at that path. Otherwise a `.heartdb`
/// directory is created in the current directory with default
/// metadata.
pub fn execute(args: &InitArgs, db_override: Option<&PathBuf>) -> Result<()> {
    let (store, db_path) = if let Some(path) = db_override {
        (ReadingStore::open(path)?, path.clone())
    } else {
        let heartdb_dir = std::env::current_dir()?.join(".heartdb");
        std::fs::create_dir_all(&heartdb_dir)?;

        let paths = ConfigPaths::resolve(&heartdb_dir, None)?;
        if !heartdb_dir.join("metadata.json").exists() {
            Metadata::default().save(&heartdb_dir)?;
        }
        (ReadingStore::open(&paths.db_path)?, paths.db_path)
    };

    let existing = store.count_readings()?;
    if existing > 0 && !args.force {
        return Err(HeartDbError::ResetRefused { count: existing });
    }

    store.create_schema()?;
    info!(db = %db_path.display(), "schema created");
    println!("Initialized heart-rate database at {}", db_path.display());
    Ok(())
}
