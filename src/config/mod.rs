//! Configuration management for `heartdb`.
//!
//! The workspace is a `.heartdb` directory holding `metadata.json`,
//! discovered by walking up from the current directory. Resolution
//! precedence (highest wins):
//! 1. `--db` CLI override
//! 2. `HEARTDB_DIR` environment variable (workspace location)
//! 3. Nearest `.heartdb` directory up the tree

use crate::error::{HeartDbError, Result};
use crate::storage::ReadingStore;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default database filename used when metadata is missing.
const DEFAULT_DB_FILENAME: &str = "heart.db";
/// Workspace directory name searched for during discovery.
const WORKSPACE_DIR_NAME: &str = ".heartdb";
const METADATA_FILENAME: &str = "metadata.json";

/// Startup metadata describing where the database lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Metadata {
    pub database: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            database: DEFAULT_DB_FILENAME.to_string(),
        }
    }
}

impl Metadata {
    /// Load `metadata.json` from the workspace directory.
    ///
    /// A missing file yields defaults; a present but unreadable or
    /// malformed file is an error.
    pub fn load(heartdb_dir: &Path) -> Result<Self> {
        let path = heartdb_dir.join(METADATA_FILENAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&path)?;
        let mut metadata: Self = serde_json::from_str(&contents)?;

        if metadata.database.trim().is_empty() {
            metadata.database = DEFAULT_DB_FILENAME.to_string();
        }

        Ok(metadata)
    }

    /// Write `metadata.json` into the workspace directory.
    pub fn save(&self, heartdb_dir: &Path) -> Result<()> {
        let path = heartdb_dir.join(METADATA_FILENAME);
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Resolved paths for this workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub heartdb_dir: PathBuf,
    pub db_path: PathBuf,
    pub metadata: Metadata,
}

impl ConfigPaths {
    /// Resolve the database path using metadata and an optional CLI
    /// override.
    pub fn resolve(heartdb_dir: &Path, db_override: Option<&PathBuf>) -> Result<Self> {
        let metadata = Metadata::load(heartdb_dir)?;
        let db_path = resolve_db_path(heartdb_dir, &metadata, db_override);

        Ok(Self {
            heartdb_dir: heartdb_dir.to_path_buf(),
            db_path,
            metadata,
        })
    }
}

/// Discover the active `.heartdb` directory.
///
/// Honors `HEARTDB_DIR` when set, otherwise walks up from `start` (or
/// the current directory).
pub fn discover_heartdb_dir(start: Option<&Path>) -> Result<PathBuf> {
    discover_heartdb_dir_with_env(start, None)
}

fn discover_heartdb_dir_with_env(
    start: Option<&Path>,
    env_override: Option<&Path>,
) -> Result<PathBuf> {
    if let Some(path) = env_override {
        if path.is_dir() {
            return Ok(path.to_path_buf());
        }
    } else if let Ok(value) = env::var("HEARTDB_DIR") {
        if !value.trim().is_empty() {
            let path = PathBuf::from(value);
            if path.is_dir() {
                return Ok(path);
            }
        }
    }

    let mut current = match start {
        Some(path) => path.to_path_buf(),
        None => env::current_dir()?,
    };

    loop {
        let candidate = current.join(WORKSPACE_DIR_NAME);
        if candidate.is_dir() {
            return Ok(candidate);
        }

        if !current.pop() {
            break;
        }
    }

    Err(HeartDbError::NotInitialized)
}

/// Open the store using resolved config paths, returning the store and
/// the paths used.
pub fn open_store(
    heartdb_dir: &Path,
    db_override: Option<&PathBuf>,
) -> Result<(ReadingStore, ConfigPaths)> {
    let paths = ConfigPaths::resolve(heartdb_dir, db_override)?;
    let store = ReadingStore::open(&paths.db_path)?;
    Ok((store, paths))
}

/// Open the store for a CLI invocation: a `--db` override bypasses
/// workspace discovery entirely.
pub fn open_store_from(db_override: Option<&PathBuf>) -> Result<ReadingStore> {
    if let Some(path) = db_override {
        return ReadingStore::open(path);
    }
    let heartdb_dir = discover_heartdb_dir(None)?;
    let (store, _paths) = open_store(&heartdb_dir, None)?;
    Ok(store)
}

fn resolve_db_path(
    heartdb_dir: &Path,
    metadata: &Metadata,
    db_override: Option<&PathBuf>,
) -> PathBuf {
    if let Some(override_path) = db_override {
        return override_path.clone();
    }

    let candidate = PathBuf::from(&metadata.database);
    if candidate.is_absolute() {
        candidate
    } else {
        heartdb_dir.join(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn metadata_defaults_when_file_missing() {
        let dir = TempDir::new().unwrap();
        let metadata = Metadata::load(dir.path()).unwrap();
        assert_eq!(metadata.database, DEFAULT_DB_FILENAME);
    }

    #[test]
    fn metadata_blank_database_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(METADATA_FILENAME),
            r#"{"database": "  "}"#,
        )
        .unwrap();
        let metadata = Metadata::load(dir.path()).unwrap();
        assert_eq!(metadata.database, DEFAULT_DB_FILENAME);
    }

    #[test]
    fn metadata_round_trips_through_save() {
        let dir = TempDir::new().unwrap();
        let metadata = Metadata {
            database: "pulse.db".to_string(),
        };
        metadata.save(dir.path()).unwrap();
        assert_eq!(Metadata::load(dir.path()).unwrap(), metadata);
    }

    #[test]
    fn relative_db_path_resolves_against_workspace() {
        let dir = TempDir::new().unwrap();
        let paths = ConfigPaths::resolve(dir.path(), None).unwrap();
        assert_eq!(paths.db_path, dir.path().join(DEFAULT_DB_FILENAME));
    }

    #[test]
    fn absolute_db_path_is_kept() {
        let dir = TempDir::new().unwrap();
        let absolute = dir.path().join("elsewhere.db");
        fs::write(
            dir.path().join(METADATA_FILENAME),
            serde_json::json!({ "database": &absolute }).to_string(),
        )
        .unwrap();
        let paths = ConfigPaths::resolve(dir.path(), None).unwrap();
        assert_eq!(paths.db_path, absolute);
    }

    #[test]
    fn db_override_wins_over_metadata() {
        let dir = TempDir::new().unwrap();
        let override_path = dir.path().join("override.db");
        let paths = ConfigPaths::resolve(dir.path(), Some(&override_path)).unwrap();
        assert_eq!(paths.db_path, override_path);
    }

    #[test]
    fn discovery_walks_up_from_nested_directory() {
        let dir = TempDir::new().unwrap();
        let workspace = dir.path().join(WORKSPACE_DIR_NAME);
        fs::create_dir_all(&workspace).unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let found = discover_heartdb_dir_with_env(Some(nested.as_path()), None).unwrap();
        assert_eq!(found, workspace);
    }

    #[test]
    fn discovery_env_override_wins() {
        let dir = TempDir::new().unwrap();
        let workspace = dir.path().join(WORKSPACE_DIR_NAME);
        fs::create_dir_all(&workspace).unwrap();
        let elsewhere = TempDir::new().unwrap();

        let found =
            discover_heartdb_dir_with_env(Some(elsewhere.path()), Some(workspace.as_path()))
                .unwrap();
        assert_eq!(found, workspace);
    }

    #[test]
    fn discovery_fails_outside_workspace() {
        let dir = TempDir::new().unwrap();
        let result = discover_heartdb_dir_with_env(Some(dir.path()), None);
        assert!(matches!(result, Err(HeartDbError::NotInitialized)));
    }
}
