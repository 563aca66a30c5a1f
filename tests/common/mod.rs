#![allow(dead_code)]

use chrono::NaiveDateTime;
use heartdb::storage::ReadingStore;
use std::sync::Once;
use tempfile::TempDir;

static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        heartdb::logging::init_test_logging();
    });
}

pub fn test_db() -> ReadingStore {
    init_test_logging();
    ReadingStore::open_memory().expect("Failed to create test database")
}

pub fn test_db_with_dir() -> (ReadingStore, TempDir) {
    init_test_logging();
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join(".heartdb").join("heart.db");
    std::fs::create_dir_all(db_path.parent().unwrap()).unwrap();
    let store = ReadingStore::open(&db_path).expect("Failed to create test database");
    (store, dir)
}

/// Parse a test timestamp, with or without fractional seconds.
pub fn ts(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .expect("valid test timestamp")
}
