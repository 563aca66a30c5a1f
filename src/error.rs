//! Error types for `heartdb`.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, HeartDbError>;

/// All errors surfaced by the library.
///
/// Storage failures are propagated directly from the engine; there is
/// no retry or fallback anywhere in this crate. Absence of rows is not
/// an error (queries return empty results).
#[derive(Debug, Error)]
pub enum HeartDbError {
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid timestamp '{value}': {source}")]
    Timestamp {
        value: String,
        source: chrono::ParseError,
    },

    #[error("not inside a heartdb workspace (run 'heartdb init' first)")]
    NotInitialized,

    #[error("database already contains {count} readings; pass --force to destroy them")]
    ResetRefused { count: u64 },
}
