//! `SQLite` storage layer for `heartdb`.
//!
//! # Submodules
//!
//! - [`schema`] - Database schema definition
//! - [`sqlite`] - The [`ReadingStore`] implementation

pub mod schema;
pub mod sqlite;

pub use sqlite::{CHART_WINDOW, ReadingStore};
