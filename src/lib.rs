//! `heartdb` - heart-rate readings store
//!
//! Persists heart-rate measurements (timestamp, patient name, value) in
//! a `SQLite` database and answers two query shapes: a per-patient
//! summary report and a bounded, chronologically-ordered time series
//! for one patient.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`model`] - Data types (Reading, ReportEntry, ChartSeries)
//! - [`storage`] - `SQLite` database layer
//! - [`config`] - Workspace discovery and configuration
//! - [`error`] - Error types and handling
//! - [`format`] - Output rendering (text, JSON)

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod storage;

pub use error::{HeartDbError, Result};
