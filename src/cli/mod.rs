//! Command-line interface for `heartdb`.

pub mod commands;

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "heartdb",
    version,
    about = "Heart-rate readings store with per-patient report and chart queries"
)]
pub struct Cli {
    /// Path to the SQLite database, bypassing workspace discovery.
    #[arg(long, global = true, env = "HEARTDB_DB")]
    pub db: Option<PathBuf>,

    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the workspace and (re)create the readings schema.
    Init(InitArgs),
    /// Record one heart-rate reading.
    Insert(InsertArgs),
    /// Per-patient summary of stored readings.
    Report(ReportArgs),
    /// Chronological series of recent readings for one patient.
    Chart(ChartArgs),
    /// Insert pseudo-random demo readings.
    Seed(SeedArgs),
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Recreate the schema even if readings exist (destroys them all).
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct InsertArgs {
    /// Patient name (free-form, matched exactly by other commands).
    #[arg(long)]
    pub name: String,

    /// Heart-rate value in beats per minute.
    #[arg(long)]
    pub value: i64,

    /// Timestamp as 'YYYY-MM-DD HH:MM:SS[.ffffff]'; defaults to now.
    #[arg(long)]
    pub time: Option<String>,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Maximum number of patients to list; 0 means unbounded.
    #[arg(long, default_value_t = 0)]
    pub limit: u32,

    /// Patients to skip; only applies when --limit is greater than 0.
    #[arg(long, default_value_t = 0)]
    pub offset: u32,
}

#[derive(Debug, Args)]
pub struct ChartArgs {
    /// Patient name, matched exactly.
    pub name: String,
}

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Number of readings to insert.
    #[arg(long, default_value_t = 100)]
    pub count: u32,

    /// Patient name to seed (repeatable); defaults to a demo roster.
    #[arg(long = "name", value_name = "NAME")]
    pub names: Vec<String>,
}
