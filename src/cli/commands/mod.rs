//! Command implementations, one module per subcommand.

pub mod chart;
pub mod init;
pub mod insert;
pub mod report;
pub mod seed;
