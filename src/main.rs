use clap::Parser;
use heartdb::cli::{Cli, Command, commands};
use heartdb::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init_logging(cli.verbose, cli.quiet) {
        eprintln!("error: failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    let db = cli.db.as_ref();
    let result = match &cli.command {
        Command::Init(args) => commands::init::execute(args, db),
        Command::Insert(args) => commands::insert::execute(args, db),
        Command::Report(args) => commands::report::execute(args, cli.json, db),
        Command::Chart(args) => commands::chart::execute(args, cli.json, db),
        Command::Seed(args) => commands::seed::execute(args, db),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
