//! `keysafe`: inspect Key Safe wallet snapshots.

use std::process::ExitCode;

use clap::Parser;
use keysafe_cli::logging::init_logging;

mod cli;
mod commands;
mod tables;

use crate::cli::{Cli, Command};
use crate::commands::{run_accounts, run_summary, run_transactions};

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: cannot open log output: {error}");
        return ExitCode::FAILURE;
    }
    let outcome = match &cli.command {
        Command::Summary(args) => run_summary(args),
        Command::Accounts(args) => run_accounts(args),
        Command::Transactions(args) => run_transactions(args),
    };
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "command failed");
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}
