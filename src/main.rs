//! Kublo: stage embedded templates and run the bundled build script.
//!
//! This is the main entry point for the `kublo` CLI. It parses arguments,
//! initializes logging, dispatches to the command handler, and maps errors
//! to exit codes.

mod bundle;
mod cli;
mod commands;
mod config;
mod error;
mod exit_codes;
mod fs;
mod launcher;
mod observability;
mod staging;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    observability::init_tracing(cli.verbose);

    match commands::dispatch(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
