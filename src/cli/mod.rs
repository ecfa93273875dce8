//! CLI argument parsing for kublo.
//!
//! Uses clap derive macros for declarative argument definitions. Running
//! with no arguments stages the bundled templates and runs the build script.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Kublo: extract the bundled templates to a temporary directory and run
/// the bundled build script against them.
///
/// The temporary directory is printed before the script starts and is
/// removed when kublo exits.
#[derive(Parser, Debug)]
#[command(name = "kublo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Load settings from a YAML config file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// List the bundled template files and exit.
    #[arg(long, conflicts_with_all = ["dry_run", "print_config"])]
    pub list: bool,

    /// Stage the templates and print the rendered build script instead of running it.
    #[arg(long, conflicts_with = "print_config")]
    pub dry_run: bool,

    /// Print the effective configuration as YAML and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
