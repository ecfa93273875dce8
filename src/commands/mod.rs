//! Command implementations for kublo.
//!
//! [`dispatch`] loads the configuration and routes to the selected mode:
//! listing the bundle, printing the config, or the default staged run.

mod list;
mod run;

use crate::bundle::{BUILD_SCRIPT, TemplateBundle};
use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use tracing::debug;

use run::RunMode;

/// Dispatch the parsed command line to its implementation.
pub fn dispatch(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            Config::load(path)?
        }
        None => Config::default(),
    };

    if cli.print_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    let bundle = TemplateBundle::embedded();

    if cli.list {
        return list::cmd_list(&bundle);
    }

    let mode = if cli.dry_run {
        RunMode::DryRun
    } else {
        RunMode::Execute
    };
    run::cmd_run(&config, &bundle, BUILD_SCRIPT, mode)
}
