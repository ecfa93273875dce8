//! Implementation of the default command: stage the templates, then run
//! the build script against them.
//!
//! # What a run does
//!
//! 1. Creates the staging directory (`<staging_root>/<staging_prefix>XXXXXX`)
//! 2. Prints its path to stdout
//! 3. Writes every bundled template into it
//! 4. Substitutes the staging path into the build script
//! 5. Runs the script with inherited stdio (or prints it, for `--dry-run`)
//! 6. Removes the staging directory, whatever the outcome

use crate::bundle::TemplateBundle;
use crate::config::Config;
use crate::error::Result;
use crate::launcher::{render_script, run_script};
use crate::staging::{create_staging, create_staging_in, materialize};
use tracing::{debug, warn};

/// What to do with the rendered build script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Run it through the configured shell.
    Execute,
    /// Print it to stdout.
    DryRun,
}

/// Execute a staged run.
///
/// Failing to create the staging directory aborts before anything else
/// happens. The staging directory is owned by this function, so it has been
/// removed by the time the result reaches the caller.
pub fn cmd_run(
    config: &Config,
    bundle: &TemplateBundle<'_>,
    script_template: &str,
    mode: RunMode,
) -> Result<()> {
    let staging = match &config.staging_root {
        Some(root) => create_staging_in(root, &config.staging_prefix)?,
        None => create_staging(&config.staging_prefix)?,
    };

    println!("{}", staging.path().display());

    materialize(bundle, staging.path())?;

    let placeholder = config.placeholder();
    let script = render_script(
        script_template,
        &placeholder,
        &config.replacement(staging.path()),
    );
    if script.replacements() == 0 {
        warn!(%placeholder, "build script does not contain the placeholder");
    }

    match mode {
        RunMode::Execute => {
            let outcome = run_script(&config.shell, &script)?;
            debug!(duration = ?outcome.duration, "build script succeeded");
        }
        RunMode::DryRun => println!("{}", script.as_str()),
    }

    if let Err(e) = staging.close() {
        debug!(error = %e, "failed to remove staging directory");
    }

    Ok(())
}
