//! Build script executor.
//!
//! Runs `<shell> -c <script>` with stdin, stdout, and stderr inherited from
//! this process, so interactive scripts keep full access to the terminal.
//! No timeout is applied and no signal handling is installed; the call blocks
//! until the child exits.

use super::script::RenderedScript;
use crate::error::{KubloError, Result};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};
use tracing::debug;

/// Result of running the build script.
#[derive(Debug, Clone, Copy)]
pub struct ScriptOutcome {
    /// Exit status of the shell process.
    pub status: ExitStatus,
    /// Wall-clock time from spawn to exit.
    pub duration: Duration,
}

impl ScriptOutcome {
    pub fn is_success(&self) -> bool {
        self.status.success()
    }

    /// Convert an unsuccessful outcome into [`KubloError::Script`].
    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(KubloError::Script {
                status: self.status,
            })
        }
    }
}

/// Run `script` through `shell` and wait for it.
///
/// # Returns
///
/// * `Ok(ScriptOutcome)` - The script exited with status 0
/// * `Err(KubloError::Spawn)` - The shell could not be started
/// * `Err(KubloError::Script)` - The script exited non-zero or was killed by a signal
pub fn run_script(shell: &Path, script: &RenderedScript) -> Result<ScriptOutcome> {
    execute(shell, script)?.into_result()
}

fn execute(shell: &Path, script: &RenderedScript) -> Result<ScriptOutcome> {
    let mut command = Command::new(shell);
    command
        .arg("-c")
        .arg(script.as_str())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    debug!(shell = %shell.display(), "running build script");
    let start_time = Instant::now();
    let status = command.status().map_err(|source| KubloError::Spawn {
        shell: shell.to_path_buf(),
        source,
    })?;
    let duration = start_time.elapsed();

    debug!(%status, ?duration, "build script finished");
    Ok(ScriptOutcome { status, duration })
}
