//! Error types for the kublo CLI.
//!
//! Every failure is propagated to `main`, which prints it and exits with
//! the code returned by [`KubloError::exit_code`].

use crate::exit_codes;
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Main error type for kublo operations.
#[derive(Error, Debug)]
pub enum KubloError {
    /// The configuration file could not be read, parsed, or validated.
    #[error("{0}")]
    Config(String),

    /// The staging directory could not be created.
    #[error("failed to create staging directory under '{}': {source}", .root.display())]
    Staging {
        root: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A template file could not be written into the staging directory.
    #[error("failed to write template '{}': {source}", .path.display())]
    Materialize {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A bundle entry has a path that cannot be mapped under the staging directory.
    #[error("invalid template entry '{path}': {reason}")]
    InvalidEntry { path: String, reason: String },

    /// The shell interpreter could not be started.
    #[error("failed to execute script with '{}': {source}", .shell.display())]
    Spawn {
        shell: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The build script ran but did not succeed.
    #[error("build script failed: {status}")]
    Script { status: ExitStatus },
}

impl KubloError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            KubloError::Config(_) => exit_codes::USER_ERROR,
            KubloError::Staging { .. } => exit_codes::STAGING_FAILURE,
            KubloError::Materialize { .. } => exit_codes::MATERIALIZE_FAILURE,
            KubloError::InvalidEntry { .. } => exit_codes::MATERIALIZE_FAILURE,
            KubloError::Spawn { .. } => exit_codes::LAUNCH_FAILURE,
            KubloError::Script { .. } => exit_codes::SCRIPT_FAILURE,
        }
    }
}

/// Result type alias for kublo operations.
pub type Result<T> = std::result::Result<T, KubloError>;
