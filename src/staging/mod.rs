//! Staging of the template bundle.
//!
//! A [`StagingDirectory`] is a uniquely named temporary directory owned by
//! the running process. It is removed recursively when the value is dropped,
//! on every exit path of its owner, and removal errors are ignored.
//! [`materialize`] mirrors a [`TemplateBundle`](crate::bundle::TemplateBundle)
//! into it.

mod materialize;

#[cfg(test)]
mod tests;

pub use materialize::{MaterializeReport, materialize};

use crate::error::{KubloError, Result};
use std::io;
use std::path::Path;
use tempfile::TempDir;
use tracing::debug;

/// Per-run temporary directory holding the materialized templates.
#[derive(Debug)]
pub struct StagingDirectory {
    dir: TempDir,
}

impl StagingDirectory {
    /// Absolute path of the staging directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Remove the directory now and report whether that worked.
    ///
    /// Dropping the value removes it too, but silently.
    pub fn close(self) -> io::Result<()> {
        self.dir.close()
    }
}

/// Create a staging directory under the system temporary directory.
pub fn create_staging(prefix: &str) -> Result<StagingDirectory> {
    create_staging_in(&std::env::temp_dir(), prefix)
}

/// Create a staging directory named `<prefix><random suffix>` inside `root`.
///
/// `root` must already exist. A relative `root` is resolved against the
/// current directory so the returned path is always absolute.
pub fn create_staging_in(root: &Path, prefix: &str) -> Result<StagingDirectory> {
    let staging_error = |source: io::Error| KubloError::Staging {
        root: root.to_path_buf(),
        source,
    };

    let root = std::path::absolute(root).map_err(staging_error)?;
    let dir = tempfile::Builder::new()
        .prefix(prefix)
        .tempdir_in(&root)
        .map_err(staging_error)?;

    debug!(path = %dir.path().display(), "created staging directory");
    Ok(StagingDirectory { dir })
}
