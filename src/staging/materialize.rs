//! Writes a template bundle into a directory.

use crate::bundle::TemplateBundle;
use crate::error::{KubloError, Result};
use crate::fs::write_file;
use std::path::Path;
use tracing::{debug, trace};

/// Summary of a [`materialize`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    /// Number of files written.
    pub files: usize,
    /// Total bytes written.
    pub bytes: u64,
}

/// Mirror every file of `bundle` under `dest`.
///
/// Entries are visited in bundle order. Each entry's path has the bundle
/// root stripped and is joined under `dest`; missing parent directories are
/// created. Directory entries are skipped.
///
/// Stops at the first invalid entry or write error. Files written before
/// the failure are left in place.
pub fn materialize(bundle: &TemplateBundle<'_>, dest: &Path) -> Result<MaterializeReport> {
    let mut report = MaterializeReport::default();

    for entry in bundle.files() {
        let target = dest.join(bundle.relative_path(entry)?);

        write_file(&target, entry.contents).map_err(|source| KubloError::Materialize {
            path: target.clone(),
            source,
        })?;
        trace!(path = %target.display(), bytes = entry.contents.len(), "wrote template");

        report.files += 1;
        report.bytes += entry.contents.len() as u64;
    }

    debug!(
        files = report.files,
        bytes = report.bytes,
        dest = %dest.display(),
        "materialized template bundle"
    );
    Ok(report)
}
