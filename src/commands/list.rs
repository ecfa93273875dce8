//! Implementation of `kublo --list`.

use crate::bundle::TemplateBundle;
use crate::error::Result;
use std::path::PathBuf;
use tracing::debug;

/// Print each bundled file path relative to the bundle root, one per line.
pub fn cmd_list(bundle: &TemplateBundle<'_>) -> Result<()> {
    debug!(root = bundle.root(), "listing template bundle");
    for path in relative_paths(bundle)? {
        println!("{}", path.display());
    }
    Ok(())
}

fn relative_paths(bundle: &TemplateBundle<'_>) -> Result<Vec<PathBuf>> {
    bundle
        .files()
        .map(|entry| bundle.relative_path(entry))
        .collect()
}
