//! The template bundle shipped inside the binary.
//!
//! A [`TemplateBundle`] is an immutable list of `(path, bytes)` entries under
//! a single root prefix. The embedded bundle is generated by `build.rs` from
//! the `tpl/` directory; tests build their own bundles from static slices.

use crate::error::{KubloError, Result};
use std::path::PathBuf;

/// Root prefix of every embedded entry path.
pub const TEMPLATE_ROOT: &str = "tpl";

/// The bundled build script, run after the templates are staged.
pub const BUILD_SCRIPT: &str = include_str!("../build.sh");

/// A single bundled file (or directory, when the path ends with `/`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundleEntry<'a> {
    /// `/`-separated path including the bundle root, e.g. `tpl/k8s/service.yaml`.
    pub path: &'a str,
    pub contents: &'a [u8],
}

impl<'a> BundleEntry<'a> {
    pub const fn new(path: &'a str, contents: &'a [u8]) -> Self {
        Self { path, contents }
    }

    pub fn is_dir(&self) -> bool {
        self.path.ends_with('/')
    }
}

mod embedded {
    use super::BundleEntry;

    include!(concat!(env!("OUT_DIR"), "/template_bundle.rs"));
}

/// Read-only set of template files rooted at a fixed prefix.
#[derive(Debug, Clone, Copy)]
pub struct TemplateBundle<'a> {
    root: &'a str,
    entries: &'a [BundleEntry<'a>],
}

impl<'a> TemplateBundle<'a> {
    pub const fn new(root: &'a str, entries: &'a [BundleEntry<'a>]) -> Self {
        Self { root, entries }
    }

    /// The bundle compiled into this binary.
    pub fn embedded() -> TemplateBundle<'static> {
        TemplateBundle::new(TEMPLATE_ROOT, embedded::EMBEDDED_ENTRIES)
    }

    pub fn root(&self) -> &'a str {
        self.root
    }

    /// Non-directory entries, in bundle order.
    pub fn files(&self) -> impl Iterator<Item = &'a BundleEntry<'a>> + use<'a> {
        let entries: &'a [BundleEntry<'a>] = self.entries;
        entries.iter().filter(|entry| !entry.is_dir())
    }

    /// Map an entry to its path relative to the bundle root.
    ///
    /// The root prefix is stripped and the remaining `/`-separated segments
    /// are joined into a native path. Entries outside the root, and entries
    /// with empty, `.`, or `..` segments, are rejected so that nothing can be
    /// written outside the destination directory.
    pub fn relative_path(&self, entry: &BundleEntry<'_>) -> Result<PathBuf> {
        let rest = if self.root.is_empty() {
            Some(entry.path)
        } else {
            entry
                .path
                .strip_prefix(self.root)
                .and_then(|rest| rest.strip_prefix('/'))
        };

        let rest = rest.ok_or_else(|| {
            invalid_entry(
                entry.path,
                format!("not under template root '{}'", self.root),
            )
        })?;

        let mut relative = PathBuf::new();
        for segment in rest.split('/') {
            match segment {
                "" | "." | ".." => {
                    return Err(invalid_entry(
                        entry.path,
                        format!("contains an illegal path segment '{}'", segment),
                    ));
                }
                segment if segment.contains('\\') => {
                    return Err(invalid_entry(
                        entry.path,
                        "contains a backslash".to_string(),
                    ));
                }
                segment => relative.push(segment),
            }
        }

        Ok(relative)
    }
}

fn invalid_entry(path: &str, reason: String) -> KubloError {
    KubloError::InvalidEntry {
        path: path.to_string(),
        reason,
    }
}
