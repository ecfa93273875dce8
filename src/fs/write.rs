//! File and directory creation with fixed permissions.
//!
//! Staged templates are written with owner read/write and group/other read
//! (`0o644`); directories created on the way are `0o755`. On non-unix
//! platforms the platform defaults apply. The process umask still applies
//! on top of these modes.

use std::fs::{DirBuilder, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Mode for directories created while writing files.
pub const DIR_MODE: u32 = 0o755;

/// Mode for written files.
pub const FILE_MODE: u32 = 0o644;

/// Recursively create `path` and any missing parents.
fn create_dir_all(path: &Path) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    builder.create(path)
}

/// Write `content` to `path`, creating parent directories on demand.
///
/// An existing file at `path` is truncated and overwritten. The write is
/// not atomic: a failure part-way leaves a partial file behind.
pub fn write_file(path: &Path, content: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent)?;
    }

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    let mut file = options.open(path)?;
    file.write_all(content)?;
    file.flush()
}
