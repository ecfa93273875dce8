//! Filesystem utilities for kublo.

mod write;

pub use write::write_file;
