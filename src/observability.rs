//! Tracing initialization.
//!
//! Diagnostics go to stderr so that stdout carries only user-facing output
//! (the staging path, listings, and the build script's own output).
//! `RUST_LOG` overrides the level chosen from `-v` flags.

use tracing_subscriber::{EnvFilter, prelude::*};

/// Default filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "kublo=warn",
        1 => "kublo=debug",
        _ => "kublo=trace",
    }
}

/// Initialize tracing. Call once at process startup.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init();
}
