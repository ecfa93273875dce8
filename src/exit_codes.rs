//! Exit code constants for the kublo CLI.
//!
//! - 0: Success
//! - 1: User error (bad config file)
//! - 2: Staging directory could not be created
//! - 3: Template materialization failure
//! - 4: Build script could not be spawned
//! - 5: Build script exited unsuccessfully

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: unreadable or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// The staging directory could not be created.
pub const STAGING_FAILURE: i32 = 2;

/// A template could not be written into the staging directory.
pub const MATERIALIZE_FAILURE: i32 = 3;

/// The shell interpreter could not be started.
pub const LAUNCH_FAILURE: i32 = 4;

/// The build script ran but exited non-zero or was killed by a signal.
pub const SCRIPT_FAILURE: i32 = 5;
