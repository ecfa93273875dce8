//! Launching the bundled build script.
//!
//! - Placeholder substitution of the staging path into the script text
//! - Execution through a shell interpreter with inherited stdio

mod executor;
mod script;

pub use executor::{ScriptOutcome, run_script};
pub use script::{RenderedScript, render_script};
