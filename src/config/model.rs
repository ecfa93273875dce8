//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime settings for staging and launching the build script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Interpreter used to run the build script as `<shell> -c <script>`.
    #[serde(default = "default_shell")]
    pub shell: PathBuf,

    /// Name prefix of the staging directory (default: "kublo-").
    #[serde(default = "default_staging_prefix")]
    pub staging_prefix: String,

    /// Directory the staging directory is created in.
    /// When unset, the system temporary directory is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staging_root: Option<PathBuf>,

    /// Shell variable the build script assigns the template path to.
    #[serde(default = "default_path_variable")]
    pub path_variable: String,

    /// Value the build script assigns to `path_variable` when run standalone.
    #[serde(default = "default_template_path")]
    pub default_template_path: String,
}

fn default_shell() -> PathBuf {
    PathBuf::from("/bin/sh")
}

fn default_staging_prefix() -> String {
    "kublo-".to_string()
}

fn default_path_variable() -> String {
    "TPL_DIR_PATH".to_string()
}

fn default_template_path() -> String {
    "./tpl".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shell: default_shell(),
            staging_prefix: default_staging_prefix(),
            staging_root: None,
            path_variable: default_path_variable(),
            default_template_path: default_template_path(),
        }
    }
}
