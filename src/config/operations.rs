//! Config loading, validation, and placeholder helpers.

use super::model::Config;
use crate::error::{KubloError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(KubloError::Config)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            KubloError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| KubloError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| KubloError::Config(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `shell` and `default_template_path` must be non-empty
    /// - `staging_prefix` must be non-empty and must not contain a path separator
    /// - `path_variable` must be a valid shell identifier
    pub fn validate(&self) -> Result<()> {
        if self.shell.as_os_str().is_empty() {
            return Err(invalid("shell must not be empty"));
        }

        if self.staging_prefix.is_empty() {
            return Err(invalid("staging_prefix must not be empty"));
        }
        if self.staging_prefix.contains(['/', '\\']) {
            return Err(KubloError::Config(format!(
                "config validation failed: staging_prefix must not contain a path separator (found '{}')",
                self.staging_prefix
            )));
        }

        if !is_shell_identifier(&self.path_variable) {
            return Err(KubloError::Config(format!(
                "config validation failed: path_variable '{}' is not a valid shell variable name",
                self.path_variable
            )));
        }

        if self.default_template_path.is_empty() {
            return Err(invalid("default_template_path must not be empty"));
        }

        Ok(())
    }

    /// The literal assignment in the build script that gets replaced,
    /// e.g. `TPL_DIR_PATH="./tpl"`.
    pub fn placeholder(&self) -> String {
        format!("{}=\"{}\"", self.path_variable, self.default_template_path)
    }

    /// The assignment substituted for [`Config::placeholder`].
    ///
    /// The path is inserted verbatim, without shell escaping.
    pub fn replacement(&self, staging_path: &Path) -> String {
        format!("{}=\"{}\"", self.path_variable, staging_path.display())
    }
}

fn invalid(msg: &str) -> KubloError {
    KubloError::Config(format!("config validation failed: {}", msg))
}

fn is_shell_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
