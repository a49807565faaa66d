//! Configuration module for rebrand
//!
//! Manages the optional user configuration file, which customizes the lists
//! expanded by the `auto` exclusion specifications and the default quiet
//! flag. Stored in the user's config directory
//! (`~/.config/rebrand/config.toml` on Linux). A missing file simply means
//! defaults; command-line flags always win.

use crate::patterns;
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RebrandConfig {
    /// Pattern specifications expanded by `--exclude auto`
    #[serde(default = "default_auto_excludes")]
    pub auto_excludes: Vec<String>,

    /// Pattern specifications expanded by `--exclude-filtering auto`
    #[serde(default = "default_auto_filtering")]
    pub auto_filtering: Vec<String>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for RebrandConfig {
    fn default() -> Self {
        Self {
            auto_excludes: default_auto_excludes(),
            auto_filtering: default_auto_filtering(),
            quiet: false,
        }
    }
}

fn default_auto_excludes() -> Vec<String> {
    patterns::AUTO_EXCLUDES.iter().map(ToString::to_string).collect()
}

fn default_auto_filtering() -> Vec<String> {
    patterns::AUTO_FILTERING.iter().map(ToString::to_string).collect()
}

impl RebrandConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("rebrand").join("config.toml"))
    }

    /// Load configuration from the default location, falling back to
    /// defaults when no file exists
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an existing config file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit file path
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Render the effective configuration as TOML, suitable as a template
    /// for the config file (`--print-config`)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration cannot be serialized.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }
}
