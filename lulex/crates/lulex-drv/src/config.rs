//! Configuration module for the lulex driver.
//!
//! This module handles loading `lulex.toml`. Every field has a
//! default, so a partial file (or none at all) is valid.

use dirs::{config_dir, home_dir};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{LulexError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "lulex.toml";

/// How token listings and statistics are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// JSON documents
    Json,
}

/// Application configuration structure.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Output settings for `tokens` and `stats`.
    #[serde(default)]
    pub output: OutputConfig,

    /// Settings for `check`.
    #[serde(default)]
    pub check: CheckConfig,
}

/// Output-specific configuration options.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Default output format.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Check-specific configuration options.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CheckConfig {
    /// Fail with a non-zero exit code when lexical errors are found.
    #[serde(default)]
    pub deny_unknown: bool,
}

impl Config {
    /// Load configuration, preferring an explicit path.
    ///
    /// An explicit path must exist. Without one, the standard locations are
    /// searched and the defaults are used when nothing is found.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_path(path),
            None => Self::load(),
        }
    }

    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/lulex/`
    /// 3. System configuration directory
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LulexError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            LulexError::Config(format!(
                "Failed to parse {}: {}",
                path.display(),
                e.message()
            ))
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("lulex").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("lulex").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
