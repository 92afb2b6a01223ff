//! Configuration file loading for the `mate` tool.
//!
//! Settings come from `mate.toml` in the current directory unless another
//! path is given. Command-line flags override whatever the file says.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// How results are printed.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Solver settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct MateConfig {
    /// Largest mate (in moves of the solving side) to look for. Defaults to 3.
    #[serde(default = "default_max_moves")]
    pub max_moves: u32,
    /// Time allowed for each budget, in seconds. Defaults to 60.
    #[serde(default = "default_max_seconds")]
    pub max_seconds: u64,
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_max_moves() -> u32 {
    3
}

fn default_max_seconds() -> u64 {
    60
}

impl Default for MateConfig {
    fn default() -> Self {
        MateConfig {
            max_moves: default_max_moves(),
            max_seconds: default_max_seconds(),
            output: OutputFormat::default(),
        }
    }
}

impl MateConfig {
    /// Loads the configuration at `path`, or the default location when `None`.
    ///
    /// A missing file is not an error and yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default configuration path, `mate.toml` in the working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("mate.toml")
    }

    pub fn max_time(&self) -> Duration {
        Duration::from_secs(self.max_seconds)
    }
}
