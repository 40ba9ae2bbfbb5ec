//! Session configuration
//!
//! Loaded from TOML. Every field has a default, so a missing file or a
//! partial file both work.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::errors::{CanvasError, Result};

const DEFAULT_PROMPT: &str = "enter command: ";

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Text shown before each command is read
    pub prompt: String,

    /// Blank lines printed after each rendered canvas
    pub blank_lines: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            blank_lines: 2,
        }
    }
}

impl Config {
    /// Configuration directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "ascii-canvas", "ascii-canvas")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Default config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CanvasError::Configuration(format!("Invalid TOML config: {e}")))
    }

    /// Read configuration from a file that must exist
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CanvasError::Configuration(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }
}

/// Load configuration.
///
/// An explicit path must exist. Without one, the per-user config file is
/// used when present, otherwise defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        tracing::debug!(path = %path.display(), "loading config");
        return Config::from_file(path);
    }

    match Config::config_path() {
        Some(path) if path.exists() => {
            tracing::debug!(path = %path.display(), "loading config");
            Config::from_file(&path)
        }
        _ => Ok(Config::default()),
    }
}
