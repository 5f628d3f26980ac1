//! REPL configuration
//!
//! Manages settings for:
//! - Planet data file location
//! - History file location and size
//! - Suggestion count for "Did you mean" hints
//! - Whether the line editor is used on terminals
//!
//! ```toml
//! data_path = "data/planets.json"
//! history_file = "/home/me/.local/share/orrery/history.txt"
//! history_size = 500
//! suggestion_limit = 3
//! editor = true
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::backend::DEFAULT_SUGGESTION_LIMIT;

pub const DEFAULT_DATA_PATH: &str = "data/planets.json";

const DEFAULT_HISTORY_SIZE: usize = 500;

const APP_DIR: &str = "orrery";

/// Errors reading a configuration file.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// File could not be read.
    Read(PathBuf, String),
    /// File is not valid TOML for this configuration.
    Parse(PathBuf, String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Read(path, err) => {
                write!(f, "Failed to read config '{}': {}", path.display(), err)
            }
            ConfigError::Parse(path, err) => {
                write!(f, "Failed to parse config '{}': {}", path.display(), err)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// REPL configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplConfig {
    /// Planet data file.
    pub data_path: PathBuf,
    /// Line history file. Defaults to the user data directory.
    pub history_file: Option<PathBuf>,
    pub history_size: usize,
    /// Maximum names in "Did you mean" hints.
    pub suggestion_limit: usize,
    /// Use the line editor when stdin is a terminal.
    pub editor: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            history_file: None,
            history_size: DEFAULT_HISTORY_SIZE,
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            editor: true,
        }
    }
}

impl ReplConfig {
    /// Load configuration from the default location.
    ///
    /// A missing file gives the defaults. An unreadable or invalid file is
    /// logged and also gives the defaults.
    pub fn load() -> Self {
        let Some(path) = Self::default_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        match Self::from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "ignoring config file");
                Self::default()
            }
        }
    }

    /// Load configuration from an explicit file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.to_path_buf(), e.to_string()))?;
        Self::parse_toml(&content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e.to_string()))
    }

    /// Parse configuration from TOML content.
    pub fn parse_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// `<config dir>/orrery/config.toml`, if the platform has a config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// Configured history file, else `<data dir>/orrery/history.txt`.
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_DIR).join("history.txt")))
    }
}
