//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (applied by the caller)
//!
//! # Config Locations
//!
//! Only the first file found is read:
//! 1. An explicit path (`--config`)
//! 2. `$GITPLAY_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/gitplay/config.toml`
//! 4. `~/.gitplay/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use gitplay::core::config::Config;
//!
//! let config = Config::load(None).unwrap();
//! println!("default branch: {}", config.default_branch());
//! println!("remote: {}", config.remote_name());
//! ```

pub mod schema;

pub use schema::GlobalConfig;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::types::BranchName;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "GITPLAY_CONFIG";

/// Name of the simulated remote when none is configured.
pub const DEFAULT_REMOTE: &str = "origin";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration with defaults applied through accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub global: GlobalConfig,
    /// Path the config was read from, if any
    loaded_from: Option<PathBuf>,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise the standard locations are
    /// searched and a missing file means defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file cannot be read, parsed or validated.
    pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::find_config_file(),
        };

        let Some(path) = path else {
            tracing::debug!("no config file found, using defaults");
            return Ok(Config::default());
        };

        let global = Self::read_config(&path)?;
        global.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");

        Ok(Config {
            global,
            loaded_from: Some(path),
        })
    }

    /// Search the standard locations for an existing config file.
    fn find_config_file() -> Option<PathBuf> {
        let mut candidates = Vec::new();
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            candidates.push(PathBuf::from(path));
        }
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            candidates.push(PathBuf::from(xdg_home).join("gitplay/config.toml"));
        }
        if let Some(home) = dirs::home_dir() {
            candidates.push(home.join(".gitplay/config.toml"));
        }
        candidates.into_iter().find(|path| path.exists())
    }

    fn read_config(path: &Path) -> Result<GlobalConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Branch created by `init`.
    pub fn default_branch(&self) -> BranchName {
        self.global
            .default_branch
            .as_deref()
            .and_then(|name| BranchName::new(name).ok())
            .unwrap_or_default()
    }

    /// Name of the simulated remote.
    pub fn remote_name(&self) -> &str {
        self.global.remote_name.as_deref().unwrap_or(DEFAULT_REMOTE)
    }

    pub fn emoji(&self) -> bool {
        self.global.emoji.unwrap_or(true)
    }

    pub fn tutorial(&self) -> bool {
        self.global.tutorial.unwrap_or(true)
    }

    pub fn interactive(&self) -> bool {
        self.global.interactive.unwrap_or(true)
    }

    /// Path the configuration was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.loaded_from.as_deref()
    }
}
