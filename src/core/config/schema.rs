//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Values are validated after parsing: the default branch must be a valid
//! branch name and the remote name must be non-empty.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::BranchName;

/// User configuration.
///
/// # Example
///
/// ```toml
/// default_branch = "trunk"
/// remote_name = "upstream"
/// emoji = false
/// tutorial = true
/// interactive = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Branch created by `init`
    pub default_branch: Option<String>,

    /// Name shown for the simulated remote
    pub remote_name: Option<String>,

    /// Decorate output lines with emoji
    pub emoji: Option<bool>,

    /// Show the guided tutorial
    pub tutorial: Option<bool>,

    /// Prompt for missing arguments
    pub interactive: Option<bool>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(branch) = &self.default_branch {
            BranchName::new(branch).map_err(|e| {
                ConfigError::InvalidValue(format!("invalid default_branch: {}", e))
            })?;
        }

        if let Some(remote) = &self.remote_name {
            if remote.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "remote_name cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
