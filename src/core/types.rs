//! core::types
//!
//! Strong types for the simulated repository.
//!
//! # Types
//!
//! - [`BranchName`] - Branch name checked against Git's ref-name rules
//! - [`FileName`] - Name of a simulated working-tree file
//!
//! # Validation
//!
//! Both types reject bad input at construction time, so the state model
//! never has to re-check a name it already holds.
//!
//! # Examples
//!
//! ```
//! use gitplay::core::types::{BranchName, FileName};
//!
//! let branch = BranchName::new("feature/login").unwrap();
//! let file = FileName::new("src/main.rs").unwrap();
//! assert_eq!(branch.as_str(), "feature/login");
//! assert_eq!(file.as_str(), "src/main.rs");
//!
//! assert!(BranchName::new("bad..name").is_err());
//! assert!(FileName::new("   ").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from name validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("invalid file name: {0}")]
    InvalidFileName(String),
}

/// A validated branch name.
///
/// Follows the parts of `git check-ref-format` a learner is likely to trip
/// over:
/// - Cannot be empty or exactly `@`
/// - Cannot start with `.` or `-`
/// - Cannot end with `.lock` or `/`
/// - Cannot contain `..`, `@{`, `//`, whitespace or ASCII control characters
/// - Cannot contain `~`, `^`, `:`, `\`, `?`, `*`, `[`
///
/// # Example
///
/// ```
/// use gitplay::core::types::BranchName;
///
/// assert!(BranchName::new("main").is_ok());
/// assert!(BranchName::new("user@feature").is_ok());
///
/// assert!(BranchName::new("").is_err());
/// assert!(BranchName::new("-f").is_err());
/// assert!(BranchName::new("topic.lock").is_err());
/// assert!(BranchName::new("has space").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BranchName(String);

impl BranchName {
    /// Create a new validated branch name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidBranchName` describing the first rule broken.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name).map_err(|why| TypeError::InvalidBranchName(why.to_string()))?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), &'static str> {
        if name.is_empty() {
            return Err("branch name cannot be empty");
        }
        if name == "@" {
            return Err("branch name cannot be '@'");
        }

        const FORBIDDEN_SEQUENCES: [(&str, &str); 3] = [
            ("..", "branch name cannot contain '..'"),
            ("@{", "branch name cannot contain '@{'"),
            ("//", "branch name cannot contain '//'"),
        ];
        for (needle, why) in FORBIDDEN_SEQUENCES {
            if name.contains(needle) {
                return Err(why);
            }
        }

        const FORBIDDEN_CHARS: [char; 7] = ['~', '^', ':', '\\', '?', '*', '['];
        if name.chars().any(|c| FORBIDDEN_CHARS.contains(&c)) {
            return Err("branch name cannot contain any of ~ ^ : \\ ? * [");
        }
        if name.chars().any(|c| c.is_whitespace() || c.is_ascii_control()) {
            return Err("branch name cannot contain whitespace or control characters");
        }

        if name.starts_with('-') {
            return Err("branch name cannot start with '-'");
        }
        if name.ends_with('/') {
            return Err("branch name cannot end with '/'");
        }

        // Per-component rules also cover the whole-name cases.
        for component in name.split('/') {
            if component.starts_with('.') {
                return Err("branch name components cannot start with '.'");
            }
            if component.ends_with(".lock") {
                return Err("branch name components cannot end with '.lock'");
            }
        }

        Ok(())
    }

    /// Get the branch name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BranchName {
    /// `main`, the branch `init` creates when nothing else is configured.
    fn default() -> Self {
        Self("main".to_string())
    }
}

impl TryFrom<String> for BranchName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<BranchName> for String {
    fn from(name: BranchName) -> Self {
        name.0
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated name of a simulated file.
///
/// Surrounding whitespace is trimmed. The result must be non-empty and free
/// of control characters; it is otherwise opaque, so `docs/intro.md` is a
/// plain name and not a directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FileName(String);

impl FileName {
    /// Create a new validated file name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidFileName` if the name is blank or holds
    /// control characters.
    pub fn new(name: impl AsRef<str>) -> Result<Self, TypeError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(TypeError::InvalidFileName(
                "file name cannot be empty".into(),
            ));
        }
        if name.chars().any(|c| c.is_control()) {
            return Err(TypeError::InvalidFileName(
                "file name cannot contain control characters".into(),
            ));
        }
        Ok(Self(name.to_string()))
    }

    /// Get the file name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for FileName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<FileName> for String {
    fn from(name: FileName) -> Self {
        name.0
    }
}

impl std::borrow::Borrow<str> for FileName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
