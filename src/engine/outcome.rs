//! engine::outcome
//!
//! Typed results of repository operations.
//!
//! Every operation returns `Result<Report, Rejection>`. A [`Rejection`] is an
//! expected, user-facing refusal (an uninitialized repository, an unknown
//! branch, an empty commit message). It is never a bug and never leaves the
//! state half-changed.

use serde::Serialize;
use thiserror::Error;

use crate::core::branch::CommitRecord;
use crate::core::file::FileStatus;
use crate::core::types::{BranchName, FileName, TypeError};

/// Reasons an operation was refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("repository not initialized, run 'init' first")]
    NotInitialized,

    #[error("file '{0}' not found")]
    FileNotFound(String),

    #[error("file '{0}' already exists")]
    FileExists(FileName),

    #[error(transparent)]
    InvalidName(#[from] TypeError),

    #[error("nothing to commit")]
    NothingToCommit,

    #[error("commit message cannot be empty")]
    EmptyMessage,

    #[error("branch '{0}' does not exist")]
    UnknownBranch(String),

    #[error("cannot merge branch '{0}' into itself")]
    SelfMerge(BranchName),

    #[error("no remote set, run 'remote add' first")]
    NoRemote,
}

/// Result of `init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitReport {
    Initialized { branch: BranchName },
    AlreadyInitialized,
}

/// Result of a successful commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReport {
    pub record: CommitRecord,
    pub files: Vec<FileName>,
}

/// One line of `status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusEntry<'a> {
    pub name: &'a FileName,
    pub status: FileStatus,
}

/// One line of `branch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchListing<'a> {
    pub name: &'a BranchName,
    pub current: bool,
}

/// Result of `checkout`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutReport {
    /// Target is already the current branch; nothing changed.
    AlreadyOn(BranchName),
    Switched {
        branch: BranchName,
        created: bool,
        /// Files loaded from the target branch's snapshot.
        restored: usize,
        /// Files whose uncommitted state was dropped by the switch.
        discarded: Vec<FileName>,
    },
}

/// Result of `merge`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    pub source: BranchName,
    pub target: BranchName,
    /// Files overlaid from the source snapshot.
    pub files: Vec<FileName>,
    /// Overlaid files whose uncommitted state was replaced.
    pub discarded: Vec<FileName>,
}

/// Result of `remote add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteAddReport {
    Added(String),
    AlreadyConnected(String),
}

/// Result of `push` or `pull`. No data moves anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteReport {
    pub remote: String,
    pub branch: BranchName,
    pub commits: usize,
}
