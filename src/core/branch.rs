//! core::branch
//!
//! Branches and their commit records.
//!
//! A branch owns an append-only list of [`CommitRecord`]s and a snapshot of
//! the last committed content of every file committed on it. The snapshot is
//! what repopulates the working tree on checkout.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::types::{BranchName, FileName};

/// A single commit. Holds no content diff and no timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Branch the commit was made on.
    pub branch: BranchName,
    pub message: String,
}

impl std::fmt::Display for CommitRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.branch, self.message)
    }
}

/// A simulated branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub name: BranchName,
    commits: Vec<CommitRecord>,
    snapshot: BTreeMap<FileName, String>,
}

impl Branch {
    /// An empty branch: no commits, empty snapshot.
    pub fn new(name: BranchName) -> Self {
        Self {
            name,
            commits: Vec::new(),
            snapshot: BTreeMap::new(),
        }
    }

    /// Commits in chronological order.
    pub fn commits(&self) -> &[CommitRecord] {
        &self.commits
    }

    /// Last committed content per file.
    pub fn snapshot(&self) -> &BTreeMap<FileName, String> {
        &self.snapshot
    }

    /// Append a commit and return it.
    pub fn record_commit(&mut self, message: impl Into<String>) -> &CommitRecord {
        self.commits.push(CommitRecord {
            branch: self.name.clone(),
            message: message.into(),
        });
        &self.commits[self.commits.len() - 1]
    }

    /// Record committed content for a file.
    pub fn store(&mut self, name: FileName, content: impl Into<String>) {
        self.snapshot.insert(name, content.into());
    }
}
