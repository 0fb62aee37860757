//! core::file
//!
//! Simulated working-tree files and their status flags.
//!
//! # Flag Transitions
//!
//! ```text
//! untracked --edit--> modified --add--> staged --commit--> committed
//!                         ^                                    |
//!                         +----------------edit----------------+
//! ```
//!
//! `reset` drops a file back to its last committed content and clears
//! `modified` and `staged`.

use serde::{Deserialize, Serialize};

use super::types::FileName;

/// Status classification of a single file.
///
/// When more than one could apply, the first matching variant in
/// declaration order wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// Marked for inclusion in the next commit.
    Staged,
    /// Edited since the last commit but not staged.
    Modified,
    /// Never committed.
    Untracked,
    /// Matches the last commit.
    Clean,
}

impl FileStatus {
    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            FileStatus::Staged => "Staged",
            FileStatus::Modified => "Modified",
            FileStatus::Untracked => "Untracked",
            FileStatus::Clean => "Clean",
        }
    }
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A file in the simulated working tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedFile {
    pub name: FileName,
    pub modified: bool,
    pub staged: bool,
    pub committed: bool,
    pub content: String,
    pub last_committed_content: String,
}

impl TrackedFile {
    /// A freshly created, empty and untracked file.
    pub fn new(name: FileName) -> Self {
        Self {
            name,
            modified: false,
            staged: false,
            committed: false,
            content: String::new(),
            last_committed_content: String::new(),
        }
    }

    /// A file rebuilt from a branch snapshot, already committed.
    pub fn from_snapshot(name: FileName, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            name,
            modified: false,
            staged: false,
            committed: true,
            last_committed_content: content.clone(),
            content,
        }
    }

    /// Replace the content and mark the file modified.
    pub fn edit(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.modified = true;
    }

    /// Stage the file if it is modified. Returns whether it was staged.
    pub fn stage(&mut self) -> bool {
        if self.modified {
            self.staged = true;
        }
        self.modified
    }

    /// Record a commit of the current content.
    pub fn mark_committed(&mut self) {
        self.modified = false;
        self.staged = false;
        self.committed = true;
        self.last_committed_content = self.content.clone();
    }

    /// Restore the last committed content.
    pub fn reset(&mut self) {
        self.content = self.last_committed_content.clone();
        self.modified = false;
        self.staged = false;
    }

    pub fn status(&self) -> FileStatus {
        if self.staged {
            FileStatus::Staged
        } else if self.modified {
            FileStatus::Modified
        } else if !self.committed {
            FileStatus::Untracked
        } else {
            FileStatus::Clean
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> TrackedFile {
        TrackedFile::new(FileName::new(name).unwrap())
    }

    #[test]
    fn new_file_is_untracked() {
        assert_eq!(file("a.txt").status(), FileStatus::Untracked);
    }

    #[test]
    fn stage_ignores_unmodified_files() {
        let mut f = file("a.txt");
        assert!(!f.stage());
        assert!(!f.staged);
    }

    #[test]
    fn staged_wins_over_modified() {
        let mut f = file("a.txt");
        f.edit("hello");
        assert_eq!(f.status(), FileStatus::Modified);
        assert!(f.stage());
        assert!(f.modified && f.staged);
        assert_eq!(f.status(), FileStatus::Staged);
    }

    #[test]
    fn commit_clears_flags_and_records_content() {
        let mut f = file("a.txt");
        f.edit("v1");
        f.stage();
        f.mark_committed();
        assert!(f.committed && !f.modified && !f.staged);
        assert_eq!(f.last_committed_content, "v1");
        assert_eq!(f.status(), FileStatus::Clean);
    }

    #[test]
    fn edit_after_commit_is_modified_again() {
        let mut f = TrackedFile::from_snapshot(FileName::new("a.txt").unwrap(), "v1");
        f.edit("v2");
        assert_eq!(f.status(), FileStatus::Modified);
    }

    #[test]
    fn reset_restores_last_commit() {
        let mut f = TrackedFile::from_snapshot(FileName::new("a.txt").unwrap(), "v1");
        f.edit("v2");
        f.stage();
        f.reset();
        assert_eq!(f.content, "v1");
        assert_eq!(f.status(), FileStatus::Clean);
    }

    #[test]
    fn reset_of_never_committed_file_empties_it() {
        let mut f = file("draft.txt");
        f.edit("scratch");
        f.reset();
        assert_eq!(f.content, "");
        assert_eq!(f.status(), FileStatus::Untracked);
    }
}
