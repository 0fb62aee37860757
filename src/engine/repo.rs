//! engine::repo
//!
//! The simulated repository: files, branches, and the remote flag.
//!
//! # Design
//!
//! [`RepositoryState`] is an explicit value owned by whoever drives it (the
//! shell session, a test). Each Git-like command is one method. Methods
//! return typed reports or a [`Rejection`] and never print; rendering is the
//! caller's job.
//!
//! # Simplifications
//!
//! - Commits record a message only, not a diff.
//! - `checkout` replaces the working files with the target branch's
//!   snapshot and drops uncommitted edits.
//! - `merge` overlays the source branch's snapshot onto the current branch.
//!   There is no conflict detection and commit logs are not combined.
//! - `push` and `pull` only check that a remote was added.
//!
//! # Example
//!
//! ```
//! use gitplay::engine::RepositoryState;
//!
//! let mut repo = RepositoryState::default();
//! repo.init();
//! repo.create_file("README.md").unwrap();
//! repo.edit_file("README.md", "hi").unwrap();
//! assert_eq!(repo.stage().unwrap(), 1);
//! repo.commit("first").unwrap();
//!
//! let log: Vec<_> = repo.log().unwrap().map(|c| c.message.as_str()).collect();
//! assert_eq!(log, ["first"]);
//! ```

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use super::outcome::{
    BranchListing, CheckoutReport, CommitReport, InitReport, MergeReport, Rejection,
    RemoteAddReport, RemoteReport, StatusEntry,
};
use crate::core::branch::{Branch, CommitRecord};
use crate::core::config::DEFAULT_REMOTE;
use crate::core::file::{FileStatus, TrackedFile};
use crate::core::types::{BranchName, FileName};

/// In-memory state of one simulated repository.
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryState {
    initialized: bool,
    current_branch: BranchName,
    remote_connected: bool,
    remote_name: String,
    files: BTreeMap<FileName, TrackedFile>,
    branches: BTreeMap<BranchName, Branch>,
}

impl Default for RepositoryState {
    fn default() -> Self {
        Self::new(BranchName::default(), DEFAULT_REMOTE)
    }
}

impl RepositoryState {
    /// Create an uninitialized repository.
    ///
    /// `default_branch` becomes the first branch on `init`.
    pub fn new(default_branch: BranchName, remote_name: impl Into<String>) -> Self {
        Self {
            initialized: false,
            current_branch: default_branch,
            remote_connected: false,
            remote_name: remote_name.into(),
            files: BTreeMap::new(),
            branches: BTreeMap::new(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn current_branch(&self) -> &BranchName {
        &self.current_branch
    }

    pub fn remote_connected(&self) -> bool {
        self.remote_connected
    }

    /// Look up a working file.
    pub fn file(&self, name: &str) -> Option<&TrackedFile> {
        self.files.get(name.trim())
    }

    /// Look up a branch.
    pub fn branch(&self, name: &str) -> Option<&Branch> {
        let name = BranchName::new(name.trim()).ok()?;
        self.branches.get(&name)
    }

    fn ensure_initialized(&self) -> Result<(), Rejection> {
        if self.initialized {
            Ok(())
        } else {
            Err(Rejection::NotInitialized)
        }
    }

    fn current_branch_mut(&mut self) -> &mut Branch {
        self.branches
            .entry(self.current_branch.clone())
            .or_insert_with_key(|name| Branch::new(name.clone()))
    }

    fn file_mut(&mut self, name: &str) -> Result<&mut TrackedFile, Rejection> {
        let name = name.trim();
        self.files
            .get_mut(name)
            .ok_or_else(|| Rejection::FileNotFound(name.to_string()))
    }

    /// `git init`. Creates the default branch the first time.
    pub fn init(&mut self) -> InitReport {
        if self.initialized {
            debug!("init called on an initialized repository");
            return InitReport::AlreadyInitialized;
        }
        self.initialized = true;
        self.current_branch_mut();
        debug!(branch = %self.current_branch, "repository initialized");
        InitReport::Initialized {
            branch: self.current_branch.clone(),
        }
    }

    /// Create an empty, untracked file.
    pub fn create_file(&mut self, name: &str) -> Result<&TrackedFile, Rejection> {
        self.ensure_initialized()?;
        let name = FileName::new(name)?;
        if self.files.contains_key(&name) {
            return Err(Rejection::FileExists(name));
        }
        debug!(file = %name, "created file");
        Ok(&*self
            .files
            .entry(name)
            .or_insert_with_key(|name| TrackedFile::new(name.clone())))
    }

    /// Replace a file's content and mark it modified.
    pub fn edit_file(&mut self, name: &str, content: &str) -> Result<(), Rejection> {
        self.ensure_initialized()?;
        let file = self.file_mut(name)?;
        file.edit(content);
        debug!(file = %file.name, bytes = content.len(), "edited file");
        Ok(())
    }

    /// Restore a file to its last committed content.
    pub fn reset_file(&mut self, name: &str) -> Result<&TrackedFile, Rejection> {
        self.ensure_initialized()?;
        let file = self.file_mut(name)?;
        file.reset();
        debug!(file = %file.name, "reset file");
        Ok(&*file)
    }

    /// `git add`. Stages every modified file and returns how many.
    ///
    /// Zero is not a rejection; there was simply nothing to add.
    pub fn stage(&mut self) -> Result<usize, Rejection> {
        self.ensure_initialized()?;
        let staged = self
            .files
            .values_mut()
            .map(TrackedFile::stage)
            .filter(|&staged| staged)
            .count();
        debug!(staged, "staged files");
        Ok(staged)
    }

    /// `git commit -m`.
    ///
    /// Staged files become committed and their content is written to the
    /// current branch's snapshot.
    pub fn commit(&mut self, message: &str) -> Result<CommitReport, Rejection> {
        self.ensure_initialized()?;

        let staged: Vec<FileName> = self
            .files
            .values()
            .filter(|f| f.staged)
            .map(|f| f.name.clone())
            .collect();
        if staged.is_empty() {
            return Err(Rejection::NothingToCommit);
        }

        let message = message.trim();
        if message.is_empty() {
            return Err(Rejection::EmptyMessage);
        }

        let branch = self
            .branches
            .entry(self.current_branch.clone())
            .or_insert_with_key(|name| Branch::new(name.clone()));
        for name in &staged {
            if let Some(file) = self.files.get_mut(name) {
                file.mark_committed();
                branch.store(name.clone(), file.content.clone());
            }
        }
        let record = branch.record_commit(message).clone();
        debug!(branch = %record.branch, files = staged.len(), "committed");

        Ok(CommitReport {
            record,
            files: staged,
        })
    }

    /// `git status`, one entry per working file in name order.
    pub fn status(&self) -> Result<impl Iterator<Item = StatusEntry<'_>> + '_, Rejection> {
        self.ensure_initialized()?;
        Ok(self.files.values().map(|file| StatusEntry {
            name: &file.name,
            status: file.status(),
        }))
    }

    /// `git log`, most recent commit first.
    pub fn log(&self) -> Result<impl Iterator<Item = &CommitRecord> + '_, Rejection> {
        self.ensure_initialized()?;
        Ok(self
            .branches
            .get(&self.current_branch)
            .into_iter()
            .flat_map(|branch| branch.commits().iter().rev()))
    }

    /// `git ls-files`: files committed on the current branch.
    pub fn ls_files(&self) -> Result<impl Iterator<Item = &FileName> + '_, Rejection> {
        self.ensure_initialized()?;
        Ok(self
            .branches
            .get(&self.current_branch)
            .into_iter()
            .flat_map(|branch| branch.snapshot().keys()))
    }

    /// `git branch`.
    pub fn list_branches(&self) -> Result<impl Iterator<Item = BranchListing<'_>> + '_, Rejection> {
        self.ensure_initialized()?;
        Ok(self.branches.keys().map(|name| BranchListing {
            name,
            current: *name == self.current_branch,
        }))
    }

    /// `git checkout`, creating the branch if it does not exist.
    ///
    /// A new branch starts with an empty log and an empty snapshot. Switching
    /// replaces the working files with the target branch's snapshot.
    pub fn checkout(&mut self, name: &str) -> Result<CheckoutReport, Rejection> {
        self.ensure_initialized()?;
        let name = BranchName::new(name.trim())?;
        if name == self.current_branch {
            return Ok(CheckoutReport::AlreadyOn(name));
        }

        let created = !self.branches.contains_key(&name);
        let target = self
            .branches
            .entry(name.clone())
            .or_insert_with_key(|name| Branch::new(name.clone()));

        let discarded = self
            .files
            .values()
            .filter(|f| f.status() != FileStatus::Clean)
            .map(|f| f.name.clone())
            .collect();
        self.files = target
            .snapshot()
            .iter()
            .map(|(file, content)| {
                (file.clone(), TrackedFile::from_snapshot(file.clone(), content.as_str()))
            })
            .collect();
        self.current_branch = name.clone();
        debug!(branch = %name, created, "switched branch");

        Ok(CheckoutReport::Switched {
            branch: name,
            created,
            restored: self.files.len(),
            discarded,
        })
    }

    /// `git merge`: overlay the source branch's snapshot.
    ///
    /// Every file committed on `source` replaces the same-named working file
    /// and is recorded in the current branch's snapshot.
    pub fn merge(&mut self, source: &str) -> Result<MergeReport, Rejection> {
        self.ensure_initialized()?;
        let source = BranchName::new(source.trim())?;
        if source == self.current_branch {
            return Err(Rejection::SelfMerge(source));
        }
        let incoming = self
            .branches
            .get(&source)
            .ok_or_else(|| Rejection::UnknownBranch(source.to_string()))?
            .snapshot()
            .clone();

        let target = self.current_branch_mut();
        for (file, content) in &incoming {
            target.store(file.clone(), content.as_str());
        }
        let files: Vec<FileName> = incoming.keys().cloned().collect();
        let discarded: Vec<FileName> = files
            .iter()
            .filter(|name| {
                self.files
                    .get(*name)
                    .is_some_and(|file| file.status() != FileStatus::Clean)
            })
            .cloned()
            .collect();
        for (file, content) in incoming {
            self.files
                .insert(file.clone(), TrackedFile::from_snapshot(file, content));
        }
        debug!(
            source = %source,
            target = %self.current_branch,
            files = files.len(),
            discarded = discarded.len(),
            "merged"
        );

        Ok(MergeReport {
            source,
            target: self.current_branch.clone(),
            files,
            discarded,
        })
    }

    /// `git remote add`.
    pub fn remote_add(&mut self) -> Result<RemoteAddReport, Rejection> {
        self.ensure_initialized()?;
        if self.remote_connected {
            return Ok(RemoteAddReport::AlreadyConnected(self.remote_name.clone()));
        }
        self.remote_connected = true;
        debug!(remote = %self.remote_name, "remote added");
        Ok(RemoteAddReport::Added(self.remote_name.clone()))
    }

    /// `git push`. Nothing is transferred.
    pub fn push(&self) -> Result<RemoteReport, Rejection> {
        self.remote_report()
    }

    /// `git pull`. Nothing is transferred.
    pub fn pull(&self) -> Result<RemoteReport, Rejection> {
        self.remote_report()
    }

    fn remote_report(&self) -> Result<RemoteReport, Rejection> {
        self.ensure_initialized()?;
        if !self.remote_connected {
            return Err(Rejection::NoRemote);
        }
        let commits = self
            .branches
            .get(&self.current_branch)
            .map_or(0, |branch| branch.commits().len());
        Ok(RemoteReport {
            remote: self.remote_name.clone(),
            branch: self.current_branch.clone(),
            commits,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initialized() -> RepositoryState {
        let mut repo = RepositoryState::default();
        repo.init();
        repo
    }

    /// Repository with `name` committed as `content` on the current branch.
    fn with_commit(repo: &mut RepositoryState, name: &str, content: &str, message: &str) {
        if repo.file(name).is_none() {
            repo.create_file(name).unwrap();
        }
        repo.edit_file(name, content).unwrap();
        repo.stage().unwrap();
        repo.commit(message).unwrap();
    }

    fn log_messages(repo: &RepositoryState) -> Vec<String> {
        repo.log().unwrap().map(|c| c.message.clone()).collect()
    }

    fn statuses(repo: &RepositoryState) -> Vec<(String, FileStatus)> {
        repo.status()
            .unwrap()
            .map(|e| (e.name.to_string(), e.status))
            .collect()
    }

    mod init {
        use super::*;

        #[test]
        fn creates_default_branch() {
            let mut repo = RepositoryState::default();
            assert!(!repo.is_initialized());
            assert_eq!(
                repo.init(),
                InitReport::Initialized {
                    branch: BranchName::new("main").unwrap()
                }
            );
            assert!(repo.branch("main").is_some());
        }

        #[test]
        fn second_init_warns() {
            let mut repo = initialized();
            assert_eq!(repo.init(), InitReport::AlreadyInitialized);
        }

        #[test]
        fn uses_configured_default_branch() {
            let mut repo = RepositoryState::new(BranchName::new("trunk").unwrap(), "origin");
            repo.init();
            let names: Vec<_> = repo
                .list_branches()
                .unwrap()
                .map(|b| b.name.to_string())
                .collect();
            assert_eq!(names, ["trunk"]);
        }

        #[test]
        fn operations_require_init() {
            let mut repo = RepositoryState::default();
            assert_eq!(repo.create_file("a").unwrap_err(), Rejection::NotInitialized);
            assert_eq!(repo.edit_file("a", "x").unwrap_err(), Rejection::NotInitialized);
            assert_eq!(repo.stage().unwrap_err(), Rejection::NotInitialized);
            assert_eq!(repo.commit("m").unwrap_err(), Rejection::NotInitialized);
            assert!(repo.status().is_err());
            assert!(repo.log().is_err());
            assert_eq!(repo.checkout("dev").unwrap_err(), Rejection::NotInitialized);
            assert_eq!(repo.remote_add().unwrap_err(), Rejection::NotInitialized);
            assert_eq!(repo.push().unwrap_err(), Rejection::NotInitialized);
        }
    }

    mod files {
        use super::*;

        #[test]
        fn create_rejects_duplicates() {
            let mut repo = initialized();
            repo.create_file("a.txt").unwrap();
            assert!(matches!(
                repo.create_file("a.txt"),
                Err(Rejection::FileExists(_))
            ));
        }

        #[test]
        fn create_rejects_blank_names() {
            let mut repo = initialized();
            assert!(matches!(
                repo.create_file("  "),
                Err(Rejection::InvalidName(_))
            ));
        }

        #[test]
        fn edit_unknown_file_is_not_found() {
            let mut repo = initialized();
            assert_eq!(
                repo.edit_file("ghost.txt", "boo").unwrap_err(),
                Rejection::FileNotFound("ghost.txt".into())
            );
        }

        #[test]
        fn edit_marks_modified() {
            let mut repo = initialized();
            repo.create_file("a.txt").unwrap();
            repo.edit_file("a.txt", "hello").unwrap();
            let file = repo.file("a.txt").unwrap();
            assert!(file.modified);
            assert_eq!(file.content, "hello");
        }

        #[test]
        fn reset_restores_committed_content() {
            let mut repo = initialized();
            with_commit(&mut repo, "a.txt", "v1", "first");
            repo.edit_file("a.txt", "v2").unwrap();
            repo.stage().unwrap();
            let file = repo.reset_file("a.txt").unwrap();
            assert_eq!(file.content, "v1");
            assert!(!file.modified && !file.staged);
        }
    }

    mod stage_and_commit {
        use super::*;

        #[test]
        fn stage_only_touches_modified_files() {
            let mut repo = initialized();
            repo.create_file("a.txt").unwrap();
            repo.create_file("b.txt").unwrap();
            repo.edit_file("a.txt", "x").unwrap();

            assert_eq!(repo.stage().unwrap(), 1);
            assert!(repo.file("a.txt").unwrap().staged);
            assert!(!repo.file("b.txt").unwrap().staged);
        }

        #[test]
        fn stage_with_nothing_modified_is_zero() {
            let mut repo = initialized();
            repo.create_file("a.txt").unwrap();
            assert_eq!(repo.stage().unwrap(), 0);
        }

        #[test]
        fn commit_without_staged_files_changes_nothing() {
            let mut repo = initialized();
            repo.create_file("a.txt").unwrap();
            repo.edit_file("a.txt", "x").unwrap();
            let before = repo.clone();

            assert_eq!(repo.commit("msg").unwrap_err(), Rejection::NothingToCommit);
            assert_eq!(repo.files, before.files);
            assert_eq!(repo.branches, before.branches);
        }

        #[test]
        fn empty_message_cancels_commit() {
            let mut repo = initialized();
            repo.create_file("a.txt").unwrap();
            repo.edit_file("a.txt", "x").unwrap();
            repo.stage().unwrap();

            assert_eq!(repo.commit("   ").unwrap_err(), Rejection::EmptyMessage);
            assert!(repo.file("a.txt").unwrap().staged);
            assert!(log_messages(&repo).is_empty());
        }

        #[test]
        fn commit_clears_flags_and_snapshots() {
            let mut repo = initialized();
            repo.create_file("a.txt").unwrap();
            repo.edit_file("a.txt", "x").unwrap();
            repo.stage().unwrap();

            let report = repo.commit("x").unwrap();
            assert_eq!(report.record.message, "x");
            assert_eq!(report.files.len(), 1);

            let file = repo.file("a.txt").unwrap();
            assert!(file.committed && !file.modified && !file.staged);
            let names: Vec<_> = repo.ls_files().unwrap().map(|f| f.to_string()).collect();
            assert_eq!(names, ["a.txt"]);
        }

        #[test]
        fn unstaged_edits_stay_out_of_the_commit() {
            let mut repo = initialized();
            repo.create_file("a.txt").unwrap();
            repo.create_file("b.txt").unwrap();
            repo.edit_file("a.txt", "x").unwrap();
            repo.stage().unwrap();
            repo.edit_file("b.txt", "y").unwrap();
            repo.commit("only a").unwrap();

            assert_eq!(
                statuses(&repo),
                [
                    ("a.txt".to_string(), FileStatus::Clean),
                    ("b.txt".to_string(), FileStatus::Modified)
                ]
            );
        }

        #[test]
        fn first_commit_scenario() {
            let mut repo = initialized();
            repo.create_file("README.md").unwrap();
            repo.edit_file("README.md", "hi").unwrap();
            repo.stage().unwrap();
            repo.commit("first").unwrap();

            let log = log_messages(&repo);
            assert_eq!(log.len(), 1);
            assert!(log[0].ends_with("first"));
            assert!(statuses(&repo)
                .iter()
                .all(|(_, s)| !matches!(s, FileStatus::Staged | FileStatus::Modified)));
        }
    }

    mod status_and_log {
        use super::*;

        #[test]
        fn status_classifies_each_file() {
            let mut repo = initialized();
            with_commit(&mut repo, "clean.txt", "c", "c");
            repo.create_file("new.txt").unwrap();
            repo.create_file("edited.txt").unwrap();
            repo.edit_file("edited.txt", "e").unwrap();
            repo.create_file("staged.txt").unwrap();
            repo.edit_file("staged.txt", "s").unwrap();
            repo.stage().unwrap();
            repo.edit_file("edited.txt", "e2").unwrap();
            repo.create_file("wip.txt").unwrap();
            repo.edit_file("wip.txt", "w").unwrap();

            assert_eq!(
                statuses(&repo),
                [
                    ("clean.txt".to_string(), FileStatus::Clean),
                    ("edited.txt".to_string(), FileStatus::Staged),
                    ("new.txt".to_string(), FileStatus::Untracked),
                    ("staged.txt".to_string(), FileStatus::Staged),
                    ("wip.txt".to_string(), FileStatus::Modified),
                ]
            );
        }

        #[test]
        fn log_is_most_recent_first() {
            let mut repo = initialized();
            with_commit(&mut repo, "a.txt", "1", "one");
            with_commit(&mut repo, "a.txt", "2", "two");
            with_commit(&mut repo, "a.txt", "3", "three");
            assert_eq!(log_messages(&repo), ["three", "two", "one"]);
        }
    }

    mod branches {
        use super::*;

        #[test]
        fn checkout_unseen_creates_empty_branch() {
            let mut repo = initialized();
            with_commit(&mut repo, "a.txt", "1", "one");

            let report = repo.checkout("feature").unwrap();
            assert_eq!(
                report,
                CheckoutReport::Switched {
                    branch: BranchName::new("feature").unwrap(),
                    created: true,
                    restored: 0,
                    discarded: vec![],
                }
            );
            assert!(log_messages(&repo).is_empty());
            assert!(repo.file("a.txt").is_none());

            let listing: Vec<_> = repo
                .list_branches()
                .unwrap()
                .map(|b| (b.name.to_string(), b.current))
                .collect();
            assert_eq!(
                listing,
                [("feature".to_string(), true), ("main".to_string(), false)]
            );
        }

        #[test]
        fn checkout_restores_snapshot_as_committed() {
            let mut repo = initialized();
            with_commit(&mut repo, "a.txt", "main content", "one");
            repo.checkout("feature").unwrap();
            repo.checkout("main").unwrap();

            let file = repo.file("a.txt").unwrap();
            assert_eq!(file.content, "main content");
            assert_eq!(file.status(), FileStatus::Clean);
            assert_eq!(log_messages(&repo), ["one"]);
        }

        #[test]
        fn checkout_reports_discarded_work() {
            let mut repo = initialized();
            repo.create_file("draft.txt").unwrap();
            let report = repo.checkout("feature").unwrap();
            assert!(matches!(
                report,
                CheckoutReport::Switched { ref discarded, .. }
                    if discarded == &[FileName::new("draft.txt").unwrap()]
            ));
        }

        #[test]
        fn checkout_current_branch_keeps_work() {
            let mut repo = initialized();
            repo.create_file("draft.txt").unwrap();
            assert!(matches!(
                repo.checkout("main").unwrap(),
                CheckoutReport::AlreadyOn(_)
            ));
            assert!(repo.file("draft.txt").is_some());
        }

        #[test]
        fn branch_lookup_trims_like_checkout() {
            let mut repo = initialized();
            repo.checkout(" feature ").unwrap();
            assert!(repo.branch(" feature").is_some());
            assert!(repo.branch(" main ").is_some());
        }

        #[test]
        fn checkout_rejects_invalid_names() {
            let mut repo = initialized();
            assert!(matches!(
                repo.checkout("bad..name"),
                Err(Rejection::InvalidName(_))
            ));
            assert!(matches!(repo.checkout(""), Err(Rejection::InvalidName(_))));
        }
    }

    mod merge {
        use super::*;

        #[test]
        fn self_merge_rejected_and_log_unchanged() {
            let mut repo = initialized();
            with_commit(&mut repo, "a.txt", "1", "one");
            assert_eq!(
                repo.merge("main").unwrap_err(),
                Rejection::SelfMerge(BranchName::new("main").unwrap())
            );
            assert_eq!(log_messages(&repo), ["one"]);
        }

        #[test]
        fn unknown_and_unset_sources_rejected() {
            let mut repo = initialized();
            assert_eq!(
                repo.merge("nope").unwrap_err(),
                Rejection::UnknownBranch("nope".into())
            );
            assert!(matches!(repo.merge(""), Err(Rejection::InvalidName(_))));
        }

        #[test]
        fn overlays_source_snapshot() {
            let mut repo = initialized();
            with_commit(&mut repo, "shared.txt", "from main", "main work");
            with_commit(&mut repo, "main-only.txt", "m", "more main work");
            repo.checkout("feature").unwrap();
            with_commit(&mut repo, "shared.txt", "from feature", "feature work");
            repo.checkout("main").unwrap();

            let report = repo.merge("feature").unwrap();
            assert_eq!(report.files, [FileName::new("shared.txt").unwrap()]);
            assert_eq!(report.target.as_str(), "main");

            assert_eq!(repo.file("shared.txt").unwrap().content, "from feature");
            assert_eq!(repo.file("main-only.txt").unwrap().content, "m");
            let snapshot = repo.branch("main").unwrap().snapshot();
            assert_eq!(
                snapshot.get("shared.txt").map(String::as_str),
                Some("from feature")
            );
            // Logs are not combined.
            assert_eq!(log_messages(&repo), ["more main work", "main work"]);
            assert!(report.discarded.is_empty());
        }

        #[test]
        fn overlay_reports_discarded_work() {
            let mut repo = initialized();
            with_commit(&mut repo, "a.txt", "v1", "one");
            with_commit(&mut repo, "b.txt", "b1", "two");
            repo.checkout("feature").unwrap();
            with_commit(&mut repo, "a.txt", "feat", "feature work");
            repo.checkout("main").unwrap();

            repo.edit_file("a.txt", "precious work").unwrap();
            repo.stage().unwrap();
            repo.edit_file("b.txt", "kept").unwrap();

            let report = repo.merge("feature").unwrap();
            assert_eq!(report.discarded, [FileName::new("a.txt").unwrap()]);
            assert_eq!(repo.file("a.txt").unwrap().content, "feat");
            assert!(repo.file("b.txt").unwrap().modified);
        }
    }

    mod remote {
        use super::*;

        #[test]
        fn push_and_pull_need_a_remote() {
            let mut repo = initialized();
            assert_eq!(repo.push().unwrap_err(), Rejection::NoRemote);
            assert_eq!(repo.pull().unwrap_err(), Rejection::NoRemote);

            assert_eq!(
                repo.remote_add().unwrap(),
                RemoteAddReport::Added("origin".into())
            );
            let report = repo.push().unwrap();
            assert_eq!(report.remote, "origin");
            assert_eq!(report.commits, 0);
            assert!(repo.pull().is_ok());
        }

        #[test]
        fn default_remote_matches_config_default() {
            let mut repo = initialized();
            let config = crate::core::config::Config::default();
            assert_eq!(
                repo.remote_add().unwrap(),
                RemoteAddReport::Added(config.remote_name().to_string())
            );
        }

        #[test]
        fn remote_add_twice_is_reported() {
            let mut repo = initialized();
            repo.remote_add().unwrap();
            assert_eq!(
                repo.remote_add().unwrap(),
                RemoteAddReport::AlreadyConnected("origin".into())
            );
        }

        #[test]
        fn push_counts_current_branch_commits() {
            let mut repo = initialized();
            repo.remote_add().unwrap();
            with_commit(&mut repo, "a.txt", "1", "one");
            with_commit(&mut repo, "a.txt", "2", "two");
            assert_eq!(repo.push().unwrap().commits, 2);
        }
    }
}
