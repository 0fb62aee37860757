//! cli::line
//!
//! Grammar of a single shell line.
//!
//! Lines are split on whitespace and parsed with clap, so every shell
//! command gets argument checking and `--help` for free. A leading `git` is
//! ignored, letting learners type `git commit -m first` or `commit first`.
//!
//! Free text (commit messages, file content) is the rest of the line joined
//! with single spaces; one pair of matching surrounding quotes is removed.

use clap::{ArgAction, Parser, Subcommand};

use crate::tutorial::Step;

/// A parsed shell line.
#[derive(Parser, Debug)]
#[command(
    name = "gitplay",
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

/// Commands understood by the shell.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Initialize the repository
    Init,

    /// Create a new empty file and open it
    New {
        /// File to create (prompted for if missing)
        file: Option<String>,
    },

    /// Open a file and show its content
    Open {
        /// File to open (prompted for if missing)
        file: Option<String>,
    },

    /// Replace a file's content
    Edit {
        /// File to edit
        file: String,

        /// New content (rest of the line)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        content: Vec<String>,
    },

    /// Replace the open file's content
    Save {
        /// New content (rest of the line)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        content: Vec<String>,
    },

    /// Restore a file to its last commit
    Reset {
        /// File to reset (defaults to the open file)
        file: Option<String>,
    },

    /// Stage every modified file
    Add {
        /// Accepted for familiarity; all modified files are staged
        #[arg(hide = true)]
        pathspec: Vec<String>,
    },

    /// Commit staged changes
    Commit {
        /// Accepted for familiarity
        #[arg(short = 'm', action = ArgAction::SetTrue, hide = true)]
        dash_m: bool,

        /// Commit message (rest of the line; prompted for if missing)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        message: Vec<String>,
    },

    /// Show staged, modified and untracked files
    Status,

    /// Show the commit log, most recent first
    Log,

    /// List files committed on the current branch
    #[command(name = "ls-files")]
    LsFiles,

    /// List branches
    Branch,

    /// Switch to a branch, creating it if needed
    Checkout {
        /// Accepted for familiarity; unknown branches are always created
        #[arg(short = 'b', action = ArgAction::SetTrue, hide = true)]
        create: bool,

        /// Branch name (prompted for if missing)
        branch: Option<String>,
    },

    /// Merge another branch into the current one
    Merge {
        /// Branch to merge (prompted for if missing)
        branch: Option<String>,
    },

    /// Manage the simulated remote
    Remote {
        #[command(subcommand)]
        action: RemoteAction,
    },

    /// Pretend to push to the remote
    Push {
        #[arg(hide = true)]
        refspec: Vec<String>,
    },

    /// Pretend to pull from the remote
    Pull {
        #[arg(hide = true)]
        refspec: Vec<String>,
    },

    /// Show the current tutorial step
    Tutorial,

    /// Dump the repository state as JSON
    State,

    /// List commands
    Help,

    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

/// `remote` subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum RemoteAction {
    /// Connect the simulated remote
    Add {
        /// Accepted for familiarity; the configured remote name is used
        #[arg(hide = true)]
        args: Vec<String>,
    },
}

impl ShellCommand {
    /// Tutorial step this command satisfies.
    pub fn step(&self) -> Option<Step> {
        let step = match self {
            ShellCommand::Init => Step::Init,
            ShellCommand::New { .. } => Step::NewFile,
            ShellCommand::Edit { .. } | ShellCommand::Save { .. } => Step::Save,
            ShellCommand::Add { .. } => Step::Add,
            ShellCommand::Commit { .. } => Step::Commit,
            ShellCommand::Status => Step::Status,
            ShellCommand::Log => Step::Log,
            ShellCommand::LsFiles => Step::LsFiles,
            ShellCommand::Branch => Step::Branch,
            ShellCommand::Checkout { .. } => Step::Checkout,
            ShellCommand::Merge { .. } => Step::Merge,
            ShellCommand::Remote { .. } => Step::RemoteAdd,
            ShellCommand::Push { .. } => Step::Push,
            ShellCommand::Pull { .. } => Step::Pull,
            ShellCommand::Open { .. }
            | ShellCommand::Reset { .. }
            | ShellCommand::Tutorial
            | ShellCommand::State
            | ShellCommand::Help
            | ShellCommand::Exit => return None,
        };
        Some(step)
    }
}

/// Split a line into clap tokens, dropping a leading `git`.
pub fn tokenize(line: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.first() == Some(&"git") {
        tokens.remove(0);
    }
    tokens
}

/// Parse one line. Returns `Ok(None)` for blank lines and comments.
///
/// # Errors
///
/// Returns the clap error (including `--help` requests) for the caller to
/// render.
pub fn parse(line: &str) -> Result<Option<ShellCommand>, clap::Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let tokens = tokenize(trimmed);
    if tokens.is_empty() {
        return Ok(None);
    }
    ShellLine::try_parse_from(tokens).map(|parsed| Some(parsed.command))
}

/// Join free-text words and strip one pair of surrounding quotes.
pub fn join_text(words: &[String]) -> String {
    let text = words.join(" ");
    for quote in ['"', '\''] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return text[1..text.len() - 1].to_string();
        }
    }
    text
}
