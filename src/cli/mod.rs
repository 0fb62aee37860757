//! cli
//!
//! Command-line interface layer for gitplay.
//!
//! # Responsibilities
//!
//! - Parse process arguments and global flags ([`args`])
//! - Parse individual shell lines ([`line`])
//! - Drive a session and render results ([`shell`])
//! - Does NOT change repository state itself
//!
//! # Architecture
//!
//! ```text
//! args -> config + logging -> Shell (stdin or script) -> engine
//! ```

pub mod args;
pub mod line;
pub mod shell;

pub use args::{Cli, Mode};
pub use shell::Shell;

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};

use anyhow::{Context as _, Result};
use tracing::debug;

use crate::core::config::Config;
use crate::engine::{self, RepositoryState};
use crate::logging;
use crate::ui::output::Verbosity;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    logging::init(Verbosity::from_flags(cli.quiet, cli.debug))?;

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(path) = config.loaded_from() {
        debug!(path = %path.display(), "using configuration");
    }

    let scripted = matches!(cli.mode, Some(Mode::Run { .. }));
    let ctx = engine::Context {
        debug: cli.debug,
        quiet: cli.quiet,
        interactive: cli.allows_prompts()
            && config.interactive()
            && !scripted
            && io::stdin().is_terminal(),
        emoji: config.emoji() && !cli.no_emoji,
        tutorial: config.tutorial() && !cli.no_tutorial,
    };
    let repo = RepositoryState::new(config.default_branch(), config.remote_name());

    match cli.mode {
        None | Some(Mode::Shell) => {
            let stdin = io::stdin().lock();
            let stdout = io::stdout().lock();
            Shell::new(repo, ctx, stdin, stdout).run()
        }
        Some(Mode::Run { script }) => {
            let file = File::open(&script)
                .with_context(|| format!("failed to open script {}", script.display()))?;
            debug!(script = %script.display(), "running script");
            Shell::new(repo, ctx, BufReader::new(file), io::stdout().lock())
                .echo(true)
                .run()
        }
    }
}
