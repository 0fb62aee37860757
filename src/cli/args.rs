//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! - `--config <path>`: Read configuration from this file
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output; implies --no-interactive
//! - `--no-interactive`: Never prompt for missing arguments
//! - `--no-emoji`: Plain output
//! - `--no-tutorial`: Hide the guided tutorial

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gitplay - practice Git commands against a simulated repository
#[derive(Parser, Debug)]
#[command(name = "gitplay")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Read configuration from this file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; implies --no-interactive
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Never prompt for missing arguments
    #[arg(long, global = true)]
    pub no_interactive: bool,

    /// Plain output without emoji
    #[arg(long, global = true)]
    pub no_emoji: bool,

    /// Hide the guided tutorial
    #[arg(long, global = true)]
    pub no_tutorial: bool,

    #[command(subcommand)]
    pub mode: Option<Mode>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Whether prompts may be shown, before config and terminal checks.
    pub fn allows_prompts(&self) -> bool {
        !(self.no_interactive || self.quiet)
    }
}

/// How commands are fed to the simulator.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Read commands interactively from stdin (default)
    Shell,

    /// Run commands from a script file, one per line
    #[command(
        after_help = "\
SCRIPT FORMAT:
    One shell command per line. Blank lines and lines starting with '#'
    are skipped. Each command is echoed before it runs.

EXAMPLE:
    # first-commit.gp
    init
    new README.md
    edit README.md hello
    add
    commit first commit
    log"
    )]
    Run {
        /// Script to execute
        script: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_no_mode() {
        let cli = Cli::try_parse_from(["gitplay"]).unwrap();
        assert_eq!(cli.mode, None);
        assert!(cli.allows_prompts());
    }

    #[test]
    fn run_takes_a_script() {
        let cli = Cli::try_parse_from(["gitplay", "run", "demo.gp", "--no-emoji"]).unwrap();
        assert_eq!(
            cli.mode,
            Some(Mode::Run {
                script: PathBuf::from("demo.gp")
            })
        );
        assert!(cli.no_emoji);
    }

    #[test]
    fn quiet_disables_prompts() {
        let cli = Cli::try_parse_from(["gitplay", "-q"]).unwrap();
        assert!(!cli.allows_prompts());
    }

    #[test]
    fn verify_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
