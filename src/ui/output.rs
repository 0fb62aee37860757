//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! All shell output goes through a [`Printer`] so verbosity and decoration
//! are applied in one place. Narrative lines ("Changes staged.") are dropped
//! in quiet mode; data the user asked for (status entries, the log) and
//! errors are always written.
//!
//! With emoji enabled every narrative line carries an [`Icon`]; without it,
//! warnings and errors fall back to `warning:` / `error:` prefixes.

use std::fmt::Display;
use std::io::{self, Write};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - prints like `Normal`; only the log filter reads it
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Decoration for a line of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Init,
    File,
    Save,
    Reset,
    Staged,
    Modified,
    Untracked,
    Clean,
    Commit,
    Log,
    Files,
    Branch,
    NewBranch,
    Switch,
    Merge,
    Remote,
    Push,
    Pull,
    Status,
    Tutorial,
    Done,
    Info,
    Warning,
    Error,
}

impl Icon {
    pub fn emoji(self) -> &'static str {
        match self {
            Icon::Init => "🟢",
            Icon::File | Icon::Untracked => "📄",
            Icon::Save => "💾",
            Icon::Reset | Icon::Merge => "🔁",
            Icon::Staged => "✅",
            Icon::Modified => "✏️",
            Icon::Clean => "✔️",
            Icon::Commit => "📦",
            Icon::Log => "📜",
            Icon::Files => "📂",
            Icon::Branch => "🌿",
            Icon::NewBranch => "🌱",
            Icon::Switch => "🔀",
            Icon::Remote => "🔗",
            Icon::Push => "🚀",
            Icon::Pull => "📥",
            Icon::Status => "📊",
            Icon::Tutorial => "📘",
            Icon::Done => "🎉",
            Icon::Info => "👉",
            Icon::Warning => "⚠️",
            Icon::Error => "❌",
        }
    }
}

/// Writes shell output with consistent decoration.
#[derive(Debug)]
pub struct Printer<W> {
    out: W,
    verbosity: Verbosity,
    emoji: bool,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, verbosity: Verbosity, emoji: bool) -> Self {
        Self {
            out,
            verbosity,
            emoji,
        }
    }

    /// Print a narrative line (respects quiet mode).
    pub fn say(&mut self, icon: Icon, message: impl Display) -> io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            return Ok(());
        }
        self.decorated(icon, message)
    }

    /// Print a line of requested data (always shown).
    pub fn data(&mut self, icon: Icon, message: impl Display) -> io::Result<()> {
        self.decorated(icon, message)
    }

    /// Print an undecorated block, such as help text or JSON.
    pub fn raw(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Print a list item (always shown).
    pub fn item(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.out, " - {}", message)
    }

    /// Print a warning message (respects quiet mode).
    pub fn warn(&mut self, message: impl Display) -> io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            return Ok(());
        }
        if self.emoji {
            self.decorated(Icon::Warning, message)
        } else {
            writeln!(self.out, "warning: {}", message)
        }
    }

    /// Print an error message (always shown).
    pub fn error(&mut self, message: impl Display) -> io::Result<()> {
        if self.emoji {
            self.decorated(Icon::Error, message)
        } else {
            writeln!(self.out, "error: {}", message)
        }
    }

    /// Write a prompt without a trailing newline.
    pub fn prompt(&mut self, text: impl Display) -> io::Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()
    }

    fn decorated(&mut self, icon: Icon, message: impl Display) -> io::Result<()> {
        if self.emoji {
            writeln!(self.out, "{} {}", icon.emoji(), message)
        } else {
            writeln!(self.out, "{}", message)
        }
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
