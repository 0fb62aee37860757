//! cli::shell
//!
//! The interactive session: read a line, run it against the repository,
//! render the result.
//!
//! # Architecture
//!
//! ```text
//! input line -> line::parse -> ShellCommand -> RepositoryState::<op>
//!                                                   |
//!                     Printer <- render report <----+
//! ```
//!
//! Rejections are rendered as errors and the loop goes on; only I/O failures
//! end the session early. The shell also keeps what a GUI would keep next to
//! the repository: the currently open file and the tutorial position.

use std::io::{BufRead, Write};

use anyhow::{Context as _, Result};
use clap::error::ErrorKind;
use clap::CommandFactory;
use tracing::debug;

use super::line::{self, join_text, RemoteAction, ShellCommand, ShellLine};
use crate::core::file::FileStatus;
use crate::core::types::FileName;
use crate::engine::{
    CheckoutReport, Context, InitReport, Rejection, RemoteAddReport, RepositoryState,
};
use crate::tutorial::{Step, Tutorial};
use crate::ui::output::{Icon, Printer, Verbosity};
use crate::ui::prompts::{self, PromptError};

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Outcome of running one command.
enum Ran {
    /// The command did what was asked; the tutorial may advance.
    Done,
    /// Rejected, cancelled, or purely informational.
    NoProgress,
    Exit,
}

/// A shell session over one repository.
pub struct Shell<R, W> {
    repo: RepositoryState,
    ctx: Context,
    input: R,
    printer: Printer<W>,
    tutorial: Option<Tutorial>,
    open_file: Option<FileName>,
    echo: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(repo: RepositoryState, ctx: Context, input: R, output: W) -> Self {
        let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);
        let printer = Printer::new(output, verbosity, ctx.emoji);
        let tutorial = ctx.tutorial.then(Tutorial::new);
        Self {
            repo,
            ctx,
            input,
            printer,
            tutorial,
            open_file: None,
            echo: false,
        }
    }

    /// Echo each command before running it (script mode).
    pub fn echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn repo(&self) -> &RepositoryState {
        &self.repo
    }

    pub fn open_file(&self) -> Option<&FileName> {
        self.open_file.as_ref()
    }

    pub fn tutorial(&self) -> Option<&Tutorial> {
        self.tutorial.as_ref()
    }

    pub fn into_output(self) -> W {
        self.printer.into_inner()
    }

    /// Read and run lines until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        self.printer
            .say(Icon::Info, "Welcome to the Git playground. Type 'help' for commands.")?;
        self.show_instruction()?;

        loop {
            if self.ctx.interactive {
                self.printer
                    .prompt(format!("gitplay ({})> ", self.repo.current_branch()))?;
            }

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read command")?;
            if read == 0 {
                debug!("end of input");
                break;
            }

            if self.execute_line(&line)? == Flow::Exit {
                break;
            }
        }

        self.printer.say(Icon::Info, "Bye!")?;
        Ok(())
    }

    /// Parse and run a single line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        let command = match line::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(err) => {
                self.render_parse_error(&err)?;
                return Ok(Flow::Continue);
            }
        };

        if self.echo {
            self.printer.raw(format!("$ {}", line.trim()))?;
        }
        debug!(?command, "running command");

        let step = command.step();
        match self.execute(command)? {
            Ran::Exit => return Ok(Flow::Exit),
            Ran::Done => {
                if let Some(step) = step {
                    self.advance_tutorial(step)?;
                }
            }
            Ran::NoProgress => {}
        }
        Ok(Flow::Continue)
    }

    fn render_parse_error(&mut self, err: &clap::Error) -> Result<()> {
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                self.printer.raw(err.render().to_string().trim_end())?;
            }
            _ => {
                let rendered = err.render().to_string();
                let first = rendered
                    .lines()
                    .next()
                    .unwrap_or_default()
                    .trim_start_matches("error: ");
                self.printer.error(first)?;
                self.printer.say(Icon::Info, "Type 'help' for commands.")?;
            }
        }
        Ok(())
    }

    fn execute(&mut self, command: ShellCommand) -> Result<Ran> {
        let ran = match command {
            ShellCommand::Init => self.init()?,
            ShellCommand::New { file } => self.new_file(file)?,
            ShellCommand::Open { file } => self.open(file)?,
            ShellCommand::Edit { file, content } => self.edit(&file, &join_text(&content))?,
            ShellCommand::Save { content } => self.save(&join_text(&content))?,
            ShellCommand::Reset { file } => self.reset(file)?,
            ShellCommand::Add { .. } => self.add()?,
            ShellCommand::Commit { message, .. } => self.commit(join_text(&message))?,
            ShellCommand::Status => self.status()?,
            ShellCommand::Log => self.log()?,
            ShellCommand::LsFiles => self.ls_files()?,
            ShellCommand::Branch => self.branch()?,
            ShellCommand::Checkout { branch, .. } => self.checkout(branch)?,
            ShellCommand::Merge { branch } => self.merge(branch)?,
            ShellCommand::Remote {
                action: RemoteAction::Add { .. },
            } => self.remote_add()?,
            ShellCommand::Push { .. } => self.push()?,
            ShellCommand::Pull { .. } => self.pull()?,
            ShellCommand::Tutorial => self.show_tutorial()?,
            ShellCommand::State => self.state()?,
            ShellCommand::Help => self.help()?,
            ShellCommand::Exit => Ran::Exit,
        };
        Ok(ran)
    }

    // ---------- helpers ----------

    fn reject(&mut self, rejection: Rejection) -> Result<Ran> {
        debug!(%rejection, "command rejected");
        self.printer.error(rejection)?;
        Ok(Ran::NoProgress)
    }

    /// Use `given` or prompt for it. `None` means the command was cancelled.
    fn argument(&mut self, given: Option<String>, question: &str) -> Result<Option<String>> {
        if let Some(value) = given.filter(|v| !v.trim().is_empty()) {
            return Ok(Some(value));
        }
        match prompts::input(
            &mut self.input,
            self.printer.writer_mut(),
            question,
            self.ctx.interactive,
        ) {
            Ok(answer) => Ok(Some(answer)),
            Err(PromptError::Io(err)) => Err(err).context("failed to read answer"),
            Err(reason) => {
                debug!(%reason, question, "prompt not answered");
                self.printer.warn("Cancelled.")?;
                Ok(None)
            }
        }
    }

    fn show_file(&mut self, name: &str) -> Result<()> {
        if let Some(file) = self.repo.file(name) {
            let content = file.content.clone();
            if content.is_empty() {
                self.printer.say(Icon::File, "(empty)")?;
            } else {
                for line in content.lines() {
                    self.printer.raw(format!("    {}", line))?;
                }
            }
        }
        Ok(())
    }

    fn warn_discarded(&mut self, discarded: &[FileName]) -> Result<()> {
        if !discarded.is_empty() {
            let names: Vec<String> = discarded.iter().map(ToString::to_string).collect();
            self.printer.warn(format!(
                "Uncommitted changes discarded: {}",
                names.join(", ")
            ))?;
        }
        Ok(())
    }

    fn show_instruction(&mut self) -> Result<()> {
        if let Some(tutorial) = &self.tutorial {
            let icon = if tutorial.is_complete() {
                Icon::Done
            } else {
                Icon::Tutorial
            };
            let text = tutorial.instruction();
            self.printer.say(icon, text)?;
        }
        Ok(())
    }

    fn advance_tutorial(&mut self, step: Step) -> Result<()> {
        let advanced = self
            .tutorial
            .as_mut()
            .is_some_and(|tutorial| tutorial.advance(step));
        if advanced {
            self.show_instruction()?;
        }
        Ok(())
    }

    // ---------- file actions ----------

    fn init(&mut self) -> Result<Ran> {
        match self.repo.init() {
            InitReport::Initialized { branch } => {
                self.printer.say(
                    Icon::Init,
                    format!("Git repository initialized on branch '{}'.", branch),
                )?;
                Ok(Ran::Done)
            }
            InitReport::AlreadyInitialized => {
                self.printer.warn("Repository already initialized.")?;
                Ok(Ran::NoProgress)
            }
        }
    }

    fn new_file(&mut self, file: Option<String>) -> Result<Ran> {
        if !self.repo.is_initialized() {
            return self.reject(Rejection::NotInitialized);
        }
        let Some(name) = self.argument(file, "Enter new filename:")? else {
            return Ok(Ran::NoProgress);
        };
        let created = match self.repo.create_file(&name) {
            Ok(file) => file.name.clone(),
            Err(rejection) => return self.reject(rejection),
        };
        self.printer
            .say(Icon::File, format!("Created '{}'", created))?;
        self.printer.say(Icon::Info, format!("Opened '{}'", created))?;
        self.open_file = Some(created);
        Ok(Ran::Done)
    }

    fn open(&mut self, file: Option<String>) -> Result<Ran> {
        let Some(name) = self.argument(file, "Enter filename to open:")? else {
            return Ok(Ran::NoProgress);
        };
        let Some(found) = self.repo.file(&name).map(|f| f.name.clone()) else {
            return self.reject(Rejection::FileNotFound(name.trim().to_string()));
        };
        self.printer.say(Icon::Info, format!("Opened '{}'", found))?;
        self.show_file(found.as_str())?;
        self.open_file = Some(found);
        Ok(Ran::NoProgress)
    }

    fn edit(&mut self, file: &str, content: &str) -> Result<Ran> {
        if let Err(rejection) = self.repo.edit_file(file, content) {
            return self.reject(rejection);
        }
        self.printer
            .say(Icon::Save, format!("Saved '{}'", file.trim()))?;
        Ok(Ran::Done)
    }

    fn save(&mut self, content: &str) -> Result<Ran> {
        let Some(name) = self.current_open_file() else {
            self.printer.error("No file is currently open.")?;
            return Ok(Ran::NoProgress);
        };
        self.edit(name.as_str(), content)
    }

    fn reset(&mut self, file: Option<String>) -> Result<Ran> {
        let name = match file {
            Some(name) => name,
            None => match self.current_open_file() {
                Some(name) => name.to_string(),
                None => {
                    self.printer.error("No file is currently open.")?;
                    return Ok(Ran::NoProgress);
                }
            },
        };
        let reset = match self.repo.reset_file(&name) {
            Ok(file) => file.name.clone(),
            Err(rejection) => return self.reject(rejection),
        };
        self.printer
            .say(Icon::Reset, format!("Reset '{}' to last commit.", reset))?;
        self.show_file(reset.as_str())?;
        Ok(Ran::Done)
    }

    /// The open file, if it still exists after checkouts and merges.
    fn current_open_file(&mut self) -> Option<FileName> {
        let exists = self
            .open_file
            .as_ref()
            .is_some_and(|name| self.repo.file(name.as_str()).is_some());
        if !exists {
            self.open_file = None;
        }
        self.open_file.clone()
    }

    // ---------- basic git actions ----------

    fn add(&mut self) -> Result<Ran> {
        match self.repo.stage() {
            Ok(0) => {
                self.printer.say(Icon::Info, "Nothing to add.")?;
                Ok(Ran::NoProgress)
            }
            Ok(count) => {
                self.printer.say(
                    Icon::Staged,
                    format!("Changes staged ({} file{}).", count, plural(count)),
                )?;
                Ok(Ran::Done)
            }
            Err(rejection) => self.reject(rejection),
        }
    }

    fn commit(&mut self, message: String) -> Result<Ran> {
        // Same checks the engine makes, done first so we never prompt for a
        // message that would be thrown away.
        if !self.repo.is_initialized() {
            return self.reject(Rejection::NotInitialized);
        }
        let has_staged = self
            .repo
            .status()
            .map(|mut entries| entries.any(|e| e.status == FileStatus::Staged))
            .unwrap_or(false);
        if !has_staged {
            return self.reject(Rejection::NothingToCommit);
        }

        let given = (!message.trim().is_empty()).then_some(message);
        let Some(message) = self.argument(given, "Enter commit message:")? else {
            return self.reject(Rejection::EmptyMessage);
        };

        match self.repo.commit(&message) {
            Ok(report) => {
                self.printer.say(
                    Icon::Commit,
                    format!(
                        "Committed: '{}' ({} file{})",
                        report.record.message,
                        report.files.len(),
                        plural(report.files.len())
                    ),
                )?;
                Ok(Ran::Done)
            }
            Err(rejection) => self.reject(rejection),
        }
    }

    // ---------- inspection ----------

    fn status(&mut self) -> Result<Ran> {
        let entries = self
            .repo
            .status()
            .map(|entries| entries.map(|e| (e.name.clone(), e.status)).collect::<Vec<_>>());
        let entries = match entries {
            Ok(entries) => entries,
            Err(rejection) => return self.reject(rejection),
        };

        self.printer.say(
            Icon::Status,
            format!("On branch {}", self.repo.current_branch()),
        )?;
        let mut shown = 0;
        for (name, status) in entries {
            let icon = match status {
                FileStatus::Staged => Icon::Staged,
                FileStatus::Modified => Icon::Modified,
                FileStatus::Untracked => Icon::Untracked,
                FileStatus::Clean => continue,
            };
            self.printer.data(icon, format!("{}: {}", status, name))?;
            shown += 1;
        }
        if shown == 0 {
            self.printer
                .say(Icon::Clean, "Nothing to commit, working tree clean.")?;
        }
        Ok(Ran::Done)
    }

    fn log(&mut self) -> Result<Ran> {
        let messages = self
            .repo
            .log()
            .map(|commits| commits.map(|c| c.message.clone()).collect::<Vec<_>>());
        let messages = match messages {
            Ok(messages) => messages,
            Err(rejection) => return self.reject(rejection),
        };

        self.printer.say(Icon::Log, "Commit Log:")?;
        if messages.is_empty() {
            self.printer.say(Icon::Info, "No commits yet.")?;
        }
        for message in messages {
            self.printer.item(message)?;
        }
        Ok(Ran::Done)
    }

    fn ls_files(&mut self) -> Result<Ran> {
        let names = self
            .repo
            .ls_files()
            .map(|names| names.map(ToString::to_string).collect::<Vec<_>>());
        let names = match names {
            Ok(names) => names,
            Err(rejection) => return self.reject(rejection),
        };

        self.printer.say(
            Icon::Files,
            format!("Files in branch '{}':", self.repo.current_branch()),
        )?;
        for name in names {
            self.printer.item(name)?;
        }
        Ok(Ran::Done)
    }

    // ---------- branching ----------

    fn branch(&mut self) -> Result<Ran> {
        let listing = self
            .repo
            .list_branches()
            .map(|branches| {
                branches
                    .map(|b| (b.name.to_string(), b.current))
                    .collect::<Vec<_>>()
            });
        let listing = match listing {
            Ok(listing) => listing,
            Err(rejection) => return self.reject(rejection),
        };

        for (name, current) in listing {
            let tag = if current { " (current)" } else { "" };
            self.printer.data(Icon::Branch, format!("{}{}", name, tag))?;
        }
        Ok(Ran::Done)
    }

    fn checkout(&mut self, branch: Option<String>) -> Result<Ran> {
        if !self.repo.is_initialized() {
            return self.reject(Rejection::NotInitialized);
        }
        let Some(name) = self.argument(branch, "Enter branch name:")? else {
            return Ok(Ran::NoProgress);
        };

        match self.repo.checkout(&name) {
            Ok(CheckoutReport::AlreadyOn(branch)) => {
                self.printer
                    .say(Icon::Info, format!("Already on '{}'", branch))?;
                Ok(Ran::Done)
            }
            Ok(CheckoutReport::Switched {
                branch,
                created,
                restored,
                discarded,
            }) => {
                self.warn_discarded(&discarded)?;
                if created {
                    self.printer
                        .say(Icon::NewBranch, format!("Created new branch '{}'", branch))?;
                }
                self.printer.say(
                    Icon::Switch,
                    format!(
                        "Switched to branch '{}' ({} file{})",
                        branch,
                        restored,
                        plural(restored)
                    ),
                )?;
                Ok(Ran::Done)
            }
            Err(rejection) => self.reject(rejection),
        }
    }

    fn merge(&mut self, branch: Option<String>) -> Result<Ran> {
        if !self.repo.is_initialized() {
            return self.reject(Rejection::NotInitialized);
        }
        let Some(name) = self.argument(branch, "Enter branch to merge:")? else {
            return Ok(Ran::NoProgress);
        };

        match self.repo.merge(&name) {
            Ok(report) => {
                self.warn_discarded(&report.discarded)?;
                self.printer.say(
                    Icon::Merge,
                    format!(
                        "Merged '{}' into '{}' ({} file{})",
                        report.source,
                        report.target,
                        report.files.len(),
                        plural(report.files.len())
                    ),
                )?;
                Ok(Ran::Done)
            }
            Err(rejection) => self.reject(rejection),
        }
    }

    // ---------- remote ----------

    fn remote_add(&mut self) -> Result<Ran> {
        match self.repo.remote_add() {
            Ok(RemoteAddReport::Added(remote)) => {
                self.printer
                    .say(Icon::Remote, format!("Remote '{}' added.", remote))?;
                Ok(Ran::Done)
            }
            Ok(RemoteAddReport::AlreadyConnected(remote)) => {
                self.printer
                    .warn(format!("Remote '{}' already exists.", remote))?;
                Ok(Ran::NoProgress)
            }
            Err(rejection) => self.reject(rejection),
        }
    }

    fn push(&mut self) -> Result<Ran> {
        match self.repo.push() {
            Ok(report) => {
                self.printer.say(
                    Icon::Push,
                    format!(
                        "Pushed '{}' to {} ({} commit{}).",
                        report.branch,
                        report.remote,
                        report.commits,
                        plural(report.commits)
                    ),
                )?;
                Ok(Ran::Done)
            }
            Err(rejection) => self.reject(rejection),
        }
    }

    fn pull(&mut self) -> Result<Ran> {
        match self.repo.pull() {
            Ok(report) => {
                self.printer.say(
                    Icon::Pull,
                    format!(
                        "Pulled from {} into '{}'. Already up to date.",
                        report.remote, report.branch
                    ),
                )?;
                Ok(Ran::Done)
            }
            Err(rejection) => self.reject(rejection),
        }
    }

    // ---------- session ----------

    fn show_tutorial(&mut self) -> Result<Ran> {
        match &self.tutorial {
            Some(tutorial) => {
                let (done, total) = tutorial.progress();
                self.printer
                    .data(Icon::Tutorial, format!("Step {}/{}", done.min(total - 1) + 1, total))?;
                self.show_instruction()?;
            }
            None => self.printer.warn("Tutorial is disabled.")?,
        }
        Ok(Ran::NoProgress)
    }

    fn state(&mut self) -> Result<Ran> {
        let json =
            serde_json::to_string_pretty(&self.repo).context("failed to serialize state")?;
        self.printer.raw(json)?;
        Ok(Ran::NoProgress)
    }

    fn help(&mut self) -> Result<Ran> {
        let help = ShellLine::command().render_help();
        self.printer.raw(help.to_string().trim_end())?;
        Ok(Ran::NoProgress)
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
