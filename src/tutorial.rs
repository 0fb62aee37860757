//! tutorial
//!
//! Guided walkthrough of the simulated commands.
//!
//! The tutorial is a fixed sequence of steps. It moves forward only when the
//! learner successfully runs the command the current step asks for; any
//! other command leaves it where it is.

/// A command the tutorial can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Init,
    NewFile,
    Save,
    Add,
    Commit,
    Status,
    Log,
    LsFiles,
    Branch,
    Checkout,
    Merge,
    RemoteAdd,
    Push,
    Pull,
}

const STEPS: [(Step, &str); 14] = [
    (Step::Init, "Start your Git journey with `init`."),
    (Step::NewFile, "Create a new file with `new <file>`."),
    (Step::Save, "Write something into it with `save <text>` or `edit <file> <text>`."),
    (Step::Add, "Stage your changes with `add`."),
    (Step::Commit, "Commit the staged changes with `commit <message>`."),
    (Step::Status, "Check which files are staged or modified with `status`."),
    (Step::Log, "View your commit history with `log`."),
    (Step::LsFiles, "See the files tracked on this branch with `ls-files`."),
    (Step::Branch, "List branches with `branch`."),
    (Step::Checkout, "Switch to or create a branch with `checkout <name>`."),
    (Step::Merge, "Merge another branch into this one with `merge <name>`."),
    (Step::RemoteAdd, "Pretend to add a remote with `remote add`."),
    (Step::Push, "Pretend to push with `push`."),
    (Step::Pull, "Pretend to pull with `pull`."),
];

const COMPLETE: &str = "Tutorial complete!";

/// Progress through the guided steps.
#[derive(Debug, Clone, Default)]
pub struct Tutorial {
    current: usize,
}

impl Tutorial {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text for the current step.
    pub fn instruction(&self) -> &'static str {
        STEPS
            .get(self.current)
            .map_or(COMPLETE, |(_, text)| *text)
    }

    /// The step the tutorial is waiting for, if any.
    pub fn expected(&self) -> Option<Step> {
        STEPS.get(self.current).map(|(step, _)| *step)
    }

    /// Advance if `step` is the expected one. Returns whether it advanced.
    pub fn advance(&mut self, step: Step) -> bool {
        if self.expected() == Some(step) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    pub fn is_complete(&self) -> bool {
        self.current >= STEPS.len()
    }

    /// `(finished steps, total steps)`.
    pub fn progress(&self) -> (usize, usize) {
        (self.current.min(STEPS.len()), STEPS.len())
    }
}
