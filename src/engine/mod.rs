//! engine
//!
//! The simulated repository and the typed outcomes of its operations.
//!
//! # Architecture
//!
//! The engine owns every state transition. It is driven by plain method
//! calls and answers with plain values:
//!
//! ```text
//! Shell -> RepositoryState::<command>(args) -> Result<Report, Rejection> -> Shell renders
//! ```
//!
//! # Invariants
//!
//! - The engine never prints; all output is rendered by [`crate::ui`]
//! - A rejected operation leaves the state untouched
//! - There is exactly one state value per session, passed explicitly

pub mod outcome;
pub mod repo;

pub use outcome::{
    BranchListing, CheckoutReport, CommitReport, InitReport, MergeReport, Rejection,
    RemoteAddReport, RemoteReport, StatusEntry,
};
pub use repo::RepositoryState;

/// Execution context for a session.
///
/// Contains global settings derived from CLI flags and configuration that
/// affect how commands are presented.
#[derive(Debug, Clone)]
pub struct Context {
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// Prompt for missing arguments.
    pub interactive: bool,
    /// Decorate output with emoji.
    pub emoji: bool,
    /// Show and advance the guided tutorial.
    pub tutorial: bool,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            debug: false,
            quiet: false,
            interactive: true,
            emoji: true,
            tutorial: true,
        }
    }
}
