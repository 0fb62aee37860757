//! gitplay - a terminal playground for learning Git
//!
//! gitplay simulates a small Git repository in memory. Learners type familiar
//! commands (`init`, `add`, `commit`, `checkout`, `merge`, `push`) into a
//! shell and see how files, branches and the log react, without touching a
//! real repository or network.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Argument parsing, the line grammar and the shell loop
//! - [`engine`] - The simulated repository and its typed outcomes
//! - [`core`] - Domain types, files, branches and configuration
//! - [`tutorial`] - The guided step sequence
//! - [`ui`] - Output rendering and prompts
//! - [`logging`] - Diagnostic logging setup
//!
//! # Invariants
//!
//! 1. All state lives in one explicit [`engine::RepositoryState`] value
//! 2. Rejected operations leave the state unchanged
//! 3. Only the `cli` and `ui` layers write to the terminal

pub mod cli;
pub mod core;
pub mod engine;
pub mod logging;
pub mod tutorial;
pub mod ui;
