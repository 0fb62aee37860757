//! core
//!
//! Core domain types for the simulated repository.
//!
//! # Modules
//!
//! - [`types`] - Strong types: BranchName, FileName
//! - [`file`] - Working files and their status flags
//! - [`branch`] - Branches, commit records and snapshots
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid names from reaching the engine
//! - Schemas are strict and self-describing
//! - Ordering is deterministic (sorted maps throughout)

pub mod branch;
pub mod config;
pub mod file;
pub mod types;
