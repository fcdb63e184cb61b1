//! Core building blocks shared by the library API and the CLI
//!
//! - **config**: autospec.toml parsing and validation
//! - **context**: config, command runner and Koji session bundled for commands
//! - **error**: error types with exit codes and contextual help
//! - **process**: external command execution and failure reporting
//! - **vcs**: git operations through the system `git` binary

pub mod config;
pub mod context;
pub mod error;
pub mod process;
pub mod vcs;
