//! CLI commands for autospec
//!
//! - **evr**: parse and sort `[epoch:]version[-release]` strings
//! - **uses**: report whether a spec file uses `%autorelease` / `%autochangelog`
//! - **version**: render the version of a package's spec file
//! - **git**: read (`head`) or move (`checkout`) the current commit
//! - **doctor**: check the configured tools and Koji hub
//!
//! All commands accept `&AutospecContext` so config is loaded once in main.

pub mod doctor;
pub mod evr;
pub mod git;
pub mod uses;
pub mod version;

pub use doctor::run_doctor;
pub use evr::run_evr;
pub use git::{run_checkout, run_head};
pub use uses::run_uses;
pub use version::run_version;

use autospec::AutospecError;
use autospec::core::error::AutospecResult;
use serde::Serialize;

/// Print a value as pretty JSON on stdout
pub(crate) fn print_json<T: Serialize>(value: &T) -> AutospecResult<()> {
  let json_output = serde_json::to_string_pretty(value)
    .map_err(|e| AutospecError::message(format!("Failed to serialize JSON: {}", e)))?;
  println!("{}", json_output);
  Ok(())
}
