//! RPM-facing helpers
//!
//! - **evr**: `[epoch:]version[-release]` parsing and ordering
//! - **vercmp**: rpm's version comparison
//! - **specfile**: `%autorelease` / `%autochangelog` detection
//! - **query**: best-effort version query through `rpm --specfile`

pub mod evr;
pub mod query;
pub mod specfile;
pub mod vercmp;

use crate::core::process::CommandRunner;
use std::sync::Arc;

/// The `%autorelease` macro including its parameters
pub const AUTORELEASE_MACRO: &str = "autorelease(e:s:hp)";

/// Expansion of `%autorelease` used when probing for the macro
pub const AUTORELEASE_SENTINEL: &str = "__AUTORELEASE_SENTINEL__";

/// Handle for running the `rpm` query engine
pub struct Rpm {
  runner: Arc<dyn CommandRunner>,
  program: String,
}

impl Rpm {
  pub fn new(runner: Arc<dyn CommandRunner>, program: impl Into<String>) -> Self {
    Self {
      runner,
      program: program.into(),
    }
  }

  pub fn program(&self) -> &str {
    &self.program
  }

  fn runner(&self) -> &dyn CommandRunner {
    self.runner.as_ref()
  }

  /// `rpm` followed by `args`
  fn command<I, S>(&self, args: I) -> Vec<String>
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    std::iter::once(self.program.clone())
      .chain(args.into_iter().map(Into::into))
      .collect()
  }
}
