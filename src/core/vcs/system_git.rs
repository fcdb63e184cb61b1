//! System git backend
//!
//! Thin wrappers over `git log` and `git checkout` run in a package
//! repository. Failures come back unchanged from [`run_command`].

use crate::core::error::AutospecResult;
use crate::core::process::{CommandRunner, run_command};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Git operations rooted at a working directory
pub struct SystemGit {
  runner: Arc<dyn CommandRunner>,
  /// Executable name or path
  program: String,
  /// Directory the commands run in
  repo_path: PathBuf,
}

impl SystemGit {
  pub fn new(runner: Arc<dyn CommandRunner>, program: impl Into<String>, repo_path: &Path) -> Self {
    Self {
      runner,
      program: program.into(),
      repo_path: repo_path.to_path_buf(),
    }
  }

  pub fn repo_path(&self) -> &Path {
    &self.repo_path
  }

  /// Get the current commit hash
  ///
  /// Runs `git log -1 --format=%H` followed by `log_options` verbatim, so
  /// callers can ask for e.g. the last commit touching a path.
  pub fn head_commit(&self, log_options: &[String]) -> AutospecResult<String> {
    debug!(path = %self.repo_path.display(), "querying current git commit hash");

    let mut cmd = vec![
      self.program.clone(),
      "log".to_string(),
      "-1".to_string(),
      "--format=%H".to_string(),
    ];
    cmd.extend(log_options.iter().cloned());

    debug!(cmd = ?cmd, "head_commit");
    let output = run_command(self.runner.as_ref(), &cmd, Some(&self.repo_path))?;
    Ok(String::from_utf8(output)?.trim().to_string())
  }

  /// Check out `commit` and return the resulting HEAD hash
  ///
  /// `options` are appended after the commit. The checkout's own output is
  /// discarded; the return value comes from a fresh [`Self::head_commit`].
  pub fn checkout_commit(&self, commit: &str, options: &[String]) -> AutospecResult<String> {
    debug!(path = %self.repo_path.display(), commit = %commit, "checking out git commit");

    let mut cmd = vec![self.program.clone(), "checkout".to_string(), commit.to_string()];
    cmd.extend(options.iter().cloned());

    debug!(cmd = ?cmd, "checkout_commit");
    run_command(self.runner.as_ref(), &cmd, Some(&self.repo_path))?;

    self.head_commit(&[])
  }
}
