//! Shared context - build once in main, pass to every command
//!
//! Holds the loaded configuration, the command runner used for every
//! subprocess, and the caller-owned Koji session.

use crate::core::config::AutospecConfig;
use crate::core::error::AutospecResult;
use crate::core::process::{CommandRunner, SystemRunner};
use crate::core::vcs::SystemGit;
use crate::koji::{KojiSession, koji_init};
use crate::rpm::Rpm;
use std::path::Path;
use std::sync::Arc;

#[derive(Clone)]
pub struct AutospecContext {
  pub config: Arc<AutospecConfig>,
  pub runner: Arc<dyn CommandRunner>,
  pub koji: KojiSession,
}

impl AutospecContext {
  /// Build a context from a loaded config, running commands on the host
  pub fn new(config: AutospecConfig) -> Self {
    Self::with_runner(config, Arc::new(SystemRunner))
  }

  /// Build a context that runs commands through `runner`
  pub fn with_runner(config: AutospecConfig, runner: Arc<dyn CommandRunner>) -> Self {
    let koji = koji_init(config.koji.hub_url.as_str());
    Self {
      config: Arc::new(config),
      runner,
      koji,
    }
  }

  /// Load config from `dir` (or an explicit file) and build a context
  pub fn load(dir: &Path, config_file: Option<&Path>) -> AutospecResult<Self> {
    let config = match config_file {
      Some(file) => AutospecConfig::load_file(file)?,
      None => AutospecConfig::load(dir)?,
    };
    Ok(Self::new(config))
  }

  /// Replace the Koji session, e.g. with one for a hub given on the command line
  pub fn with_koji(mut self, session: KojiSession) -> Self {
    self.koji = session;
    self
  }

  pub fn rpm(&self) -> Rpm {
    Rpm::new(self.runner.clone(), self.config.tools.rpm.clone())
  }

  pub fn git(&self, repo_path: &Path) -> SystemGit {
    SystemGit::new(self.runner.clone(), self.config.tools.git.clone(), repo_path)
  }
}
