//! Detect whether a spec file uses `%autorelease` or `%autochangelog`

use super::{AUTORELEASE_MACRO, AUTORELEASE_SENTINEL, Rpm};
use crate::core::error::{AutospecResult, ConfigError, ResultExt};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;
use tracing::debug;

fn autochangelog_regex() -> &'static Regex {
  static AUTOCHANGELOG_REGEX: OnceLock<Regex> = OnceLock::new();
  AUTOCHANGELOG_REGEX
    .get_or_init(|| Regex::new(r"^\s*%(?:autochangelog|\{\??autochangelog\})\s*$").expect("Invalid autochangelog regex"))
}

/// Which detectors [`specfile_uses_rpmautospec`] should run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutospecChecks {
  pub autorelease: bool,
  pub autochangelog: bool,
}

impl Default for AutospecChecks {
  fn default() -> Self {
    Self {
      autorelease: true,
      autochangelog: true,
    }
  }
}

impl Rpm {
  /// Check whether `%autorelease` is in effect for the spec file
  ///
  /// Renders `%{release}` with the macro defined to a sentinel and compares
  /// the first output line to it exactly. The exit status is not checked, so
  /// a spec that fails to parse for unrelated reasons also reports `false`.
  pub fn check_autorelease_presence(&self, specfile: &Path) -> AutospecResult<bool> {
    let cmd = self.command([
      "--define".to_string(),
      format!("{} {}", AUTORELEASE_MACRO, AUTORELEASE_SENTINEL),
      "-q".to_string(),
      "--queryformat".to_string(),
      "%{release}\n".to_string(),
      "--specfile".to_string(),
      specfile.to_string_lossy().into_owned(),
    ]);

    debug!(cmd = ?cmd, "checking for autorelease");
    let output = self
      .runner()
      .run(&cmd, None)
      .with_context(|| format!("Failed to execute `{}`", self.program()))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let release = stdout.split('\n').next().unwrap_or_default();
    Ok(release == AUTORELEASE_SENTINEL)
  }
}

/// Check whether a line of the spec file consists of the `%autochangelog` macro
///
/// Accepts `%autochangelog`, `%{autochangelog}` and `%{?autochangelog}` with
/// surrounding whitespace. Lines are read lazily and the scan stops at the
/// first match; invocations spread over several lines are not recognised.
pub fn check_autochangelog_presence(specfile: &Path) -> AutospecResult<bool> {
  let file = File::open(specfile).with_context(|| format!("Failed to open {}", specfile.display()))?;
  let re = autochangelog_regex();

  for line in BufReader::new(file).split(b'\n') {
    let line = line.with_context(|| format!("Failed to read {}", specfile.display()))?;
    if re.is_match(&String::from_utf8_lossy(&line)) {
      return Ok(true);
    }
  }

  Ok(false)
}

/// Check whether a spec file uses rpmautospec features
///
/// Runs only the requested detectors. Requesting neither is a configuration
/// error.
pub fn specfile_uses_rpmautospec(rpm: &Rpm, specfile: &Path, checks: AutospecChecks) -> AutospecResult<bool> {
  match (checks.autorelease, checks.autochangelog) {
    (true, true) => Ok(rpm.check_autorelease_presence(specfile)? || check_autochangelog_presence(specfile)?),
    (true, false) => rpm.check_autorelease_presence(specfile),
    (false, true) => check_autochangelog_presence(specfile),
    (false, false) => Err(ConfigError::NoChecksRequested.into()),
  }
}
