//! Best-effort version query against a package's spec file

use super::{AUTORELEASE_MACRO, Rpm};
use crate::core::process::run_command;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Outcome of [`Rpm::current_version`]
///
/// Only [`SpecVersion::Version`] carries a result; the other variants are soft
/// misses that callers are expected to handle without treating them as errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum SpecVersion {
  /// Rendered version, with `epoch:` prefix when requested and set
  Version(String),
  /// `<name>.spec` does not exist in the directory
  MissingSpecFile(PathBuf),
  /// rpm failed or printed nothing usable
  ///
  /// An empty first line of rpm output lands here too, never as an empty
  /// [`SpecVersion::Version`].
  Inconclusive(String),
}

impl SpecVersion {
  /// Collapse to the version, dropping the reason for a miss
  pub fn version(self) -> Option<String> {
    match self {
      SpecVersion::Version(v) => Some(v),
      _ => None,
    }
  }

  pub fn is_found(&self) -> bool {
    matches!(self, SpecVersion::Version(_))
  }
}

/// Query format for the version, optionally with a conditional epoch prefix
fn version_query(with_epoch: bool) -> String {
  let mut query = String::new();
  if with_epoch {
    query.push_str("%|epoch?{%{epoch}:}:{}|");
  }
  query.push_str("%{version}\n");
  query
}

/// Base name of a package directory; `.` and `..` resolve against the filesystem
fn package_name(path: &Path) -> Option<String> {
  let base = match path.file_name() {
    Some(base) => base.to_os_string(),
    None => path.canonicalize().ok()?.file_name()?.to_os_string(),
  };
  Some(base.to_string_lossy().into_owned())
}

impl Rpm {
  /// Retrieve the version set in `<path>/<name>.spec`
  ///
  /// `name` defaults to the base name of `path`. `%autorelease` and
  /// `%autochangelog` are stubbed out so spec files using them still
  /// evaluate. Never fails: a missing spec file or a failed query is reported
  /// through the returned [`SpecVersion`].
  pub fn current_version(&self, path: &Path, name: Option<&str>, with_epoch: bool) -> SpecVersion {
    let name = match name.filter(|n| !n.is_empty()) {
      Some(name) => name.to_string(),
      None => match package_name(path) {
        Some(base) => base,
        None => return SpecVersion::Inconclusive(format!("cannot derive a package name from {}", path.display())),
      },
    };

    let spec_name = format!("{}.spec", name);
    let specfile = path.join(&spec_name);
    if !specfile.exists() {
      debug!(specfile = %specfile.display(), "spec file not found");
      return SpecVersion::MissingSpecFile(specfile);
    }

    let cmd = self.command([
      "--define".to_string(),
      "_invalid_encoding_terminates_build 0".to_string(),
      "--define".to_string(),
      format!("{} 1%{{?dist}}", AUTORELEASE_MACRO),
      "--define".to_string(),
      "autochangelog %nil".to_string(),
      "--qf".to_string(),
      version_query(with_epoch),
      "--specfile".to_string(),
      spec_name,
    ]);

    let output = match run_command(self.runner(), &cmd, Some(path)) {
      Ok(output) => output,
      Err(err) => {
        warn!(specfile = %specfile.display(), error = %err, "version query failed");
        return SpecVersion::Inconclusive(err.to_string());
      }
    };

    let stdout = match String::from_utf8(output) {
      Ok(stdout) => stdout,
      Err(err) => {
        warn!(specfile = %specfile.display(), error = %err, "version query produced invalid UTF-8");
        return SpecVersion::Inconclusive(format!("rpm output is not valid UTF-8: {}", err));
      }
    };

    let version = stdout.split('\n').next().unwrap_or_default().trim();
    if version.is_empty() {
      return SpecVersion::Inconclusive("rpm printed no version".to_string());
    }

    SpecVersion::Version(version.to_string())
  }
}
