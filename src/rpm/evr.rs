//! Epoch:Version-Release parsing and ordering

use crate::core::error::{AutospecResult, ParseError};
use crate::rpm::vercmp::label_compare;
use regex::Regex;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// A parsed `[epoch:]version[-release]` triple
///
/// Ordering follows rpm's label compare: epoch numerically, then version,
/// then release (a missing release sorts first).
#[derive(Debug, Clone, Serialize)]
pub struct Evr {
  pub epoch: u64,
  pub version: String,
  pub release: Option<String>,
}

fn evr_regex() -> &'static Regex {
  static EVR_REGEX: OnceLock<Regex> = OnceLock::new();
  EVR_REGEX.get_or_init(|| {
    Regex::new(r"^(?:(?P<epoch>[0-9]+):)?(?P<version>[^-:]+)(?:-(?P<release>[^-:]+))?$").expect("Invalid EVR regex")
  })
}

/// Parse an EVR string
///
/// ```
/// let evr = autospec::parse_evr("2:1.4-3.fc40").unwrap();
/// assert_eq!((evr.epoch, evr.version.as_str(), evr.release.as_deref()), (2, "1.4", Some("3.fc40")));
/// ```
pub fn parse_evr(evr_str: &str) -> AutospecResult<Evr> {
  let invalid = || ParseError::InvalidEvr {
    input: evr_str.to_string(),
  };

  let caps = evr_regex().captures(evr_str).ok_or_else(invalid)?;

  let epoch = match caps.name("epoch") {
    Some(m) => m.as_str().parse::<u64>().map_err(|_| invalid())?,
    None => 0,
  };

  Ok(Evr {
    epoch,
    version: caps["version"].to_string(),
    release: caps.name("release").map(|m| m.as_str().to_string()),
  })
}

impl Evr {
  pub fn new(epoch: u64, version: impl Into<String>, release: Option<&str>) -> Self {
    Self {
      epoch,
      version: version.into(),
      release: release.map(str::to_string),
    }
  }

  /// Label tuple handed to the comparison primitive
  fn label(&self) -> (u64, &str, Option<&str>) {
    (self.epoch, &self.version, self.release.as_deref())
  }
}

impl FromStr for Evr {
  type Err = crate::core::error::AutospecError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    parse_evr(s)
  }
}

impl fmt::Display for Evr {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.epoch != 0 {
      write!(f, "{}:", self.epoch)?;
    }
    write!(f, "{}", self.version)?;
    if let Some(release) = &self.release {
      write!(f, "-{}", release)?;
    }
    Ok(())
  }
}

impl Ord for Evr {
  fn cmp(&self, other: &Self) -> Ordering {
    label_compare(self.label(), other.label())
  }
}

impl PartialEq for Evr {
  fn eq(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Equal
  }
}

impl Eq for Evr {}

impl PartialOrd for Evr {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}
