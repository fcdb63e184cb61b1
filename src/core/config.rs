use crate::core::error::{AutospecResult, ConfigError, ResultExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default Koji hub used when no configuration overrides it
pub const DEFAULT_KOJI_HUB: &str = "https://koji.fedoraproject.org/kojihub";

/// Configuration for autospec
/// Searched in order: autospec.toml, .autospec.toml, .config/autospec.toml
///
/// Every section is optional; a missing file means defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutospecConfig {
  #[serde(default)]
  pub tools: ToolsConfig,
  #[serde(default)]
  pub koji: KojiConfig,
}

/// External executables, looked up on PATH unless given as paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolsConfig {
  #[serde(default = "default_rpm")]
  pub rpm: String,
  #[serde(default = "default_git")]
  pub git: String,
}

fn default_rpm() -> String {
  "rpm".to_string()
}

fn default_git() -> String {
  "git".to_string()
}

impl Default for ToolsConfig {
  fn default() -> Self {
    Self {
      rpm: default_rpm(),
      git: default_git(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KojiConfig {
  /// Hub endpoint handed to `koji_init`
  #[serde(default = "default_hub_url")]
  pub hub_url: String,
}

fn default_hub_url() -> String {
  DEFAULT_KOJI_HUB.to_string()
}

impl Default for KojiConfig {
  fn default() -> Self {
    Self {
      hub_url: default_hub_url(),
    }
  }
}

impl AutospecConfig {
  /// Find config file in search order: autospec.toml, .autospec.toml, .config/autospec.toml
  pub fn find_config_path(path: &Path) -> Option<PathBuf> {
    let candidates = [
      path.join("autospec.toml"),
      path.join(".autospec.toml"),
      path.join(".config").join("autospec.toml"),
    ];

    candidates.into_iter().find(|p| p.exists())
  }

  /// Load config from the first file found under `path`, or defaults
  pub fn load(path: &Path) -> AutospecResult<Self> {
    match Self::find_config_path(path) {
      Some(config_path) => Self::load_file(&config_path),
      None => Ok(Self::default()),
    }
  }

  /// Load config from an explicit file, which must exist
  pub fn load_file(config_path: &Path) -> AutospecResult<Self> {
    if !config_path.exists() {
      return Err(
        ConfigError::NotFound {
          path: config_path.to_path_buf(),
        }
        .into(),
      );
    }

    let content = fs::read_to_string(config_path)
      .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
    let config: AutospecConfig = toml_edit::de::from_str(&content)
      .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

    config.validate()?;
    Ok(config)
  }

  /// Reject values that would only fail later at spawn time
  pub fn validate(&self) -> AutospecResult<()> {
    for (field, value) in [("tools.rpm", &self.tools.rpm), ("tools.git", &self.tools.git)] {
      if value.trim().is_empty() {
        return Err(
          ConfigError::InvalidValue {
            field: field.to_string(),
            reason: "executable name must not be empty".to_string(),
          }
          .into(),
        );
      }
    }

    if self.koji.hub_url.trim().is_empty() {
      return Err(
        ConfigError::InvalidValue {
          field: "koji.hub_url".to_string(),
          reason: "hub URL must not be empty".to_string(),
        }
        .into(),
      );
    }

    Ok(())
  }
}
