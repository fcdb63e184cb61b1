//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A dist-git style package checkout with history
pub struct TestRepo {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestRepo {
  /// Create a repository with one commit containing `<name>.spec`
  pub fn new(name: &str, spec: &str) -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().join(name);
    std::fs::create_dir_all(&path)?;

    git(&path, &["init", "--initial-branch=rawhide"])?;
    git(&path, &["config", "user.name", "Test User"])?;
    git(&path, &["config", "user.email", "test@example.com"])?;

    let repo = Self { _root: root, path };
    repo.write_file(&format!("{}.spec", name), spec)?;
    repo.commit("Initial import")?;
    Ok(repo)
  }

  pub fn write_file(&self, file: &str, content: &str) -> Result<()> {
    std::fs::write(self.path.join(file), content)?;
    Ok(())
  }

  /// Commit everything and return the new HEAD
  pub fn commit(&self, message: &str) -> Result<String> {
    git(&self.path, &["add", "."])?;
    git(&self.path, &["commit", "-m", message])?;
    self.head()
  }

  pub fn head(&self) -> Result<String> {
    let output = git(&self.path, &["rev-parse", "HEAD"])?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
  }
}

/// Minimal spec file; `extra` lands after the header
pub fn spec_file(name: &str, version: &str, extra: &str) -> String {
  format!(
    "Name: {name}\nVersion: {version}\nRelease: 1\nSummary: Test package\nLicense: MIT\n{extra}\n\n%description\nTest package.\n\n%changelog\n"
  )
}

/// Run git command in a directory
pub fn git(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = Command::new("git")
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run git command")?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    anyhow::bail!("Git command failed: git {}\n{}", args.join(" "), stderr);
  }

  Ok(output)
}

/// Run the autospec CLI without checking its exit status
pub fn run_autospec(cwd: &Path, args: &[&str]) -> Result<Output> {
  let autospec_bin = env!("CARGO_BIN_EXE_autospec");

  Command::new(autospec_bin)
    .current_dir(cwd)
    .env_remove("AUTOSPEC_LOG")
    .args(args)
    .output()
    .context("Failed to run autospec")
}

/// Run the autospec CLI and require success
pub fn run_autospec_ok(cwd: &Path, args: &[&str]) -> Result<String> {
  let output = run_autospec(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "autospec command failed: autospec {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Whether `rpm` can be run; logs a skip line for `test` when it cannot
pub fn rpm_available(test: &str) -> bool {
  let available = Command::new("rpm")
    .arg("--version")
    .output()
    .map(|o| o.status.success())
    .unwrap_or(false);

  if !available {
    eprintln!("skipping {}: rpm is not installed", test);
  }
  available
}
