//! Tests for the `version` command

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_missing_spec_is_soft_miss() -> Result<()> {
  let dir = tempfile::TempDir::new()?;
  let pkg = dir.path().join("ghost");
  std::fs::create_dir_all(&pkg)?;

  let output = run_autospec(&pkg, &["version", "--json"])?;
  assert_eq!(output.status.code(), Some(0));

  let result: serde_json::Value = serde_json::from_slice(&output.stdout)?;
  assert_eq!(result["status"], "missing_spec_file");
  assert!(result["detail"].as_str().unwrap().ends_with("ghost.spec"));
  Ok(())
}

#[test]
fn test_missing_spec_plain_output() -> Result<()> {
  let dir = tempfile::TempDir::new()?;

  let output = run_autospec(dir.path(), &["version", ".", "--name", "ghost"])?;
  assert!(output.status.success());
  assert!(output.stdout.is_empty());
  assert!(String::from_utf8_lossy(&output.stderr).contains("ghost.spec"));
  Ok(())
}

#[test]
fn test_version_from_spec() -> Result<()> {
  if !rpm_available("test_version_from_spec") {
    return Ok(());
  }

  let repo = TestRepo::new("hello", &spec_file("hello", "2.4.1", ""))?;
  let stdout = run_autospec_ok(&repo.path, &["version"])?;
  assert_eq!(stdout.trim(), "2.4.1");
  Ok(())
}

#[test]
fn test_version_with_epoch() -> Result<()> {
  if !rpm_available("test_version_with_epoch") {
    return Ok(());
  }

  let repo = TestRepo::new("hello", &spec_file("hello", "2.4.1", "Epoch: 3"))?;
  let path = repo.path.to_string_lossy().into_owned();

  let stdout = run_autospec_ok(&repo.path, &["version", &path, "--epoch"])?;
  assert_eq!(stdout.trim(), "3:2.4.1");

  let stdout = run_autospec_ok(&repo.path, &["version", &path])?;
  assert_eq!(stdout.trim(), "2.4.1");
  Ok(())
}
