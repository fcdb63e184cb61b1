//! Tests for the `head` and `checkout` commands

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_head_prints_current_commit() -> Result<()> {
  let repo = TestRepo::new("hello", &spec_file("hello", "1.0", ""))?;
  let expected = repo.head()?;

  let stdout = run_autospec_ok(&repo.path, &["head"])?;
  assert_eq!(stdout.trim(), expected);
  Ok(())
}

#[test]
fn test_head_passes_log_options() -> Result<()> {
  let repo = TestRepo::new("hello", &spec_file("hello", "1.0", ""))?;
  let first = repo.head()?;
  repo.write_file("README", "hello\n")?;
  repo.commit("Add readme")?;

  // Latest commit touching the spec file is still the import
  let stdout = run_autospec_ok(&repo.path, &["head", ".", "--", "--", "hello.spec"])?;
  assert_eq!(stdout.trim(), first);
  Ok(())
}

#[test]
fn test_checkout_returns_new_head() -> Result<()> {
  let repo = TestRepo::new("hello", &spec_file("hello", "1.0", ""))?;
  let first = repo.head()?;
  repo.write_file("hello.spec", &spec_file("hello", "1.1", ""))?;
  let second = repo.commit("Update to 1.1")?;
  assert_ne!(first, second);

  let path = repo.path.to_string_lossy().into_owned();
  let stdout = run_autospec_ok(&repo.path, &["checkout", &first, "--path", &path])?;
  assert_eq!(stdout.trim(), first);
  assert_eq!(repo.head()?, first);

  // Checking out by hash yields exactly that hash
  let stdout = run_autospec_ok(&repo.path, &["checkout", &second])?;
  assert_eq!(stdout.trim(), second);
  Ok(())
}

#[test]
fn test_checkout_unknown_commit_fails() -> Result<()> {
  let repo = TestRepo::new("hello", &spec_file("hello", "1.0", ""))?;
  let before = repo.head()?;

  let output = run_autospec(&repo.path, &["checkout", "0000000000000000000000000000000000000000"])?;
  assert_eq!(output.status.code(), Some(2));

  let stderr = String::from_utf8_lossy(&output.stderr);
  assert!(stderr.contains("return code"), "stderr: {}", stderr);
  assert_eq!(repo.head()?, before);
  Ok(())
}

#[test]
fn test_head_outside_repository_fails() -> Result<()> {
  let dir = tempfile::TempDir::new()?;
  let output = run_autospec(dir.path(), &["head"])?;
  assert_eq!(output.status.code(), Some(2));
  Ok(())
}
