//! Tests for the `uses` command

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_autochangelog_detected_without_rpm() -> Result<()> {
  let repo = TestRepo::new("hello", &format!("{}%autochangelog\n", spec_file("hello", "1.0", "")))?;

  let stdout = run_autospec_ok(&repo.path, &["uses", "hello.spec", "--no-autorelease"])?;
  assert_eq!(stdout.trim(), "true");
  Ok(())
}

#[test]
fn test_plain_changelog_not_detected() -> Result<()> {
  let spec = format!(
    "{}* Mon Jan 01 2024 Test User <test@example.com> - 1.0-1\n- Mention %autochangelog in passing\n",
    spec_file("hello", "1.0", "")
  );
  let repo = TestRepo::new("hello", &spec)?;

  let stdout = run_autospec_ok(&repo.path, &["uses", "hello.spec", "--no-autorelease", "--json"])?;
  let report: serde_json::Value = serde_json::from_str(&stdout)?;
  assert_eq!(report["uses_rpmautospec"], false);
  assert_eq!(report["checks"]["autorelease"], false);
  assert_eq!(report["checks"]["autochangelog"], true);
  Ok(())
}

#[test]
fn test_no_checks_is_user_error() -> Result<()> {
  let repo = TestRepo::new("hello", &spec_file("hello", "1.0", ""))?;

  let output = run_autospec(&repo.path, &["uses", "hello.spec", "--no-autorelease", "--no-autochangelog"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(String::from_utf8_lossy(&output.stderr).contains("help:"));
  Ok(())
}

#[test]
fn test_missing_specfile_is_system_error() -> Result<()> {
  let dir = tempfile::TempDir::new()?;

  let output = run_autospec(dir.path(), &["uses", "nope.spec", "--no-autorelease"])?;
  assert_eq!(output.status.code(), Some(2));
  assert!(String::from_utf8_lossy(&output.stderr).contains("nope.spec"));
  Ok(())
}

#[test]
fn test_autorelease_detected_with_rpm() -> Result<()> {
  if !rpm_available("test_autorelease_detected_with_rpm") {
    return Ok(());
  }

  let with_macro = spec_file("hello", "1.0", "").replace("Release: 1", "Release: %autorelease");
  let repo = TestRepo::new("hello", &with_macro)?;
  let stdout = run_autospec_ok(&repo.path, &["uses", "hello.spec", "--no-autochangelog"])?;
  assert_eq!(stdout.trim(), "true");

  let repo = TestRepo::new("plain", &spec_file("plain", "1.0", ""))?;
  let stdout = run_autospec_ok(&repo.path, &["uses", "plain.spec", "--no-autochangelog"])?;
  assert_eq!(stdout.trim(), "false");
  Ok(())
}
