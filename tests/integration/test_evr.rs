//! Tests for the `evr` command

use crate::helpers::*;
use anyhow::Result;

#[test]
fn test_evr_sort_uses_rpm_ordering() -> Result<()> {
  let dir = tempfile::TempDir::new()?;
  let stdout = run_autospec_ok(dir.path(), &["evr", "--sort", "--json", "1:0.9-1", "1.10-1", "1.9-2", "1.0~rc1-1"])?;

  let evrs: serde_json::Value = serde_json::from_str(&stdout)?;
  let versions: Vec<&str> = evrs
    .as_array()
    .unwrap()
    .iter()
    .map(|e| e["version"].as_str().unwrap())
    .collect();

  // Epoch beats everything, tilde sorts before the release it precedes
  assert_eq!(versions, vec!["1.0~rc1", "1.9", "1.10", "0.9"]);
  assert_eq!(evrs[3]["epoch"], 1);
  Ok(())
}

#[test]
fn test_evr_json_without_release() -> Result<()> {
  let dir = tempfile::TempDir::new()?;
  let stdout = run_autospec_ok(dir.path(), &["evr", "--json", "2.4.1"])?;

  let evrs: serde_json::Value = serde_json::from_str(&stdout)?;
  assert_eq!(evrs[0]["epoch"], 0);
  assert_eq!(evrs[0]["version"], "2.4.1");
  assert!(evrs[0]["release"].is_null());
  Ok(())
}

#[test]
fn test_evr_table_output() -> Result<()> {
  let dir = tempfile::TempDir::new()?;
  let stdout = run_autospec_ok(dir.path(), &["evr", "3:1.2-4.fc40"])?;

  let row = stdout.lines().nth(1).unwrap();
  let fields: Vec<&str> = row.split_whitespace().collect();
  assert_eq!(fields, vec!["3", "1.2", "4.fc40"]);
  Ok(())
}

#[test]
fn test_evr_invalid_is_user_error() -> Result<()> {
  let dir = tempfile::TempDir::new()?;
  let output = run_autospec(dir.path(), &["evr", "1.0-1-1"])?;

  assert_eq!(output.status.code(), Some(1));
  assert!(String::from_utf8_lossy(&output.stderr).contains("1.0-1-1"));
  Ok(())
}
