//! Read or move the current commit of a package repository

use autospec::core::context::AutospecContext;
use autospec::core::error::AutospecResult;
use std::path::Path;

/// Print the current commit hash, filtered by extra `git log` options
pub fn run_head(ctx: &AutospecContext, path: &Path, log_options: &[String]) -> AutospecResult<()> {
  let sha = ctx.git(path).head_commit(log_options)?;
  println!("{}", sha);
  Ok(())
}

/// Check out `commit` and print the resulting HEAD
pub fn run_checkout(ctx: &AutospecContext, path: &Path, commit: &str, options: &[String]) -> AutospecResult<()> {
  let sha = ctx.git(path).checkout_commit(commit, options)?;
  println!("{}", sha);
  Ok(())
}
