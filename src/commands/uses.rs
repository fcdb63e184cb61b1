//! Detect rpmautospec features in a spec file

use super::print_json;
use autospec::core::context::AutospecContext;
use autospec::core::error::AutospecResult;
use autospec::{AutospecChecks, specfile_uses_rpmautospec};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct UsesReport<'a> {
  specfile: &'a Path,
  checks: Checks,
  uses_rpmautospec: bool,
}

#[derive(Serialize)]
struct Checks {
  autorelease: bool,
  autochangelog: bool,
}

/// Print `true` if the spec file uses any of the requested features
pub fn run_uses(ctx: &AutospecContext, specfile: &Path, checks: AutospecChecks, json: bool) -> AutospecResult<()> {
  let uses = specfile_uses_rpmautospec(&ctx.rpm(), specfile, checks)?;

  if json {
    return print_json(&UsesReport {
      specfile,
      checks: Checks {
        autorelease: checks.autorelease,
        autochangelog: checks.autochangelog,
      },
      uses_rpmautospec: uses,
    });
  }

  println!("{}", uses);
  Ok(())
}
