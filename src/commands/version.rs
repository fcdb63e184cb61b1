//! Render the version of a package's spec file

use super::print_json;
use autospec::SpecVersion;
use autospec::core::context::AutospecContext;
use autospec::core::error::AutospecResult;
use std::path::Path;

/// Print the spec version; soft misses print a note instead and still succeed
pub fn run_version(
  ctx: &AutospecContext,
  path: &Path,
  name: Option<&str>,
  with_epoch: bool,
  json: bool,
) -> AutospecResult<()> {
  let result = ctx.rpm().current_version(path, name, with_epoch);

  if json {
    return print_json(&result);
  }

  match result {
    SpecVersion::Version(version) => println!("{}", version),
    SpecVersion::MissingSpecFile(specfile) => eprintln!("No spec file at {}", specfile.display()),
    SpecVersion::Inconclusive(reason) => eprintln!("Could not determine version: {}", reason),
  }

  Ok(())
}
