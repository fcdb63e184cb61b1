//! Parse and order EVR strings

use super::print_json;
use autospec::core::error::AutospecResult;
use autospec::{Evr, parse_evr};

/// Parse every argument, optionally sorting oldest to newest
///
/// Fails on the first string that does not parse.
pub fn run_evr(inputs: &[String], sort: bool, json: bool) -> AutospecResult<()> {
  let mut evrs = inputs.iter().map(|s| parse_evr(s)).collect::<AutospecResult<Vec<Evr>>>()?;

  if sort {
    evrs.sort();
  }

  if json {
    return print_json(&evrs);
  }

  println!("{:<8} {:<24} RELEASE", "EPOCH", "VERSION");
  for evr in &evrs {
    println!(
      "{:<8} {:<24} {}",
      evr.epoch,
      evr.version,
      evr.release.as_deref().unwrap_or("-")
    );
  }

  Ok(())
}
