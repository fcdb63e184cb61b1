//! Health check for the tools autospec shells out to

use super::print_json;
use autospec::core::context::AutospecContext;
use autospec::core::error::{AutospecError, AutospecResult};
use autospec::core::process::argv;
use autospec::run_command;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ToolCheck {
  tool: &'static str,
  program: String,
  available: bool,
  /// First line of `<program> --version`, or the failure
  detail: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
  tools: Vec<ToolCheck>,
  koji_hub: String,
}

fn check_tool(ctx: &AutospecContext, tool: &'static str, program: &str) -> ToolCheck {
  match run_command(ctx.runner.as_ref(), &argv([program, "--version"]), None) {
    Ok(stdout) => ToolCheck {
      tool,
      program: program.to_string(),
      available: true,
      detail: String::from_utf8_lossy(&stdout).lines().next().unwrap_or_default().trim().to_string(),
    },
    Err(err) => ToolCheck {
      tool,
      program: program.to_string(),
      available: false,
      detail: err.to_string().lines().next().unwrap_or_default().to_string(),
    },
  }
}

/// Check that git and rpm run and show the Koji hub in use
///
/// Fails if any tool is unavailable.
pub fn run_doctor(ctx: &AutospecContext, json: bool) -> AutospecResult<()> {
  let report = DoctorReport {
    tools: vec![
      check_tool(ctx, "git", &ctx.config.tools.git),
      check_tool(ctx, "rpm", &ctx.config.tools.rpm),
    ],
    koji_hub: ctx.koji.hub_url().to_string(),
  };

  if json {
    print_json(&report)?;
  } else {
    for check in &report.tools {
      let status = if check.available { "ok" } else { "missing" };
      println!("{:<4} {:<8} {} ({})", check.tool, status, check.detail, check.program);
    }
    println!("koji hub: {}", report.koji_hub);
  }

  let missing: Vec<&str> = report.tools.iter().filter(|c| !c.available).map(|c| c.tool).collect();
  if !missing.is_empty() {
    return Err(AutospecError::with_help(
      format!("Required tools unavailable: {}", missing.join(", ")),
      "Install git and rpm (rpm-build provides spec file parsing) or point [tools] in autospec.toml at them.",
    ));
  }

  Ok(())
}
