//! External command execution
//!
//! All `git` and `rpm` invocations go through a [`CommandRunner`] so that
//! rpm-dependent logic can be exercised without rpm installed. The
//! [`run_command`] helper is the single place where failed processes are
//! logged and turned into [`ProcessError`]s.

use crate::core::error::{AutospecResult, ProcessError, ResultExt};
use std::io;
use std::path::Path;
use std::process::Command;
use tracing::{debug, error};

/// Raw result of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
  /// Exit code, `None` if terminated by a signal
  pub code: Option<i32>,
  pub stdout: Vec<u8>,
  pub stderr: Vec<u8>,
}

impl CapturedOutput {
  pub fn success(&self) -> bool {
    self.code == Some(0)
  }
}

/// Runs an argument vector to completion and captures its output
pub trait CommandRunner: Send + Sync {
  /// Run `argv[0]` with the remaining arguments, optionally in `cwd`.
  ///
  /// Only spawn failures are errors; a non-zero exit is reported through
  /// [`CapturedOutput::code`].
  fn run(&self, argv: &[String], cwd: Option<&Path>) -> io::Result<CapturedOutput>;
}

/// Runs commands on the host via `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
  fn run(&self, argv: &[String], cwd: Option<&Path>) -> io::Result<CapturedOutput> {
    let (program, args) = argv
      .split_first()
      .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty command line"))?;

    let mut cmd = Command::new(program);
    cmd.args(args);
    if let Some(dir) = cwd {
      cmd.current_dir(dir);
    }

    let output = cmd.output()?;
    Ok(CapturedOutput {
      code: output.status.code(),
      stdout: output.stdout,
      stderr: output.stderr,
    })
  }
}

/// Run a command and return its stdout, failing on a non-zero exit
///
/// Stdout is returned unmodified, trailing newline included. On failure the
/// command line, exit code and both streams are logged at error level before
/// the [`ProcessError`] is returned.
pub fn run_command(runner: &dyn CommandRunner, argv: &[String], cwd: Option<&Path>) -> AutospecResult<Vec<u8>> {
  let command_line = argv.join(" ");
  debug!(command = %command_line, cwd = ?cwd, "running command");

  let output = runner
    .run(argv, cwd)
    .with_context(|| format!("Failed to execute `{}`", command_line))?;

  if !output.success() {
    let code = output
      .code
      .map(|c| c.to_string())
      .unwrap_or_else(|| "none".to_string());
    error!("Command `{}` return code: `{}`", command_line, code);
    error!("stdout:\n-------\n{}", String::from_utf8_lossy(&output.stdout));
    error!("stderr:\n-------\n{}", String::from_utf8_lossy(&output.stderr));

    return Err(
      ProcessError {
        command: command_line,
        code: output.code,
        stdout: output.stdout,
        stderr: output.stderr,
      }
      .into(),
    );
  }

  Ok(output.stdout)
}

/// Build an owned argument vector from string slices
pub fn argv<I, S>(parts: I) -> Vec<String>
where
  I: IntoIterator<Item = S>,
  S: Into<String>,
{
  parts.into_iter().map(Into::into).collect()
}
