//! Error types for autospec with contextual messages and exit codes
//!
//! Errors are grouped by category so the CLI can pick an exit code and a
//! help message. Library callers match on the category they care about
//! (most commonly [`AutospecError::Process`]).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for autospec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config, invalid args, unparsable input)
  User = 1,
  /// System error (git, rpm, I/O)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for autospec
#[derive(Debug, Error)]
pub enum AutospecError {
  /// An external command exited unsuccessfully
  #[error(transparent)]
  Process(#[from] ProcessError),

  /// Malformed input
  #[error(transparent)]
  Parse(#[from] ParseError),

  /// Configuration errors
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// I/O errors, with what was being attempted when one was recorded
  #[error("{}", io_label(.context, .source))]
  Io {
    #[source]
    source: io::Error,
    context: Option<String>,
  },

  /// Generic error with message and optional context
  #[error("{message}{}", context_suffix(.context))]
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

fn io_label(context: &Option<String>, source: &io::Error) -> String {
  match context {
    Some(context) => format!("{}\n{}", context, source),
    None => format!("I/O error: {}", source),
  }
}

impl From<io::Error> for AutospecError {
  fn from(source: io::Error) -> Self {
    AutospecError::Io { source, context: None }
  }
}

fn context_suffix(context: &Option<String>) -> String {
  context.as_ref().map(|c| format!("\n{}", c)).unwrap_or_default()
}

impl AutospecError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    AutospecError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    AutospecError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Add context to an existing error
  ///
  /// Categorised errors keep their type (callers match on them). Messages
  /// and I/O errors record the context, newest first.
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      AutospecError::Message { message, context, help } => AutospecError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      AutospecError::Io { source, context } => AutospecError::Io {
        source,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      AutospecError::Process(_) => ExitCode::System,
      AutospecError::Parse(_) => ExitCode::User,
      AutospecError::Config(_) => ExitCode::User,
      AutospecError::Io { .. } => ExitCode::System,
      AutospecError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      AutospecError::Process(e) => e.help_message(),
      AutospecError::Parse(e) => e.help_message(),
      AutospecError::Config(e) => e.help_message(),
      AutospecError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

/// An external command exited with a non-zero status
#[derive(Debug, Error)]
#[error("Command `{command}` failed with {}", exit_status_label(.code))]
pub struct ProcessError {
  /// Space-joined command line
  pub command: String,
  /// Exit code, `None` if the process was killed by a signal
  pub code: Option<i32>,
  /// Captured standard output
  pub stdout: Vec<u8>,
  /// Captured standard error
  pub stderr: Vec<u8>,
}

fn exit_status_label(code: &Option<i32>) -> String {
  match code {
    Some(code) => format!("exit code {}", code),
    None => "no exit code (terminated by signal)".to_string(),
  }
}

impl ProcessError {
  /// Standard error decoded lossily, for display
  pub fn stderr_lossy(&self) -> String {
    String::from_utf8_lossy(&self.stderr).into_owned()
  }

  fn help_message(&self) -> Option<String> {
    let stderr = self.stderr_lossy();
    if stderr.contains("not a git repository") {
      Some("Run the command inside a git checkout of the package.".to_string())
    } else if stderr.contains("did not match any file(s) known to git") || stderr.contains("unknown revision") {
      Some("Check the commit or ref name with `git log --oneline`.".to_string())
    } else if stderr.contains("would be overwritten by checkout") {
      Some("Commit or stash local changes before checking out another commit.".to_string())
    } else if !stderr.trim().is_empty() {
      Some(format!("stderr:\n{}", stderr.trim_end()))
    } else {
      None
    }
  }
}

/// Input that could not be parsed
#[derive(Debug, Error)]
pub enum ParseError {
  /// Not of the form `[epoch:]version[-release]`
  #[error("Invalid EVR string: {input:?}")]
  InvalidEvr { input: String },
}

impl ParseError {
  fn help_message(&self) -> Option<String> {
    match self {
      ParseError::InvalidEvr { .. } => Some(
        "Expected `[epoch:]version[-release]`, e.g. `1:2.3-4.fc40`; version and release must not contain `-` or `:`."
          .to_string(),
      ),
    }
  }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
  /// Neither autorelease nor autochangelog detection was requested
  #[error("One of check_autorelease and check_autochangelog must be set")]
  NoChecksRequested,

  /// Explicitly requested config file does not exist
  #[error("Config file not found: {}", .path.display())]
  NotFound { path: PathBuf },

  /// Field present but unusable
  #[error("Invalid value for `{field}` in config: {reason}")]
  InvalidValue { field: String, reason: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::NoChecksRequested => {
        Some("Drop one of --no-autorelease / --no-autochangelog.".to_string())
      }
      ConfigError::NotFound { .. } => Some(
        "Omit --config to use autospec.toml, .autospec.toml or .config/autospec.toml if present.".to_string(),
      ),
      ConfigError::InvalidValue { .. } => None,
    }
  }
}

/// Result type alias for autospec
pub type AutospecResult<T> = Result<T, AutospecError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> AutospecResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> AutospecResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<AutospecError>,
{
  fn context(self, ctx: impl Into<String>) -> AutospecResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> AutospecResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

impl From<toml_edit::de::Error> for AutospecError {
  fn from(err: toml_edit::de::Error) -> Self {
    AutospecError::message(format!("TOML deserialization error: {}", err))
  }
}

impl From<serde_json::Error> for AutospecError {
  fn from(err: serde_json::Error) -> Self {
    AutospecError::message(format!("JSON error: {}", err))
  }
}

impl From<std::string::FromUtf8Error> for AutospecError {
  fn from(err: std::string::FromUtf8Error) -> Self {
    AutospecError::message(format!("UTF-8 conversion error: {}", err))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &AutospecError) {
  eprintln!("\nerror: {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("help: {}\n", help);
  }
}
