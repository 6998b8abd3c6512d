//! Error types for envcheck with contextual messages and exit codes
//!
//! Only a missing suite crosses the runner boundary as a failure. Check
//! failures are folded into results; configuration and I/O errors belong to
//! the CLI layer that loads `envcheck.toml`.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::checks::Severity;

/// Process exit codes for the `envcheck` binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// Every check reported OK
  Ok = 0,
  /// Worst outcome was a warning
  Warning = 1,
  /// At least one check reported an error
  Error = 2,
  /// Usage or configuration problem (unknown suite, bad config)
  Usage = 3,
  /// System error (I/O)
  System = 4,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

impl From<Severity> for ExitCode {
  fn from(severity: Severity) -> Self {
    match severity {
      Severity::Ok => ExitCode::Ok,
      Severity::Warning => ExitCode::Warning,
      Severity::Error => ExitCode::Error,
    }
  }
}

/// Main error type for envcheck
#[derive(Debug)]
pub enum EnvCheckError {
  /// Suite lookup errors
  Suite(SuiteError),

  /// A check failed to execute
  Check(CheckError),

  /// Configuration errors
  Config(ConfigError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl EnvCheckError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    EnvCheckError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    EnvCheckError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Suite was never registered
  pub fn suite_not_found(name: impl Into<String>) -> Self {
    EnvCheckError::Suite(SuiteError::NotFound { name: name.into() })
  }

  /// A check could not produce an outcome
  pub fn check_failed(check: impl Into<String>, message: impl Into<String>) -> Self {
    EnvCheckError::Check(CheckError {
      check: check.into(),
      message: message.into(),
    })
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      EnvCheckError::Message { message, context, help } => EnvCheckError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      EnvCheckError::Io(err) => EnvCheckError::Message {
        message: format!("I/O error: {}", err),
        context: Some(ctx_str),
        help: None,
      },
      _ => self,
    }
  }

  /// Whether this is the "no such suite" failure
  pub fn is_suite_not_found(&self) -> bool {
    matches!(self, EnvCheckError::Suite(SuiteError::NotFound { .. }))
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      EnvCheckError::Suite(_) => ExitCode::Usage,
      EnvCheckError::Check(_) => ExitCode::Error,
      EnvCheckError::Config(_) => ExitCode::Usage,
      EnvCheckError::Io(_) => ExitCode::System,
      EnvCheckError::Message { .. } => ExitCode::Usage,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      EnvCheckError::Suite(e) => e.help_message(),
      EnvCheckError::Config(e) => e.help_message(),
      EnvCheckError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for EnvCheckError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      EnvCheckError::Suite(e) => write!(f, "{}", e),
      EnvCheckError::Check(e) => write!(f, "{}", e),
      EnvCheckError::Config(e) => write!(f, "{}", e),
      EnvCheckError::Io(e) => write!(f, "I/O error: {}", e),
      EnvCheckError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for EnvCheckError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      EnvCheckError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for EnvCheckError {
  fn from(err: io::Error) -> Self {
    EnvCheckError::Io(err)
  }
}

impl From<toml_edit::de::Error> for EnvCheckError {
  fn from(err: toml_edit::de::Error) -> Self {
    EnvCheckError::message(format!("TOML deserialization error: {}", err))
  }
}

impl From<serde_json::Error> for EnvCheckError {
  fn from(err: serde_json::Error) -> Self {
    EnvCheckError::message(format!("JSON error: {}", err))
  }
}

/// Suite lookup errors
#[derive(Debug)]
pub enum SuiteError {
  /// No check was ever registered under this suite name
  NotFound { name: String },
}

impl SuiteError {
  fn help_message(&self) -> Option<String> {
    match self {
      SuiteError::NotFound { .. } => Some("Run `envcheck list` to see the configured suites.".to_string()),
    }
  }
}

impl fmt::Display for SuiteError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SuiteError::NotFound { name } => write!(f, "Check suite '{}' is not registered", name),
    }
  }
}

/// A check raised an error instead of reporting an outcome
#[derive(Debug)]
pub struct CheckError {
  pub check: String,
  pub message: String,
}

impl fmt::Display for CheckError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.message)
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// envcheck.toml not found
  NotFound { search_root: PathBuf },

  /// Suite declared twice or with an empty name
  InvalidSuite { name: String, reason: String },

  /// Check parameters rejected
  InvalidCheck { suite: String, reason: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::NotFound { .. } => {
        Some("Create an envcheck.toml or pass its location with `--config <path>`.".to_string())
      }
      ConfigError::InvalidSuite { .. } => Some("Each [[suites]] entry needs a unique, non-empty name.".to_string()),
      ConfigError::InvalidCheck { .. } => None,
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::NotFound { search_root } => {
        write!(
          f,
          "No envcheck configuration found.\nExpected file: {}/envcheck.toml",
          search_root.display()
        )
      }
      ConfigError::InvalidSuite { name, reason } => {
        write!(f, "Invalid suite '{}': {}", name, reason)
      }
      ConfigError::InvalidCheck { suite, reason } => {
        write!(f, "Invalid check in suite '{}': {}", suite, reason)
      }
    }
  }
}

/// Result type alias for envcheck
pub type EnvCheckResult<T> = Result<T, EnvCheckError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> EnvCheckResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> EnvCheckResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<EnvCheckError>,
{
  fn context(self, ctx: impl Into<String>) -> EnvCheckResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> EnvCheckResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &EnvCheckError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
