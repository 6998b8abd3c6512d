//! Check trait abstraction for environment health checks
//!
//! Every check implements [`Check`] and reports an [`Outcome`]: a severity plus
//! a human-readable message. The runner turns outcomes into [`CheckResult`]s
//! tagged with the check's name.
//!
//! Built-in checks include:
//! - File writeability (directories and files)
//! - File age (stale backups, heartbeat files)
//! - Environment variables (present, optionally with an expected value)

use crate::core::error::EnvCheckResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity level reported by a check
///
/// Ordered `Ok < Warning < Error`; the overall severity of a suite run is the
/// maximum over its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  /// Check passed
  #[default]
  Ok,
  /// Degraded, but not failing
  Warning,
  /// Check failed
  Error,
}

impl Severity {
  /// Worst severity in `iter`, `Ok` when empty
  pub fn worst<I>(iter: I) -> Severity
  where
    I: IntoIterator<Item = Severity>,
  {
    iter.into_iter().max().unwrap_or(Severity::Ok)
  }
}

impl fmt::Display for Severity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Severity::Ok => write!(f, "OK"),
      Severity::Warning => write!(f, "WARNING"),
      Severity::Error => write!(f, "ERROR"),
    }
  }
}

/// What a single check execution reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
  pub severity: Severity,
  pub message: String,
}

impl Outcome {
  pub fn new(severity: Severity, message: impl Into<String>) -> Self {
    Self {
      severity,
      message: message.into(),
    }
  }

  /// Create a passing outcome
  pub fn ok(message: impl Into<String>) -> Self {
    Self::new(Severity::Ok, message)
  }

  /// Create a warning outcome
  pub fn warning(message: impl Into<String>) -> Self {
    Self::new(Severity::Warning, message)
  }

  /// Create an error outcome
  pub fn error(message: impl Into<String>) -> Self {
    Self::new(Severity::Error, message)
  }
}

/// Result of running one check inside a suite
///
/// Built by the runner; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
  check_name: String,
  severity: Severity,
  message: String,
}

impl CheckResult {
  pub fn new(check_name: impl Into<String>, outcome: Outcome) -> Self {
    Self {
      check_name: check_name.into(),
      severity: outcome.severity,
      message: outcome.message,
    }
  }

  /// Name of the check that ran
  pub fn check_name(&self) -> &str {
    &self.check_name
  }

  pub fn severity(&self) -> Severity {
    self.severity
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  /// Whether the check reported OK
  pub fn passed(&self) -> bool {
    self.severity == Severity::Ok
  }
}

/// Environment check trait
///
/// Each check implements this trait to provide its verification logic. The
/// runner calls [`Check::run`] once per suite run, in registration order.
///
/// # Example
///
/// ```rust
/// use envcheck::checks::{Check, Outcome};
/// use envcheck::core::error::EnvCheckResult;
///
/// struct QueueDepth;
///
/// impl Check for QueueDepth {
///   fn name(&self) -> &str {
///     "queue-depth"
///   }
///
///   fn run(&self) -> EnvCheckResult<Outcome> {
///     let depth = 12;
///     if depth > 100 {
///       Ok(Outcome::warning(format!("{} jobs waiting", depth)))
///     } else {
///       Ok(Outcome::ok(format!("{} jobs waiting", depth)))
///     }
///   }
/// }
/// ```
pub trait Check: Send + Sync {
  /// Name reported in results (kebab-case by convention)
  fn name(&self) -> &str;

  /// Human-readable description of what this check verifies
  fn description(&self) -> &str {
    ""
  }

  /// Run the check
  ///
  /// Returning `Err` means the check could not be evaluated at all; the runner
  /// records it as an `Error` result and carries on with the remaining checks.
  fn run(&self) -> EnvCheckResult<Outcome>;
}
