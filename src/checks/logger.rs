//! Log sinks for suite roll-up records
//!
//! The runner emits at most one [`LogRecord`] per run. Where it ends up is up to
//! the [`ResultLogger`] handed to the runner; the default forwards to `tracing`.

use super::trait_def::Severity;
use serde::Serialize;
use std::fmt;

/// Level of a roll-up record, mapped from the run's overall severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  Warning,
  Error,
}

impl LogLevel {
  /// `None` for `Ok`: successful runs are never logged
  pub fn for_severity(severity: Severity) -> Option<LogLevel> {
    match severity {
      Severity::Ok => None,
      Severity::Warning => Some(LogLevel::Warning),
      Severity::Error => Some(LogLevel::Error),
    }
  }
}

impl fmt::Display for LogLevel {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      LogLevel::Warning => write!(f, "warning"),
      LogLevel::Error => write!(f, "error"),
    }
  }
}

/// One roll-up record for a suite run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
  pub level: LogLevel,
  pub suite: String,
  /// Messages of the checks that reported exactly this level
  pub messages: Vec<String>,
}

/// External sink for roll-up records
pub trait ResultLogger: Send + Sync {
  fn log(&self, record: &LogRecord);
}

/// Forwards records to the active `tracing` subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl ResultLogger for TracingLogger {
  fn log(&self, record: &LogRecord) {
    match record.level {
      LogLevel::Warning => tracing::warn!(
        suite = %record.suite,
        messages = ?record.messages,
        "environment check suite '{}' reported warnings",
        record.suite
      ),
      LogLevel::Error => tracing::error!(
        suite = %record.suite,
        messages = ?record.messages,
        "environment check suite '{}' reported errors",
        record.suite
      ),
    }
  }
}
