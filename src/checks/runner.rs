//! Check runner for executing suites
//!
//! A run walks the suite's checks in registration order, converts failed or
//! panicking checks into `Error` results, rolls everything up into the worst
//! severity and emits at most one log record for the whole run.

use super::logger::{LogLevel, LogRecord, ResultLogger, TracingLogger};
use super::registry::CheckRegistry;
use super::trait_def::{Check, CheckResult, Outcome, Severity};
use crate::core::error::{EnvCheckError, EnvCheckResult};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Which overall severities produce a log record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingPolicy {
  #[serde(default)]
  pub log_on_warning: bool,
  #[serde(default)]
  pub log_on_error: bool,
}

impl LoggingPolicy {
  pub fn new(log_on_warning: bool, log_on_error: bool) -> Self {
    Self {
      log_on_warning,
      log_on_error,
    }
  }

  /// Log level for a run with this overall severity, if it should be logged
  pub fn level_for(&self, overall: Severity) -> Option<LogLevel> {
    match overall {
      Severity::Error if self.log_on_error => LogLevel::for_severity(overall),
      Severity::Warning if self.log_on_warning => LogLevel::for_severity(overall),
      _ => None,
    }
  }
}

/// Outcome of running every check in a suite
#[derive(Debug, Clone, Serialize)]
pub struct SuiteResult {
  suite_name: String,
  results: Vec<CheckResult>,
  overall_severity: Severity,
  finished_at: DateTime<Utc>,
}

impl SuiteResult {
  fn new(suite_name: impl Into<String>, results: Vec<CheckResult>) -> Self {
    let overall_severity = Severity::worst(results.iter().map(CheckResult::severity));
    Self {
      suite_name: suite_name.into(),
      results,
      overall_severity,
      finished_at: Utc::now(),
    }
  }

  pub fn suite_name(&self) -> &str {
    &self.suite_name
  }

  /// Per-check results in registration order
  pub fn results(&self) -> &[CheckResult] {
    &self.results
  }

  pub fn overall_severity(&self) -> Severity {
    self.overall_severity
  }

  pub fn finished_at(&self) -> DateTime<Utc> {
    self.finished_at
  }

  /// A suite passes unless some check reported an error
  pub fn should_pass(&self) -> bool {
    self.overall_severity <= Severity::Warning
  }

  /// Messages of the results with exactly `severity`
  pub fn messages_at(&self, severity: Severity) -> Vec<String> {
    self
      .results
      .iter()
      .filter(|r| r.severity() == severity)
      .map(|r| r.message().to_string())
      .collect()
  }
}

/// Runs registered suites and reports roll-ups to a [`ResultLogger`]
pub struct CheckRunner {
  registry: Arc<CheckRegistry>,
  logger: Arc<dyn ResultLogger>,
}

impl CheckRunner {
  pub fn new(registry: Arc<CheckRegistry>, logger: Arc<dyn ResultLogger>) -> Self {
    Self { registry, logger }
  }

  /// Runner that logs through `tracing`
  pub fn with_tracing(registry: Arc<CheckRegistry>) -> Self {
    Self::new(registry, Arc::new(TracingLogger))
  }

  /// Run every check in `suite`
  ///
  /// Fails only when the suite was never registered.
  pub fn run(&self, suite: &str, policy: &LoggingPolicy) -> EnvCheckResult<SuiteResult> {
    let checks = self.registry.suites_for(suite)?;

    let results: Vec<CheckResult> = checks.iter().map(|check| execute(suite, check.as_ref())).collect();
    let result = SuiteResult::new(suite, results);

    tracing::debug!(
      suite,
      checks = result.results().len(),
      overall = %result.overall_severity(),
      "suite run finished"
    );

    if let Some(level) = policy.level_for(result.overall_severity()) {
      self.logger.log(&LogRecord {
        level,
        suite: suite.to_string(),
        messages: result.messages_at(result.overall_severity()),
      });
    }

    Ok(result)
  }

  /// Run several suites in parallel, each one sequentially
  ///
  /// Results follow the order of `suites`. Every name is resolved before any
  /// check executes, so an unknown suite aborts the whole batch up front.
  pub fn run_many<S>(&self, suites: &[S], policy: &LoggingPolicy) -> EnvCheckResult<Vec<SuiteResult>>
  where
    S: AsRef<str> + Sync,
  {
    if let Some(missing) = suites.iter().find(|s| !self.registry.contains(s.as_ref())) {
      return Err(EnvCheckError::suite_not_found(missing.as_ref()));
    }

    suites.par_iter().map(|suite| self.run(suite.as_ref(), policy)).collect()
  }
}

fn execute(suite: &str, check: &dyn Check) -> CheckResult {
  let name = check.name().to_string();

  let outcome = match panic::catch_unwind(AssertUnwindSafe(|| check.run())) {
    Ok(Ok(outcome)) => outcome,
    Ok(Err(err)) => {
      tracing::debug!(suite, check = %name, error = %err, "check failed to run");
      Outcome::error(err.to_string())
    }
    Err(payload) => {
      let message = panic_message(payload.as_ref());
      tracing::debug!(suite, check = %name, panic = %message, "check panicked");
      Outcome::error(message)
    }
  };

  tracing::debug!(suite, check = %name, severity = %outcome.severity, "check finished");
  CheckResult::new(name, outcome)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
  if let Some(s) = payload.downcast_ref::<&str>() {
    s.to_string()
  } else if let Some(s) = payload.downcast_ref::<String>() {
    s.clone()
  } else {
    "check panicked".to_string()
  }
}
