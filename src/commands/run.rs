//! `envcheck run` - Run one or more suites from envcheck.toml
//!
//! Exit status follows the worst severity across all suites run:
//! OK → 0, WARNING → 1, ERROR → 2.

use crate::checks::{CheckRegistry, CheckRunner, LoggingPolicy, Severity, SuiteResult};
use crate::commands::load_config;
use crate::core::config::EnvCheckConfig;
use crate::core::error::{EnvCheckError, EnvCheckResult, ExitCode};
use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

/// Options for the run command
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
  /// Suites to run, in order
  pub suites: Vec<String>,
  /// Run every configured suite
  pub all: bool,
  pub json: bool,
  /// Explicit config file (default: search the current directory)
  pub config: Option<PathBuf>,
  /// Overrides for the `[logging]` table
  pub log_on_warning: Option<bool>,
  pub log_on_error: Option<bool>,
}

impl RunOptions {
  fn policy(&self, base: LoggingPolicy) -> LoggingPolicy {
    LoggingPolicy {
      log_on_warning: self.log_on_warning.unwrap_or(base.log_on_warning),
      log_on_error: self.log_on_error.unwrap_or(base.log_on_error),
    }
  }
}

/// Run the requested suites and report
///
/// Returns the exit code matching the worst severity seen.
pub fn run_suites(opts: &RunOptions) -> EnvCheckResult<ExitCode> {
  let config = load_config(opts.config.as_deref())?;

  let registry = Arc::new(CheckRegistry::new());
  config.register_into(&registry);

  let suites: Vec<String> = if opts.all {
    config.suites.iter().map(|s| s.name.clone()).collect()
  } else {
    opts.suites.clone()
  };
  if suites.is_empty() {
    return Err(EnvCheckError::with_help(
      "No suite to run",
      "Pass one or more suite names, or --all. Run `envcheck list` to see them.",
    ));
  }

  let policy = opts.policy(config.logging);
  let runner = CheckRunner::with_tracing(registry);
  let results = runner.run_many(suites.as_slice(), &policy)?;

  if opts.json {
    println!("{}", serde_json::to_string_pretty(&results)?);
  } else {
    print!("{}", render_text(&results, &config));
  }

  let worst = Severity::worst(results.iter().map(SuiteResult::overall_severity));
  Ok(ExitCode::from(worst))
}

fn icon(severity: Severity) -> &'static str {
  match severity {
    Severity::Ok => "✅",
    Severity::Warning => "⚠️ ",
    Severity::Error => "❌",
  }
}

/// Human-readable report for a batch of suite results
pub fn render_text(results: &[SuiteResult], config: &EnvCheckConfig) -> String {
  let mut out = String::new();

  for result in results {
    let title = config
      .suite(result.suite_name())
      .map(|s| s.display_title())
      .unwrap_or(result.suite_name());
    let _ = writeln!(out, "🏥 {} ({})", title, result.suite_name());

    if result.results().is_empty() {
      let _ = writeln!(out, "   (no checks registered)");
    }
    for check in result.results() {
      let _ = writeln!(out, "   {} {}: {}", icon(check.severity()), check.check_name(), check.message());
    }

    let passed = result.results().iter().filter(|r| r.passed()).count();
    let _ = writeln!(
      out,
      "   → {} ({}/{} checks passed)\n",
      result.overall_severity(),
      passed,
      result.results().len()
    );
  }

  let worst = Severity::worst(results.iter().map(SuiteResult::overall_severity));
  let _ = writeln!(out, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
  let _ = writeln!(out, "Overall: {}", worst);
  out
}
