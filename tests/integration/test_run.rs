//! Integration tests for `envcheck run`

use crate::helpers::{TestWorkspace, run_envcheck, run_envcheck_ok};
use anyhow::Result;

fn mixed_config(ws: &TestWorkspace) -> String {
  format!(
    r#"
[logging]
log_on_warning = true
log_on_error = true

[[suites]]
name = "healthy"
title = "Healthy suite"

[[suites.checks]]
kind = "file-writeable"
path = "{dir}"

[[suites]]
name = "degraded"

[[suites.checks]]
kind = "file-writeable"
path = "{dir}"

[[suites.checks]]
kind = "file-age"
path = "{missing}"
max_age_secs = 60
severity = "warning"
title = "stale-backup"

[[suites.checks]]
kind = "file-age"
path = "{missing}"
max_age_secs = 60
severity = "warning"
title = "stale-export"

[[suites]]
name = "broken"

[[suites.checks]]
kind = "file-writeable"
path = "{missing}"
title = "uploads-dir"

[[suites.checks]]
kind = "file-age"
path = "{missing}"
max_age_secs = 60
severity = "warning"
title = "stale-backup"

[[suites]]
name = "empty"
"#,
    dir = ws.toml_path(""),
    missing = ws.toml_path("does-not-exist"),
  )
}

fn setup() -> Result<TestWorkspace> {
  let ws = TestWorkspace::new()?;
  ws.write_file("envcheck.toml", &mixed_config(&ws))?;
  Ok(ws)
}

#[test]
fn test_run_healthy_suite_exits_zero() -> Result<()> {
  let ws = setup()?;

  let output = run_envcheck_ok(&ws.path, &["run", "healthy"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert!(stdout.contains("Healthy suite (healthy)"));
  assert!(stdout.contains("Overall: OK"));
  assert!(!stderr.contains("reported"), "OK runs must not log: {}", stderr);

  Ok(())
}

#[test]
fn test_run_warning_suite_logs_once() -> Result<()> {
  let ws = setup()?;

  let output = run_envcheck(&ws.path, &["run", "degraded"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert_eq!(output.status.code(), Some(1));
  assert_eq!(stderr.matches("reported warnings").count(), 1, "stderr: {}", stderr);
  assert_eq!(stderr.matches("reported errors").count(), 0);

  Ok(())
}

#[test]
fn test_run_warning_suite_silent_when_disabled() -> Result<()> {
  let ws = setup()?;

  let output = run_envcheck(&ws.path, &["run", "degraded", "--log-on-warning", "false"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert_eq!(output.status.code(), Some(1));
  assert!(!stderr.contains("reported"), "stderr: {}", stderr);

  Ok(())
}

#[test]
fn test_run_error_suite_logs_error_only() -> Result<()> {
  let ws = setup()?;

  let output = run_envcheck(&ws.path, &["run", "broken"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert_eq!(output.status.code(), Some(2));
  assert!(stdout.contains("uploads-dir"));
  assert!(stdout.contains("stale-backup"), "every check is reported: {}", stdout);
  assert_eq!(stderr.matches("reported errors").count(), 1, "stderr: {}", stderr);
  assert_eq!(stderr.matches("reported warnings").count(), 0);

  Ok(())
}

#[test]
fn test_run_error_suite_silent_when_disabled() -> Result<()> {
  let ws = setup()?;

  let output = run_envcheck(&ws.path, &["run", "broken", "--log-on-error", "false"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert_eq!(output.status.code(), Some(2));
  assert!(!stderr.contains("reported"), "stderr: {}", stderr);

  Ok(())
}

#[test]
fn test_run_unknown_suite() -> Result<()> {
  let ws = setup()?;

  let output = run_envcheck(&ws.path, &["run", "nightly"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert_eq!(output.status.code(), Some(3));
  assert!(stderr.contains("Check suite 'nightly' is not registered"));
  assert!(output.stdout.is_empty(), "no checks should run");

  Ok(())
}

#[test]
fn test_run_empty_suite_is_ok() -> Result<()> {
  let ws = setup()?;

  let output = run_envcheck_ok(&ws.path, &["run", "empty", "--json"])?;
  let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;

  assert_eq!(json[0]["suite_name"], "empty");
  assert_eq!(json[0]["overall_severity"], "ok");
  assert_eq!(json[0]["results"].as_array().map(Vec::len), Some(0));

  Ok(())
}

#[test]
fn test_run_json_preserves_check_order() -> Result<()> {
  let ws = setup()?;

  let output = run_envcheck(&ws.path, &["run", "degraded", "--json"])?;
  let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;

  let names: Vec<&str> = json[0]["results"]
    .as_array()
    .expect("results array")
    .iter()
    .filter_map(|r| r["check_name"].as_str())
    .collect();
  assert_eq!(names, vec!["file-writeable", "stale-backup", "stale-export"]);
  assert_eq!(json[0]["overall_severity"], "warning");

  Ok(())
}

#[test]
fn test_run_all_reports_worst_exit_code() -> Result<()> {
  let ws = setup()?;

  let output = run_envcheck(&ws.path, &["run", "--all", "--json", "--log-on-warning", "false"])?;
  let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;

  assert_eq!(output.status.code(), Some(2));
  let suites: Vec<&str> = json
    .as_array()
    .expect("array of suites")
    .iter()
    .filter_map(|s| s["suite_name"].as_str())
    .collect();
  assert_eq!(suites, vec!["healthy", "degraded", "broken", "empty"]);

  Ok(())
}

#[test]
fn test_run_without_suite_name_fails() -> Result<()> {
  let ws = setup()?;

  let output = run_envcheck(&ws.path, &["run"])?;

  assert_eq!(output.status.code(), Some(3));
  assert!(String::from_utf8_lossy(&output.stderr).contains("No suite to run"));

  Ok(())
}

#[test]
fn test_run_without_config_fails() -> Result<()> {
  let ws = TestWorkspace::new()?;

  let output = run_envcheck(&ws.path, &["run", "healthy"])?;
  let stderr = String::from_utf8_lossy(&output.stderr);

  assert_eq!(output.status.code(), Some(3));
  assert!(stderr.contains("No envcheck configuration found"));

  Ok(())
}

#[test]
fn test_run_with_explicit_config_path() -> Result<()> {
  let ws = TestWorkspace::new()?;
  let config = ws.write_file("conf/checks.toml", &mixed_config(&ws))?;
  let config = config.display().to_string();

  let output = run_envcheck_ok(&ws.path, &["run", "healthy", "--config", &config])?;

  assert!(String::from_utf8_lossy(&output.stdout).contains("Overall: OK"));

  Ok(())
}
