//! Integration tests for `envcheck list`

use crate::helpers::{TestWorkspace, run_envcheck, run_envcheck_ok};
use anyhow::Result;

const CONFIG: &str = r#"
[[suites]]
name = "live"
title = "Production"

[[suites.checks]]
kind = "env-var"
name = "APP_ENV"
expected = "live"
title = "app-env"

[[suites.checks]]
kind = "file-writeable"
path = "/tmp"

[[suites]]
name = "bare"
"#;

#[test]
fn test_list_shows_suites_and_checks() -> Result<()> {
  let ws = TestWorkspace::with_config(CONFIG)?;

  let output = run_envcheck_ok(&ws.path, &["list"])?;
  let stdout = String::from_utf8_lossy(&output.stdout);

  assert!(stdout.contains("live (Production)"));
  assert!(stdout.contains("app-env: Verify an environment variable is set"));
  assert!(stdout.contains("file-writeable: Verify a file or directory is writeable"));
  assert!(stdout.contains("bare (bare)"));
  assert!(stdout.contains("(no checks)"));

  Ok(())
}

#[test]
fn test_list_json_output() -> Result<()> {
  let ws = TestWorkspace::with_config(CONFIG)?;

  let output = run_envcheck_ok(&ws.path, &["list", "--json"])?;
  let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("Should be valid JSON");

  // suite names come back sorted
  assert_eq!(json[0]["name"], "bare");
  assert_eq!(json[1]["name"], "live");
  assert_eq!(json[1]["title"], "Production");
  assert_eq!(json[1]["checks"][0]["name"], "app-env");
  assert_eq!(json[1]["checks"][1]["name"], "file-writeable");

  Ok(())
}

#[test]
fn test_list_rejects_invalid_config() -> Result<()> {
  let ws = TestWorkspace::with_config("[[suites]]\nname = \"a\"\n\n[[suites]]\nname = \"a\"\n")?;

  let output = run_envcheck(&ws.path, &["list"])?;

  assert_eq!(output.status.code(), Some(3));
  assert!(String::from_utf8_lossy(&output.stderr).contains("declared more than once"));

  Ok(())
}
