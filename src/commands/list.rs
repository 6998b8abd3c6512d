//! `envcheck list` - Show configured suites and their checks

use crate::checks::CheckRegistry;
use crate::commands::load_config;
use crate::core::error::EnvCheckResult;
use std::path::Path;

/// Print every configured suite with its checks
pub fn run_list(config_path: Option<&Path>, json: bool) -> EnvCheckResult<()> {
  let config = load_config(config_path)?;
  let registry = CheckRegistry::new();
  config.register_into(&registry);

  let mut suites = Vec::new();
  for name in registry.suite_names() {
    let title = config.suite(&name).map(|s| s.display_title().to_string());
    let checks: Vec<serde_json::Value> = registry
      .suites_for(&name)?
      .iter()
      .map(|c| serde_json::json!({ "name": c.name(), "description": c.description() }))
      .collect();
    suites.push(serde_json::json!({ "name": name, "title": title, "checks": checks }));
  }

  if json {
    println!("{}", serde_json::to_string_pretty(&suites)?);
    return Ok(());
  }

  if suites.is_empty() {
    println!("No suites configured.");
    return Ok(());
  }

  println!("📋 Registered suites:");
  for suite in &suites {
    println!("\n   {} ({})", suite["name"].as_str().unwrap_or_default(), suite["title"].as_str().unwrap_or_default());
    let checks = suite["checks"].as_array().map(Vec::as_slice).unwrap_or_default();
    if checks.is_empty() {
      println!("     (no checks)");
    }
    for check in checks {
      println!(
        "     • {}: {}",
        check["name"].as_str().unwrap_or_default(),
        check["description"].as_str().unwrap_or_default()
      );
    }
  }

  Ok(())
}
