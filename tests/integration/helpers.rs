//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A scratch directory holding an envcheck.toml and the files its checks look at
pub struct TestWorkspace {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestWorkspace {
  /// Create an empty workspace
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    Ok(Self { _root: root, path })
  }

  /// Create a workspace with `config` written to envcheck.toml
  pub fn with_config(config: &str) -> Result<Self> {
    let ws = Self::new()?;
    ws.write_file("envcheck.toml", config)?;
    Ok(ws)
  }

  /// Write a file relative to the workspace root
  pub fn write_file(&self, path: &str, content: &str) -> Result<PathBuf> {
    let full = self.path.join(path);
    if let Some(parent) = full.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&full, content)?;
    Ok(full)
  }

  /// Absolute path of a workspace entry, as a string for embedding in TOML
  pub fn toml_path(&self, path: &str) -> String {
    self.path.join(path).display().to_string().replace('\\', "/")
  }
}

/// Run the envcheck binary, whatever its exit status
pub fn run_envcheck(cwd: &Path, args: &[&str]) -> Result<Output> {
  let envcheck_bin = env!("CARGO_BIN_EXE_envcheck");

  Command::new(envcheck_bin)
    .current_dir(cwd)
    .args(args)
    .env_remove("RUST_LOG")
    .output()
    .context("Failed to run envcheck")
}

/// Run the envcheck binary and require exit status 0
pub fn run_envcheck_ok(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = run_envcheck(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "envcheck command failed: envcheck {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}
