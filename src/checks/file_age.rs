//! File age check
//!
//! Flags files whose modification time is older than a threshold, e.g. a
//! nightly backup that stopped being refreshed.

use super::trait_def::{Check, Outcome, Severity};
use crate::core::error::{EnvCheckError, EnvCheckResult};
use chrono::{DateTime, Utc};
use std::fs::{self, Metadata};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Checks that a file was modified within `max_age`
pub struct FileAgeCheck {
  name: String,
  path: PathBuf,
  max_age: Duration,
  severity: Severity,
}

impl FileAgeCheck {
  /// Reports `Error` for stale or missing files
  pub fn new(path: impl Into<PathBuf>, max_age: Duration) -> Self {
    Self {
      name: "file-age".to_string(),
      path: path.into(),
      max_age,
      severity: Severity::Error,
    }
  }

  /// Severity to report when the file is stale or cannot be read
  pub fn with_severity(mut self, severity: Severity) -> Self {
    self.severity = severity;
    self
  }

  /// Override the name reported in results
  pub fn titled(mut self, name: impl Into<String>) -> Self {
    self.name = name.into();
    self
  }

  fn age_at(&self, metadata: &Metadata, now: DateTime<Utc>) -> EnvCheckResult<Duration> {
    let modified: DateTime<Utc> = metadata
      .modified()
      .map_err(|e| EnvCheckError::check_failed(&self.name, format!("Cannot read mtime: {}", e)))?
      .into();

    // mtime in the future counts as fresh
    Ok((now - modified).to_std().unwrap_or(Duration::ZERO))
  }
}

impl Check for FileAgeCheck {
  fn name(&self) -> &str {
    &self.name
  }

  fn description(&self) -> &str {
    "Verify a file has been modified recently"
  }

  fn run(&self) -> EnvCheckResult<Outcome> {
    let display = self.path.display();

    let metadata = match fs::metadata(&self.path) {
      Ok(m) => m,
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        return Ok(Outcome::new(self.severity, format!("{} does not exist", display)));
      }
      Err(e) => return Ok(Outcome::new(self.severity, format!("Cannot read {}: {}", display, e))),
    };

    match self.age_at(&metadata, Utc::now())? {
      age if age > self.max_age => Ok(Outcome::new(
        self.severity,
        format!(
          "{} is {}s old (limit {}s)",
          display,
          age.as_secs(),
          self.max_age.as_secs()
        ),
      )),
      age => Ok(Outcome::ok(format!("{} is {}s old", display, age.as_secs()))),
    }
  }
}
