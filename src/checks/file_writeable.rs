//! File writeability check
//!
//! For a directory, creates and removes a scratch file inside it. For a regular
//! file, opens it for appending without writing anything.

use super::trait_def::{Check, Outcome};
use crate::core::error::EnvCheckResult;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

// Distinct scratch file names for concurrent runs within one process
static SCRATCH_SEQ: AtomicU64 = AtomicU64::new(0);

/// Checks that a path exists and can be written to
pub struct FileWriteableCheck {
  name: String,
  path: PathBuf,
}

impl FileWriteableCheck {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self {
      name: "file-writeable".to_string(),
      path: path.into(),
    }
  }

  /// Override the name reported in results
  pub fn titled(mut self, name: impl Into<String>) -> Self {
    self.name = name.into();
    self
  }
}

impl Check for FileWriteableCheck {
  fn name(&self) -> &str {
    &self.name
  }

  fn description(&self) -> &str {
    "Verify a file or directory is writeable"
  }

  fn run(&self) -> EnvCheckResult<Outcome> {
    let display = self.path.display();

    let metadata = match fs::metadata(&self.path) {
      Ok(m) => m,
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        return Ok(Outcome::error(format!("{} does not exist", display)));
      }
      Err(e) => return Ok(Outcome::error(format!("Cannot read {}: {}", display, e))),
    };

    let writeable = if metadata.is_dir() {
      let seq = SCRATCH_SEQ.fetch_add(1, Ordering::Relaxed);
      let scratch = self
        .path
        .join(format!(".envcheck-scratch-{}-{}", std::process::id(), seq));
      match OpenOptions::new().write(true).create_new(true).open(&scratch) {
        Ok(file) => {
          drop(file);
          if let Err(e) = fs::remove_file(&scratch) {
            tracing::debug!(path = %scratch.display(), error = %e, "failed to remove scratch file");
          }
          true
        }
        Err(_) => false,
      }
    } else {
      OpenOptions::new().append(true).open(&self.path).is_ok()
    };

    if writeable {
      Ok(Outcome::ok(format!("{} is writeable", display)))
    } else {
      Ok(Outcome::error(format!("{} is not writeable", display)))
    }
  }
}
