//! CLI commands for envcheck
//!
//! - **run**: Run one or more suites and exit with the worst severity
//! - **list**: Show configured suites and their checks

pub mod list;
pub mod run;

pub use list::run_list;
pub use run::{RunOptions, run_suites};

use crate::core::config::EnvCheckConfig;
use crate::core::error::EnvCheckResult;
use std::path::Path;

/// Load `path` if given, otherwise search the current directory
fn load_config(path: Option<&Path>) -> EnvCheckResult<EnvCheckConfig> {
  match path {
    Some(p) => EnvCheckConfig::load_file(p),
    None => EnvCheckConfig::load(&std::env::current_dir()?),
  }
}
