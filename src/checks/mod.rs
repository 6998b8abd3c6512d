//! Environment checks, suites and the suite runner
//!
//! All checks implement the [`Check`] trait. Checks are grouped into named
//! suites in a [`CheckRegistry`]; a [`CheckRunner`] executes a suite and rolls
//! the outcomes up into a [`SuiteResult`].
//!
//! # Built-in Checks
//!
//! - **file-writeable**: a file or directory can be written to
//! - **file-age**: a file was modified recently
//! - **env-var**: an environment variable is set (optionally to a given value)
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use envcheck::checks::{CheckRegistry, CheckRunner, EnvVarCheck, LoggingPolicy, Severity};
//!
//! let registry = Arc::new(CheckRegistry::new());
//! registry.register("health", Arc::new(EnvVarCheck::new("PATH")));
//!
//! let runner = CheckRunner::with_tracing(Arc::clone(&registry));
//! let result = runner.run("health", &LoggingPolicy::new(true, true)).unwrap();
//! assert_eq!(result.overall_severity(), Severity::Ok);
//! ```

mod env_var;
mod file_age;
mod file_writeable;
mod logger;
mod registry;
mod runner;
mod trait_def;

pub use env_var::EnvVarCheck;
pub use file_age::FileAgeCheck;
pub use file_writeable::FileWriteableCheck;
pub use logger::{LogLevel, LogRecord, ResultLogger, TracingLogger};
pub use registry::CheckRegistry;
pub use runner::{CheckRunner, LoggingPolicy, SuiteResult};
pub use trait_def::{Check, CheckResult, Outcome, Severity};
