//! Environment health checks grouped into named suites
//!
//! Register checks with a [`checks::CheckRegistry`], run a suite with a
//! [`checks::CheckRunner`] and inspect the [`checks::SuiteResult`]. Runs whose
//! overall severity crosses the configured [`checks::LoggingPolicy`] emit a
//! single roll-up log record.

pub mod checks;
pub mod commands;
pub mod core;
pub mod telemetry;
