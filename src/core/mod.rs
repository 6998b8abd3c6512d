//! Core building blocks shared by the library and the CLI
//!
//! - **config**: envcheck.toml parsing, validation and suite registration
//! - **error**: Error types with contextual help messages and exit codes

pub mod config;
pub mod error;
