//! Environment variable check

use super::trait_def::{Check, Outcome};
use crate::core::error::EnvCheckResult;
use std::env;

/// Checks that an environment variable is set, optionally to an expected value
///
/// Unset or empty is an error; a value other than `expected` is a warning.
pub struct EnvVarCheck {
  name: String,
  variable: String,
  expected: Option<String>,
}

impl EnvVarCheck {
  pub fn new(variable: impl Into<String>) -> Self {
    Self {
      name: "env-var".to_string(),
      variable: variable.into(),
      expected: None,
    }
  }

  pub fn expecting(mut self, value: impl Into<String>) -> Self {
    self.expected = Some(value.into());
    self
  }

  /// Override the name reported in results
  pub fn titled(mut self, name: impl Into<String>) -> Self {
    self.name = name.into();
    self
  }

  fn evaluate(&self, value: Option<String>) -> Outcome {
    match (value, &self.expected) {
      (None, _) => Outcome::error(format!("{} is not set", self.variable)),
      (Some(v), _) if v.is_empty() => Outcome::error(format!("{} is empty", self.variable)),
      (Some(v), Some(expected)) if &v != expected => Outcome::warning(format!(
        "{} is '{}', expected '{}'",
        self.variable, v, expected
      )),
      (Some(_), _) => Outcome::ok(format!("{} is set", self.variable)),
    }
  }
}

impl Check for EnvVarCheck {
  fn name(&self) -> &str {
    &self.name
  }

  fn description(&self) -> &str {
    "Verify an environment variable is set"
  }

  fn run(&self) -> EnvCheckResult<Outcome> {
    Ok(self.evaluate(env::var(&self.variable).ok()))
  }
}
