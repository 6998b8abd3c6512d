//! Named suites of checks
//!
//! A suite comes into existence the first time a check is registered under its
//! name and lives until [`CheckRegistry::reset`]. An empty suite is still a
//! suite: looking it up succeeds, whereas a name that was never registered is
//! a [`SuiteError::NotFound`](crate::core::error::SuiteError).

use super::trait_def::Check;
use crate::core::error::{EnvCheckError, EnvCheckResult};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type SuiteMap = BTreeMap<String, Vec<Arc<dyn Check>>>;

/// Thread-safe registry of check suites
#[derive(Default)]
pub struct CheckRegistry {
  suites: Mutex<SuiteMap>,
}

impl CheckRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  // Every mutation completes within a single statement, so a poisoned map is
  // still consistent.
  fn lock(&self) -> MutexGuard<'_, SuiteMap> {
    self.suites.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// Append `check` to `suite`, creating the suite if needed
  pub fn register(&self, suite: &str, check: Arc<dyn Check>) {
    tracing::debug!(suite, check = check.name(), "registering check");
    self.lock().entry(suite.to_string()).or_default().push(check);
  }

  /// Register the same check under several suites
  pub fn register_in<'a, I>(&self, suites: I, check: Arc<dyn Check>)
  where
    I: IntoIterator<Item = &'a str>,
  {
    let mut map = self.lock();
    for suite in suites {
      map.entry(suite.to_string()).or_default().push(Arc::clone(&check));
    }
  }

  /// Create `suite` with no checks if it does not exist yet
  pub fn register_suite(&self, suite: &str) {
    self.lock().entry(suite.to_string()).or_default();
  }

  /// Remove the first registration of `check` from `suite`
  ///
  /// Handles are compared by identity. Unknown suites and checks are ignored.
  pub fn unregister(&self, suite: &str, check: &Arc<dyn Check>) {
    let mut map = self.lock();
    if let Some(checks) = map.get_mut(suite)
      && let Some(pos) = checks.iter().position(|c| Arc::ptr_eq(c, check))
    {
      checks.remove(pos);
    }
  }

  /// Drop every suite
  pub fn reset(&self) {
    self.lock().clear();
  }

  /// Snapshot of the checks registered under `suite`, in registration order
  pub fn suites_for(&self, suite: &str) -> EnvCheckResult<Vec<Arc<dyn Check>>> {
    self
      .lock()
      .get(suite)
      .cloned()
      .ok_or_else(|| EnvCheckError::suite_not_found(suite))
  }

  pub fn contains(&self, suite: &str) -> bool {
    self.lock().contains_key(suite)
  }

  /// Registered suite names, sorted
  pub fn suite_names(&self) -> Vec<String> {
    self.lock().keys().cloned().collect()
  }
}
