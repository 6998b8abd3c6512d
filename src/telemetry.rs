//! Tracing subscriber setup for the `envcheck` binary
//!
//! Library code only emits events; installing a subscriber is left to the
//! process that embeds it.

use crate::core::error::{EnvCheckError, EnvCheckResult};
use tracing::Subscriber;
use tracing::subscriber::set_global_default;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// Build a subscriber writing human-readable lines to stderr
///
/// `RUST_LOG` wins over `env_filter` when set.
pub fn get_subscriber(env_filter: String) -> impl Subscriber + Send + Sync {
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));
  let formatting_layer = fmt::layer().with_writer(std::io::stderr).with_target(false).compact();

  Registry::default().with(env_filter).with(formatting_layer)
}

/// Install `subscriber` as the global default
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync + 'static) -> EnvCheckResult<()> {
  set_global_default(subscriber)
    .map_err(|e| EnvCheckError::message(format!("Failed to set tracing subscriber: {}", e)))
}
