use crate::checks::{Check, CheckRegistry, EnvVarCheck, FileAgeCheck, FileWriteableCheck, LoggingPolicy, Severity};
use crate::core::error::{ConfigError, EnvCheckError, EnvCheckResult, ResultExt};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Configuration for envcheck
/// Searched in order: envcheck.toml, .envcheck.toml, .config/envcheck.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvCheckConfig {
  /// Which run outcomes are logged
  #[serde(default)]
  pub logging: LoggingPolicy,
  #[serde(default)]
  pub suites: Vec<SuiteConfig>,
}

/// A named suite and the checks registered under it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
  pub name: String,
  /// Heading for human-readable output (default: the suite name)
  #[serde(default)]
  pub title: Option<String>,
  #[serde(default)]
  pub checks: Vec<CheckConfig>,
}

impl SuiteConfig {
  pub fn display_title(&self) -> &str {
    self.title.as_deref().unwrap_or(&self.name)
  }
}

/// A built-in check and its parameters, selected by `kind`
///
/// # Example
///
/// ```toml
/// [[suites.checks]]
/// kind = "file-age"
/// path = "/var/backups/db.sql"
/// max_age_secs = 86400
/// severity = "warning"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CheckConfig {
  FileWriteable {
    path: PathBuf,
    #[serde(default)]
    title: Option<String>,
  },
  FileAge {
    path: PathBuf,
    max_age_secs: u64,
    /// Severity reported for a stale or missing file (default: error)
    #[serde(default = "default_stale_severity")]
    severity: Severity,
    #[serde(default)]
    title: Option<String>,
  },
  EnvVar {
    name: String,
    #[serde(default)]
    expected: Option<String>,
    #[serde(default)]
    title: Option<String>,
  },
}

fn default_stale_severity() -> Severity {
  Severity::Error
}

impl CheckConfig {
  /// Validate check parameters
  pub fn validate(&self) -> Result<(), String> {
    match self {
      CheckConfig::FileWriteable { path, .. } | CheckConfig::FileAge { path, .. } if path.as_os_str().is_empty() => {
        Err("`path` must not be empty".to_string())
      }
      CheckConfig::FileAge { severity, .. } if *severity == Severity::Ok => {
        Err("`severity` for a stale file must be 'warning' or 'error'".to_string())
      }
      CheckConfig::EnvVar { name, .. } if name.trim().is_empty() => Err("`name` must not be empty".to_string()),
      _ => Ok(()),
    }
  }

  /// Instantiate the configured check
  pub fn build(&self) -> Arc<dyn Check> {
    match self {
      CheckConfig::FileWriteable { path, title } => {
        let check = FileWriteableCheck::new(path);
        match title {
          Some(t) => Arc::new(check.titled(t)),
          None => Arc::new(check),
        }
      }
      CheckConfig::FileAge {
        path,
        max_age_secs,
        severity,
        title,
      } => {
        let check = FileAgeCheck::new(path, Duration::from_secs(*max_age_secs)).with_severity(*severity);
        match title {
          Some(t) => Arc::new(check.titled(t)),
          None => Arc::new(check),
        }
      }
      CheckConfig::EnvVar { name, expected, title } => {
        let mut check = EnvVarCheck::new(name);
        if let Some(value) = expected {
          check = check.expecting(value);
        }
        match title {
          Some(t) => Arc::new(check.titled(t)),
          None => Arc::new(check),
        }
      }
    }
  }
}

impl EnvCheckConfig {
  pub fn find_config_path(path: &Path) -> Option<PathBuf> {
    let candidates = vec![
      path.join("envcheck.toml"),
      path.join(".envcheck.toml"),
      path.join(".config").join("envcheck.toml"),
    ];

    candidates.into_iter().find(|p| p.exists())
  }

  /// Load configuration from the first candidate file under `path`
  pub fn load(path: &Path) -> EnvCheckResult<Self> {
    let config_path = Self::find_config_path(path).ok_or_else(|| {
      EnvCheckError::Config(ConfigError::NotFound {
        search_root: path.to_path_buf(),
      })
    })?;

    Self::load_file(&config_path)
  }

  /// Load configuration from an explicit file
  pub fn load_file(config_path: &Path) -> EnvCheckResult<Self> {
    let content = fs::read_to_string(config_path)
      .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
    let config = Self::from_toml(&content)
      .with_context(|| format!("Invalid configuration in {}", config_path.display()))?;

    tracing::debug!(path = %config_path.display(), suites = config.suites.len(), "loaded configuration");
    Ok(config)
  }

  /// Parse and validate configuration text
  pub fn from_toml(content: &str) -> EnvCheckResult<Self> {
    let config: EnvCheckConfig = toml_edit::de::from_str(content)?;
    config.validate()?;
    Ok(config)
  }

  /// Validate suite names and check parameters
  pub fn validate(&self) -> EnvCheckResult<()> {
    let mut seen = HashSet::new();

    for suite in &self.suites {
      if suite.name.trim().is_empty() {
        return Err(EnvCheckError::Config(ConfigError::InvalidSuite {
          name: suite.name.clone(),
          reason: "name must not be empty".to_string(),
        }));
      }
      if !seen.insert(suite.name.as_str()) {
        return Err(EnvCheckError::Config(ConfigError::InvalidSuite {
          name: suite.name.clone(),
          reason: "declared more than once".to_string(),
        }));
      }
      for check in &suite.checks {
        check.validate().map_err(|reason| {
          EnvCheckError::Config(ConfigError::InvalidCheck {
            suite: suite.name.clone(),
            reason,
          })
        })?;
      }
    }

    Ok(())
  }

  pub fn suite(&self, name: &str) -> Option<&SuiteConfig> {
    self.suites.iter().find(|s| s.name == name)
  }

  /// Register every configured suite and check
  ///
  /// Suites without checks are still created, so running them yields an empty
  /// OK result rather than "not registered".
  pub fn register_into(&self, registry: &CheckRegistry) {
    for suite in &self.suites {
      registry.register_suite(&suite.name);
      for check in &suite.checks {
        registry.register(&suite.name, check.build());
      }
    }
  }
}
