use std::env;
use std::path::PathBuf;

/// ---------------------------------------------------------------------------
/// Configuration Constants
/// ---------------------------------------------------------------------------

const DATABASE_PATH_VAR: &str = "RUNPLAN_DATABASE_PATH";
const MAX_CONNECTIONS_VAR: &str = "RUNPLAN_DB_MAX_CONNECTIONS";
const LOG_VAR: &str = "RUNPLAN_LOG";

const DEFAULT_DATABASE_PATH: &str = "runplan.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
  #[error("Invalid value for {key}: {value}")]
  InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
  pub database_path: PathBuf,
  pub max_connections: u32,
  pub log_filter: String,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
      max_connections: DEFAULT_MAX_CONNECTIONS,
      log_filter: DEFAULT_LOG_FILTER.to_string(),
    }
  }
}

impl AppConfig {
  /// Read overrides from the environment. Call `dotenvy::dotenv()` first to
  /// pick up a `.env` file.
  pub fn from_env() -> Result<Self, ConfigError> {
    let defaults = Self::default();

    let max_connections = match env::var(MAX_CONNECTIONS_VAR) {
      Ok(raw) => match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => {
          return Err(ConfigError::InvalidValue {
            key: MAX_CONNECTIONS_VAR.into(),
            value: raw,
          })
        }
      },
      Err(_) => defaults.max_connections,
    };

    Ok(Self {
      database_path: env::var(DATABASE_PATH_VAR)
        .map(PathBuf::from)
        .unwrap_or(defaults.database_path),
      max_connections,
      log_filter: env::var(LOG_VAR).unwrap_or(defaults.log_filter),
    })
  }

  pub fn database_url(&self) -> String {
    format!("sqlite://{}?mode=rwc", self.database_path.display())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  #[test]
  #[serial]
  fn test_from_env_defaults() {
    temp_env::with_vars(
      [
        (DATABASE_PATH_VAR, None::<&str>),
        (MAX_CONNECTIONS_VAR, None),
        (LOG_VAR, None),
      ],
      || {
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.database_url(), "sqlite://runplan.db?mode=rwc");
      },
    );
  }

  #[test]
  #[serial]
  fn test_from_env_overrides() {
    temp_env::with_vars(
      [
        (DATABASE_PATH_VAR, Some("/tmp/plans.db")),
        (MAX_CONNECTIONS_VAR, Some("2")),
        (LOG_VAR, Some("runplan_lib=debug")),
      ],
      || {
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.database_path, PathBuf::from("/tmp/plans.db"));
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.log_filter, "runplan_lib=debug");
      },
    );
  }

  #[test]
  #[serial]
  fn test_from_env_rejects_bad_pool_size() {
    for bad in ["zero", "0", "-1"] {
      temp_env::with_var(MAX_CONNECTIONS_VAR, Some(bad), || {
        let err = AppConfig::from_env().unwrap_err();
        assert_eq!(
          err,
          ConfigError::InvalidValue {
            key: MAX_CONNECTIONS_VAR.to_string(),
            value: bad.to_string(),
          }
        );
      });
    }
  }
}
