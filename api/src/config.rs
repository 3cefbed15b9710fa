// api/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;
use std::fmt;
use std::str::FromStr;

/// Where product rows live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
  #[default]
  Postgres,
  Memory,
}

impl FromStr for StoreBackend {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "postgres" | "postgresql" => Ok(Self::Postgres),
      "memory" | "in-memory" => Ok(Self::Memory),
      other => Err(AppError::Config(format!(
        "Invalid STORE_BACKEND '{}': expected 'postgres' or 'memory'",
        other
      ))),
    }
  }
}

impl fmt::Display for StoreBackend {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Postgres => f.write_str("postgres"),
      Self::Memory => f.write_str("memory"),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
  #[default]
  Pretty,
  Json,
}

impl FromStr for LogFormat {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "pretty" | "text" => Ok(Self::Pretty),
      "json" => Ok(Self::Json),
      other => Err(AppError::Config(format!("Invalid LOG_FORMAT '{}'", other))),
    }
  }
}

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub store_backend: StoreBackend,
  /// Required when `store_backend` is `Postgres`.
  pub database_url: Option<String>,
  pub db_max_connections: u32,
  pub log_format: LogFormat,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|var_name| env::var(var_name).ok())
  }

  /// Builds the config from any variable source, `from_env` passes the process environment.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
    let server_port = lookup("SERVER_PORT")
      .unwrap_or_else(|| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let store_backend = match lookup("STORE_BACKEND") {
      Some(raw) => raw.parse::<StoreBackend>()?,
      None => StoreBackend::default(),
    };
    let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
    if store_backend == StoreBackend::Postgres && database_url.is_none() {
      return Err(AppError::Config(
        "Missing environment variable 'DATABASE_URL' (required when STORE_BACKEND=postgres)".to_string(),
      ));
    }

    let db_max_connections = lookup("DB_MAX_CONNECTIONS")
      .unwrap_or_else(|| "5".to_string())
      .parse::<u32>()
      .map_err(|e| AppError::Config(format!("Invalid DB_MAX_CONNECTIONS: {}", e)))?;
    if db_max_connections == 0 {
      return Err(AppError::Config("DB_MAX_CONNECTIONS must be at least 1".to_string()));
    }

    let log_format = match lookup("LOG_FORMAT") {
      Some(raw) => raw.parse::<LogFormat>()?,
      None => LogFormat::default(),
    };

    Ok(Self {
      server_host,
      server_port,
      store_backend,
      database_url,
      db_max_connections,
      log_format,
    })
  }

  pub fn server_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn load(vars: &[(&str, &str)]) -> Result<AppConfig> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned())
  }

  #[test]
  fn defaults_with_database_url() {
    let cfg = load(&[("DATABASE_URL", "postgres://localhost/products")]).unwrap();
    assert_eq!(cfg.server_address(), "127.0.0.1:8080");
    assert_eq!(cfg.store_backend, StoreBackend::Postgres);
    assert_eq!(cfg.db_max_connections, 5);
    assert_eq!(cfg.log_format, LogFormat::Pretty);
  }

  #[test]
  fn postgres_backend_requires_database_url() {
    let err = load(&[]).unwrap_err();
    assert!(matches!(err, AppError::Config(ref m) if m.contains("DATABASE_URL")));
  }

  #[test]
  fn memory_backend_needs_no_database_url() {
    let cfg = load(&[("STORE_BACKEND", "Memory"), ("LOG_FORMAT", "json"), ("SERVER_PORT", "9000")]).unwrap();
    assert_eq!(cfg.store_backend, StoreBackend::Memory);
    assert_eq!(cfg.log_format, LogFormat::Json);
    assert_eq!(cfg.server_port, 9000);
    assert!(cfg.database_url.is_none());
  }

  #[test]
  fn rejects_bad_values() {
    assert!(load(&[("STORE_BACKEND", "redis")]).is_err());
    assert!(load(&[("STORE_BACKEND", "memory"), ("SERVER_PORT", "eighty")]).is_err());
    assert!(load(&[("STORE_BACKEND", "memory"), ("DB_MAX_CONNECTIONS", "0")]).is_err());
    assert!(load(&[("STORE_BACKEND", "memory"), ("LOG_FORMAT", "xml")]).is_err());
  }
}
