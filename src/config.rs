//! Configuration module
//!
//! The service reads a TOML file (default `~/.config/flow-api/config.toml`).
//! A missing file means defaults. Environment variables inherited from the
//! collector deployment (`DATABASE_URL` / `PSQL_ENGINE`, `BACKEND_PORT`) are
//! applied on top of the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::{MAX_PAGE_SIZE, MIN_PAGE_SIZE};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Default config location: `<config_dir>/flow-api/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("flow-api")
        .join("config.toml")
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSection,
    pub pagination: PaginationConfig,
    pub logging: LoggingConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds to wait for in-flight requests on shutdown
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            shutdown_timeout: 30,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    /// Connection URL of the flow store
    pub url: String,
    pub pool: PoolConfig,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            url: "sqlite://./flows.db?mode=rwc".to_string(),
            pool: PoolConfig::default(),
        }
    }
}

impl DatabaseSection {
    /// URL to hand to the driver.
    ///
    /// SQLAlchemy-style driver suffixes (`postgresql+asyncpg://`) are
    /// stripped so a collector `.env` can be reused as is.
    pub fn connection_url(&self) -> String {
        match self.url.split_once("://") {
            Some((scheme, rest)) if scheme.contains('+') => {
                let base = scheme.split('+').next().unwrap_or(scheme);
                format!("{}://{}", base, rest)
            }
            _ => self.url.clone(),
        }
    }
}

/// Connection pool tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 8,
            acquire_timeout_secs: 8,
            idle_timeout_secs: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Page size used when a request omits `size`
    pub default_size: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_size: crate::shared::DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn, error (or a full `EnvFilter` directive)
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from `path`, falling back to defaults when the file does not
    /// exist, then apply environment overrides and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Self::from_toml(&raw)?
        } else {
            Self::default()
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Write the config as TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw).map_err(io_err)
    }

    /// Apply overrides from a variable lookup (normally `std::env::var`).
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL").or_else(|| lookup("PSQL_ENGINE")) {
            if !url.is_empty() {
                self.database.url = url;
            }
        }
        if let Some(port) = lookup("BACKEND_PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.pagination.default_size;
        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&size) {
            return Err(ConfigError::Invalid(format!(
                "pagination.default_size must be between {} and {}, got {}",
                MIN_PAGE_SIZE, MAX_PAGE_SIZE, size
            )));
        }
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Invalid("database.url is empty".to_string()));
        }
        let pool = &self.database.pool;
        if pool.max_connections == 0 || pool.min_connections > pool.max_connections {
            return Err(ConfigError::Invalid(format!(
                "database.pool: need 0 < min_connections ({}) <= max_connections ({})",
                pool.min_connections, pool.max_connections
            )));
        }
        Ok(())
    }
}
