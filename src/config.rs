//! Application configuration
//!
//! Loaded from a TOML file. Every key has a default, so a partial or missing
//! file still yields a usable configuration.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! base_path = "/pet_store"
//! shutdown_timeout = 30
//!
//! [database]
//! url = "sqlite://./pet_store.db?mode=rwc"
//! max_connections = 10
//!
//! [logging]
//! level = "info"
//! format = "text"   # or "json"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::infrastructure::DatabaseConfig;
use crate::shared::errors::InfraError;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "PET_STORE_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Prefix for all pet store routes
    pub base_path: String,
    /// Seconds to wait for in-flight requests on shutdown
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            base_path: "/pet_store".to_string(),
            shutdown_timeout: 30,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `pet_store=debug,sea_orm=warn`
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
    /// Reads the file at `path`; a missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self, InfraError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, InfraError> {
        Ok(toml::from_str(raw)?)
    }
}

/// `~/.config/pet-store/config.toml`, or `./config.toml` without a home directory.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .map(|dir| dir.join("pet-store").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}
