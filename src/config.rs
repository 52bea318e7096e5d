//! Application configuration
//!
//! Resolution order: built-in defaults, then an optional JSON file, then
//! environment variables (a `.env` file is read first by the CLI), then
//! command-line flags.
//!
//! | Variable | Field |
//! |---|---|
//! | `HOST` | `server.host` |
//! | `PORT` | `server.port` |
//! | `CORS_ORIGINS` | `server.cors_origins` (comma separated) |
//! | `STORE_BACKEND` | `store.backend` (`hosted` / `memory`) |
//! | `SUPABASE_URL` | `store.url` |
//! | `SUPABASE_KEY` | `store.api_key` |
//! | `STORE_TIMEOUT_SECS` | `store.timeout_secs` |
//! | `LOG_FORMAT` | `logging.format` (`pretty` / `json`) |

use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http_server::HttpServerConfig;
use crate::observability::LogFormat;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {message}")]
    Read { path: String, message: String },

    #[error("Invalid config file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Invalid value for {name}: '{value}'")]
    InvalidEnv { name: &'static str, value: String },

    #[error("Hosted store requires {0}")]
    MissingStoreSetting(&'static str),

    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),
}

/// Which `Store` implementation to run against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// PostgREST endpoint
    #[default]
    Hosted,
    /// Process-local tables, lost on exit
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hosted" | "supabase" => Ok(StoreBackend::Hosted),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend '{}'", other)),
        }
    }
}

/// Store connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// Project URL, e.g. `https://abc.supabase.co`
    #[serde(default)]
    pub url: Option<String>,

    /// Project API key, sent as `apikey` and bearer token
    #[serde(default)]
    pub api_key: Option<String>,

    /// Per-request timeout for the hosted store (default: 10)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            url: None,
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl StoreConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Logging settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default)]
    pub filter: Option<String>,
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Read a JSON config file; missing sections take their defaults
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Defaults or file, then the process environment
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Overlay variables looked up through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(host) = var("HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("PORT") {
            self.server.port = parse_env("PORT", &port)?;
        }
        if let Some(origins) = var("CORS_ORIGINS") {
            self.server.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(backend) = var("STORE_BACKEND") {
            self.store.backend = parse_env("STORE_BACKEND", &backend)?;
        }
        if let Some(url) = var("SUPABASE_URL") {
            self.store.url = Some(url);
        }
        if let Some(key) = var("SUPABASE_KEY") {
            self.store.api_key = Some(key);
        }
        if let Some(timeout) = var("STORE_TIMEOUT_SECS") {
            self.store.timeout_secs = parse_env("STORE_TIMEOUT_SECS", &timeout)?;
        }
        if let Some(format) = var("LOG_FORMAT") {
            self.logging.format = parse_env("LOG_FORMAT", &format)?;
        }
        Ok(())
    }

    /// Check the settings needed to start serving
    pub fn validate(&self) -> ConfigResult<()> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::InvalidAddress(self.server.socket_addr()));
        }

        if self.store.backend == StoreBackend::Hosted {
            if self.store.url.is_none() {
                return Err(ConfigError::MissingStoreSetting("SUPABASE_URL"));
            }
            if self.store.api_key.is_none() {
                return Err(ConfigError::MissingStoreSetting("SUPABASE_KEY"));
            }
        }
        Ok(())
    }
}

fn parse_env<T: FromStr>(name: &'static str, value: &str) -> ConfigResult<T> {
    value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
        name,
        value: value.to_string(),
    })
}
