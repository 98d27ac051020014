//! Server configuration.
//!
//! Settings come from an optional TOML file, then environment variables
//! override individual keys. Loaded once at startup and passed to the router
//! builder.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::engine::EngineKind;
use crate::models::SignLocale;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "CHART_WORKER_CONFIG";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed CORS origins; `["*"]` allows any origin
    #[serde(default = "default_cors_origins")]
    pub cors_allow_origins: Vec<String>,
    #[serde(default)]
    pub sign_locale: SignLocale,
    #[serde(default)]
    pub engine: EngineKind,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_allow_origins: default_cors_origins(),
            sign_locale: SignLocale::default(),
            engine: EngineKind::default(),
        }
    }
}

/// Split a comma-separated origin list; empty input means any origin.
pub fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if origins.is_empty() {
        default_cors_origins()
    } else {
        origins
    }
}

impl ServerConfig {
    /// Load settings from a TOML file. Missing keys take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Config file to use, if any.
    ///
    /// `CHART_WORKER_CONFIG` wins; otherwise `chart-worker.toml` is looked up
    /// in the current directory and in `backend/`.
    pub fn default_location() -> Option<PathBuf> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        [
            PathBuf::from("chart-worker.toml"),
            PathBuf::from("backend/chart-worker.toml"),
        ]
        .into_iter()
        .find(|p| p.exists())
    }

    /// Apply `HOST`, `PORT`, `CORS_ALLOW_ORIGINS`, `SIGN_LOCALE` and
    /// `CHART_ENGINE` from the environment.
    pub fn apply_env(mut self) -> Result<Self, ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                reason: format!("'{}' is not a valid port number", port),
            })?;
        }
        if let Ok(origins) = env::var("CORS_ALLOW_ORIGINS") {
            self.cors_allow_origins = parse_origins(&origins);
        }
        if let Ok(locale) = env::var("SIGN_LOCALE") {
            self.sign_locale = locale
                .parse()
                .map_err(|reason| ConfigError::InvalidValue {
                    key: "SIGN_LOCALE",
                    reason,
                })?;
        }
        if let Ok(engine) = env::var("CHART_ENGINE") {
            self.engine = engine
                .parse()
                .map_err(|reason| ConfigError::InvalidValue {
                    key: "CHART_ENGINE",
                    reason,
                })?;
        }
        Ok(self)
    }

    /// Defaults, then the config file if one exists, then the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match Self::default_location() {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };
        base.apply_env()
    }

    /// Whether any origin is allowed.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_allow_origins.iter().any(|o| o == "*")
    }

    /// `host:port` string for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
