//! Configuration management for poke.
//!
//! Loaded from `~/.poke/config.toml` when present, then overridden by
//! `POKE_API_BASE_URL` and `POKE_API_TIMEOUT_SECS`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Env var overriding `api.base_url`.
pub const ENV_BASE_URL: &str = "POKE_API_BASE_URL";

/// Env var overriding `api.timeout_secs`.
pub const ENV_TIMEOUT_SECS: &str = "POKE_API_TIMEOUT_SECS";

/// An environment override that was rejected and left the file value in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedOverride {
    pub var: &'static str,
    pub value: String,
}

impl std::fmt::Display for RejectedOverride {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ignoring invalid {}={:?}", self.var, self.value)
    }
}

/// Global poke configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Upstream API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout, covering connect and body read.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load config from `path`, or from `~/.poke/config.toml` when `None`,
    /// then apply environment overrides.
    ///
    /// Rejected overrides are returned so they can be reported once logging
    /// is set up.
    pub fn load(path: Option<&Path>) -> Result<(Self, Vec<RejectedOverride>), Error> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::path()?,
        };
        let mut config = Self::load_file(&path)?;
        let rejected = config.apply_overrides(|key| std::env::var(key).ok());
        Ok((config, rejected))
    }

    /// Load config from a file without env overrides. Missing file means defaults.
    pub fn load_file(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup (normally the process environment).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Vec<RejectedOverride>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut rejected = Vec::new();
        if let Some(url) = lookup(ENV_BASE_URL) {
            if url.trim().is_empty() {
                rejected.push(RejectedOverride {
                    var: ENV_BASE_URL,
                    value: url,
                });
            } else {
                self.api.base_url = url.trim().to_string();
            }
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            match secs.trim().parse::<u64>() {
                Ok(n) if n > 0 => self.api.timeout_secs = n,
                _ => rejected.push(RejectedOverride {
                    var: ENV_TIMEOUT_SECS,
                    value: secs,
                }),
            }
        }
        rejected
    }

    /// Render as TOML.
    pub fn to_toml(&self) -> Result<String, Error> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Path to global poke directory (~/.poke/)
    pub fn global_dir() -> Result<PathBuf, Error> {
        let home = dirs::home_dir().ok_or(Error::HomeDirNotFound)?;
        Ok(home.join(".poke"))
    }

    /// Path to config file
    pub fn path() -> Result<PathBuf, Error> {
        Ok(Self::global_dir()?.join("config.toml"))
    }
}
