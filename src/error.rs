//! Error types for the poke server.

use thiserror::Error;

/// Server error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Config write error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("MCP error: {0}")]
    Mcp(String),

    #[error("Home directory not found")]
    HomeDirNotFound,
}
