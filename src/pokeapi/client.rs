//! HTTP client for `GET {base}/pokemon/{name}`.

use reqwest::{StatusCode, Url};
use thiserror::Error;
use tracing::{debug, warn};

use super::types::Pokemon;
use crate::config::ApiConfig;
use crate::error::Error;

/// Why a lookup produced no record.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid name: {0:?}")]
    InvalidName(String),

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl FetchError {
    /// Upstream answered and has no such entity.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::InvalidName(_) | Self::Status(404))
    }
}

/// PokeAPI client.
///
/// Holds the parsed base URL and a configured HTTP client; no lookup
/// results are kept between calls.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PokeApiClient {
    /// Create a client from API settings.
    pub fn new(config: &ApiConfig) -> Result<Self, Error> {
        let base_url = Url::parse(config.base_url.trim())
            .map_err(|e| Error::InvalidBaseUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(config.base_url.clone()));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("poke/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL for a name, lower-cased and percent-encoded as one path segment.
    pub fn pokemon_url(&self, name: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push("pokemon")
                .push(&name.to_lowercase());
        }
        url
    }

    /// Look up a Pokémon, keeping the failure cause.
    pub async fn lookup(&self, name: &str) -> Result<Pokemon, FetchError> {
        let normalized = name.to_lowercase();
        // "." and ".." would be resolved away as path segments
        if normalized.is_empty() || normalized == "." || normalized == ".." {
            return Err(FetchError::InvalidName(name.to_string()));
        }

        let url = self.pokemon_url(&normalized);
        debug!(url = %url, "PokeAPI request");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(FetchError::Transport)?;
        serde_json::from_slice(&body).map_err(FetchError::Decode)
    }

    /// Look up a Pokémon, collapsing every failure into `None`.
    pub async fn fetch(&self, name: &str) -> Option<Pokemon> {
        match self.lookup(name).await {
            Ok(pokemon) => Some(pokemon),
            Err(e) if e.is_not_found() => {
                debug!(name, error = %e, "Pokémon not found");
                None
            }
            Err(e) => {
                warn!(name, error = %e, "PokeAPI lookup failed");
                None
            }
        }
    }
}
