//! PokeAPI client: the single place that talks to the upstream REST API.

pub mod client;
pub mod types;

pub use client::{FetchError, PokeApiClient};
pub use types::Pokemon;
