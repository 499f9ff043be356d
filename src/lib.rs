//! poke library.
//!
//! MCP server exposing Pokémon lookup tools backed by PokeAPI.

pub mod cli;
pub mod config;
pub mod error;
pub mod mcp;
pub mod pokeapi;
pub mod pokedex;

#[cfg(test)]
mod testing;

pub use error::Error;
