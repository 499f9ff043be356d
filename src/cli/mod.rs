//! CLI commands for poke.

pub mod config;
pub mod lookup;
pub mod mcp;
pub mod mcp_config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use mcp_config::InstallTarget;

/// poke - Pokémon lookup tools for MCP clients
#[derive(Parser)]
#[command(name = "poke")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.poke/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run MCP server (stdio transport, the default)
    Serve,

    /// Show types, abilities and base stats of a Pokémon
    Info {
        /// Pokémon name
        name: String,
    },

    /// Build the tournament squad
    Squad,

    /// List popular tournament-ready Pokémon
    Popular,

    /// Render the Professor Oak introduction prompt
    Introduce {
        /// Pokémon name
        pokemon_name: String,

        /// Pokédex number
        #[arg(allow_negative_numbers = true)]
        pokedex_number: i64,
    },

    /// Register the MCP server with an AI tool
    Install {
        /// Tool to configure
        #[arg(value_enum)]
        target: InstallTarget,

        /// Project directory (default: current directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Show resolved configuration
    Config,
}
