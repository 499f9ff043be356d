//! poke - MCP server for Pokémon lookups.

use clap::Parser;
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use poke::cli::{self, Cli, Commands};
use poke::config::Config;
use poke::Error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    let (config, rejected) = Config::load(cli.config.as_deref())?;

    // Logs go to stderr; stdout carries MCP messages.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("poke={}", config.log.level)));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    for r in &rejected {
        warn!("{}", r);
    }

    match cli.command {
        None | Some(Commands::Serve) => {
            cli::mcp::run(&config).await?;
        }
        Some(Commands::Info { name }) => {
            cli::lookup::info(&config, &name).await?;
        }
        Some(Commands::Squad) => {
            cli::lookup::squad(&config).await?;
        }
        Some(Commands::Popular) => {
            cli::lookup::popular(&config)?;
        }
        Some(Commands::Introduce {
            pokemon_name,
            pokedex_number,
        }) => {
            cli::lookup::introduce(&config, &pokemon_name, pokedex_number)?;
        }
        Some(Commands::Install { target, dir }) => {
            cli::mcp_config::run(target, dir)?;
        }
        Some(Commands::Config) => {
            cli::config::show(&config)?;
        }
    }

    Ok(())
}
