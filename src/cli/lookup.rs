//! Run the Pokédex handlers from the command line.

use crate::config::Config;
use crate::error::Error;
use crate::pokeapi::PokeApiClient;
use crate::pokedex::Pokedex;

fn pokedex(config: &Config) -> Result<Pokedex, Error> {
    Ok(Pokedex::new(PokeApiClient::new(&config.api)?))
}

/// `poke info <name>`
pub async fn info(config: &Config, name: &str) -> Result<(), Error> {
    println!("{}", pokedex(config)?.info(name).await);
    Ok(())
}

/// `poke squad`
pub async fn squad(config: &Config) -> Result<(), Error> {
    println!("{}", pokedex(config)?.tournament_squad().await);
    Ok(())
}

/// `poke popular`
pub fn popular(config: &Config) -> Result<(), Error> {
    println!("{}", pokedex(config)?.popular());
    Ok(())
}

/// `poke introduce <name> <number>`
pub fn introduce(config: &Config, pokemon_name: &str, pokedex_number: i64) -> Result<(), Error> {
    println!("{}", pokedex(config)?.introduce(pokemon_name, pokedex_number));
    Ok(())
}
