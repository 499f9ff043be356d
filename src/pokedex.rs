//! Pokédex handlers: turn lookups into the text returned to MCP clients.
//!
//! The `render_*` functions are pure; `Pokedex` adds the lookups.

use tracing::{debug, info};

use crate::pokeapi::{PokeApiClient, Pokemon};

/// Tournament-ready Pokémon, in display order.
///
/// Shared by the squad builder (looked up by lower-cased name) and the
/// popular list (shown as-is).
pub const POPULAR_POKEMON: [&str; 6] = [
    "Charizard",
    "Garchomp",
    "Lucario",
    "Dragonite",
    "Metagross",
    "Gardevoir",
];

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Reply for a name with no data. The name is echoed as given.
pub fn not_found_message(name: &str) -> String {
    format!("No data found for Pokémon: {}", name)
}

/// Info block for one Pokémon.
pub fn render_info(pokemon: &Pokemon) -> String {
    let stats = pokemon
        .stats()
        .into_iter()
        .map(|(name, value)| format!("{}: {}", name, value))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "\nName: {}\nTypes: {}\nAbilities: {}\nStats: {}\n",
        capitalize(&pokemon.name),
        pokemon.type_names().join(", "),
        pokemon.ability_names().join(", "),
        stats
    )
}

/// Squad listing; `members` are already capitalized.
pub fn render_squad(members: &[String]) -> String {
    format!("Tournament Squad:\n{}", members.join("\n"))
}

pub fn render_popular() -> String {
    POPULAR_POKEMON.join("\n")
}

/// Professor Oak style introduction. `[訓練家姓名]` is literal template text.
pub fn render_introduction(pokemon_name: &str, pokedex_number: i64) -> String {
    format!(
        "
    嗨，[訓練家姓名]！歡迎來到寶可夢的世界！
    今天，我要為你介紹寶可夢圖鑑中編號為 {number} 的寶可夢，牠就是... {name}！
    {name} 是一種非常特別的寶可夢，擁有... [在這裡可以加入對該寶可夢的具體描述，例如屬性、習性、技能等]...
    我希望你和 {name} 在未來的旅程中能成為最好的夥伴！
    ",
        number = pokedex_number,
        name = pokemon_name
    )
}

/// Handler set backing the MCP tools and the local CLI commands.
#[derive(Debug, Clone)]
pub struct Pokedex {
    client: PokeApiClient,
}

impl Pokedex {
    pub fn new(client: PokeApiClient) -> Self {
        Self { client }
    }

    /// `get_pokemon_info`
    pub async fn info(&self, name: &str) -> String {
        match self.client.fetch(name).await {
            Some(pokemon) => render_info(&pokemon),
            None => not_found_message(name),
        }
    }

    /// `create_tournament_squad`: look up each popular Pokémon in order,
    /// dropping the ones that fail.
    pub async fn tournament_squad(&self) -> String {
        let mut squad = Vec::with_capacity(POPULAR_POKEMON.len());
        for name in POPULAR_POKEMON {
            match self.client.fetch(&name.to_lowercase()).await {
                Some(pokemon) => squad.push(capitalize(&pokemon.name)),
                None => debug!(name, "Skipping squad member"),
            }
        }
        info!(size = squad.len(), "Built tournament squad");
        render_squad(&squad)
    }

    /// `list_popular_pokemon`
    pub fn popular(&self) -> String {
        render_popular()
    }

    /// `introduce_pokemon_prompt`
    pub fn introduce(&self, pokemon_name: &str, pokedex_number: i64) -> String {
        render_introduction(pokemon_name, pokedex_number)
    }
}
