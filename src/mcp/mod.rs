//! MCP (Model Context Protocol) server for AI tools.
//!
//! Tools: `get_pokemon_info`, `create_tournament_squad`, `list_popular_pokemon`.
//! Prompts: `introduce_pokemon_prompt`.

use rmcp::handler::server::router::prompt::PromptRouter;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, GetPromptRequestParam, GetPromptResult, Implementation,
    ListPromptsResult, PaginatedRequestParam, PromptMessage, PromptMessageRole,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{
    prompt, prompt_handler, prompt_router, schemars, tool, tool_handler, tool_router,
    transport::stdio, ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Error;
use crate::pokeapi::PokeApiClient;
use crate::pokedex::Pokedex;

/// Server info.
const SERVER_NAME: &str = "poke";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

const INSTRUCTIONS: &str = "Pokémon data from PokeAPI. Use get_pokemon_info for types, abilities \
and base stats of one Pokémon, create_tournament_squad for a ready-made team, and \
list_popular_pokemon for tournament favourites.";

// get_pokemon_info arguments
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PokemonInfoRequest {
    #[schemars(description = "Pokémon name, e.g. \"charizard\" (case-insensitive)")]
    pub name: String,
}

// introduce_pokemon_prompt arguments
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct IntroducePokemonArgs {
    #[schemars(description = "Name of the Pokémon to introduce")]
    pub pokemon_name: String,
    #[schemars(description = "National Pokédex number")]
    pub pokedex_number: i64,
}

/// Poke MCP server.
#[derive(Clone)]
pub struct PokeServer {
    pokedex: Pokedex,
    tool_router: ToolRouter<Self>,
    prompt_router: PromptRouter<Self>,
}

#[tool_router]
impl PokeServer {
    pub fn new(pokedex: Pokedex) -> Self {
        Self {
            pokedex,
            tool_router: Self::tool_router(),
            prompt_router: Self::prompt_router(),
        }
    }

    #[tool(description = "Get detailed info about a Pokémon by name.")]
    async fn get_pokemon_info(
        &self,
        Parameters(request): Parameters<PokemonInfoRequest>,
    ) -> Result<CallToolResult, McpError> {
        debug!(tool = "get_pokemon_info", name = %request.name, "MCP tools/call");
        let text = self.pokedex.info(&request.name).await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "Create a powerful squad of Pokémon for a tournament.")]
    async fn create_tournament_squad(&self) -> Result<CallToolResult, McpError> {
        debug!(tool = "create_tournament_squad", "MCP tools/call");
        let text = self.pokedex.tournament_squad().await;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "List popular tournament-ready Pokémon.")]
    async fn list_popular_pokemon(&self) -> Result<CallToolResult, McpError> {
        debug!(tool = "list_popular_pokemon", "MCP tools/call");
        Ok(CallToolResult::success(vec![Content::text(
            self.pokedex.popular(),
        )]))
    }
}

#[prompt_router]
impl PokeServer {
    #[prompt(
        name = "introduce_pokemon_prompt",
        description = "Generates a user message simulating Professor Oak introducing a Pokémon."
    )]
    async fn introduce_pokemon_prompt(
        &self,
        Parameters(args): Parameters<IntroducePokemonArgs>,
    ) -> Result<Vec<PromptMessage>, McpError> {
        debug!(prompt = "introduce_pokemon_prompt", "MCP prompts/get");
        let text = self
            .pokedex
            .introduce(&args.pokemon_name, args.pokedex_number);
        Ok(vec![PromptMessage::new_text(PromptMessageRole::User, text)])
    }
}

#[tool_handler]
#[prompt_handler]
impl ServerHandler for PokeServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }
}

/// Run the MCP server (stdio mode) until the client disconnects.
pub async fn run_server(config: &Config) -> Result<(), Error> {
    let client = PokeApiClient::new(&config.api)?;
    info!(base_url = %client.base_url(), "Starting MCP server");

    let server = PokeServer::new(Pokedex::new(client));

    let service = server
        .serve(stdio())
        .await
        .map_err(|e| Error::Mcp(e.to_string()))?;
    service
        .waiting()
        .await
        .map_err(|e| Error::Mcp(e.to_string()))?;

    info!("MCP server stopped");
    Ok(())
}
