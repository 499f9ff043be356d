//! MCP server (stdio transport).

use crate::config::Config;
use crate::error::Error;
use crate::mcp;

/// Run MCP server on stdio.
pub async fn run(config: &Config) -> Result<(), Error> {
    mcp::run_server(config).await
}
