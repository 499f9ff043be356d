//! MCP configuration merge.
//!
//! Registers the poke server in an AI tool's MCP configuration.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde_json::{json, Map, Value};
use tracing::info;

use crate::error::Error;

/// Key the server is registered under.
const SERVER_KEY: &str = "poke";

/// MCP client whose configuration should list the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InstallTarget {
    /// Claude Code: `<dir>/.mcp.json`
    Claude,
    /// Cursor: `<dir>/.cursor/mcp.json`
    Cursor,
    /// Codex CLI: `~/.codex/config.toml`
    Codex,
}

/// poke MCP server configuration.
pub fn poke_server_entry() -> Value {
    json!({
        "command": "poke",
        "args": ["serve"]
    })
}

/// Config file a target reads.
pub fn config_path(target: InstallTarget, project_dir: &Path, home: &Path) -> PathBuf {
    match target {
        InstallTarget::Claude => project_dir.join(".mcp.json"),
        InstallTarget::Cursor => project_dir.join(".cursor").join("mcp.json"),
        InstallTarget::Codex => home.join(".codex").join("config.toml"),
    }
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".poke.bak");
    PathBuf::from(name)
}

/// Read an existing config, copying it to `backup_path` first.
fn read_with_backup(path: &Path, backup_path: &Path) -> Result<String, Error> {
    if !path.exists() {
        return Ok(String::new());
    }
    std::fs::copy(path, backup_path)?;
    Ok(std::fs::read_to_string(path)?)
}

/// Merge the poke server into a JSON MCP config.
///
/// Handles formats:
/// - `.mcp.json` (Claude Code): `{ "mcpServers": { "poke": {...} } }`
/// - `.cursor/mcp.json` (Cursor): `{ "mcpServers": { "poke": {...} } }`
pub fn merge_json_mcp_config(path: &Path, backup_path: &Path) -> Result<(), Error> {
    let content = read_with_backup(path, backup_path)?;

    let config: Value = if content.trim().is_empty() {
        json!({})
    } else {
        serde_json::from_str(&content)?
    };

    let mut root = match config {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    let servers = root
        .entry("mcpServers")
        .or_insert(Value::Object(Map::new()));
    if !servers.is_object() {
        *servers = Value::Object(Map::new());
    }
    if let Some(servers) = servers.as_object_mut() {
        servers.insert(SERVER_KEY.to_string(), poke_server_entry());
    }

    let output = serde_json::to_string_pretty(&Value::Object(root))?;
    std::fs::write(path, output)?;

    Ok(())
}

/// Merge the poke server into a TOML MCP config (Codex CLI).
///
/// Format: `[mcp_servers.poke]`
pub fn merge_toml_mcp_config(path: &Path, backup_path: &Path) -> Result<(), Error> {
    let content = read_with_backup(path, backup_path)?;

    let mut config: toml::Table = if content.trim().is_empty() {
        toml::Table::new()
    } else {
        content.parse()?
    };

    let servers = config
        .entry("mcp_servers")
        .or_insert(toml::Value::Table(toml::Table::new()));
    if !servers.is_table() {
        *servers = toml::Value::Table(toml::Table::new());
    }

    let mut poke = toml::Table::new();
    poke.insert(
        "command".to_string(),
        toml::Value::String("poke".to_string()),
    );
    poke.insert(
        "args".to_string(),
        toml::Value::Array(vec![toml::Value::String("serve".to_string())]),
    );
    if let Some(servers) = servers.as_table_mut() {
        servers.insert(SERVER_KEY.to_string(), toml::Value::Table(poke));
    }

    let output = toml::to_string_pretty(&config)?;
    std::fs::write(path, output)?;

    Ok(())
}

/// Register the server for `target`, returning the file written.
pub fn install(target: InstallTarget, project_dir: &Path, home: &Path) -> Result<PathBuf, Error> {
    let path = config_path(target, project_dir, home);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let backup = backup_path(&path);

    match target {
        InstallTarget::Claude | InstallTarget::Cursor => merge_json_mcp_config(&path, &backup)?,
        InstallTarget::Codex => merge_toml_mcp_config(&path, &backup)?,
    }

    info!(path = %path.display(), "Registered MCP server");
    Ok(path)
}

/// `poke install <target> [--dir DIR]`
pub fn run(target: InstallTarget, dir: Option<PathBuf>) -> Result<(), Error> {
    let project_dir = match dir {
        Some(d) => d,
        None => std::env::current_dir()?,
    };
    let home = dirs::home_dir().ok_or(Error::HomeDirNotFound)?;

    let path = install(target, &project_dir, &home)?;
    println!("Registered poke MCP server in {}", path.display());
    Ok(())
}
