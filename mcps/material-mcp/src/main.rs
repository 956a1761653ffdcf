//! Material MCP - Material Design 3 theme and WCAG contrast server over stdio

use std::path::PathBuf;

use clap::Parser;
use material_mcp::{MaterialConfig, MaterialMcpServer};
use rmcp::{transport::stdio, ServiceExt};

#[derive(Parser, Debug)]
#[command(name = "material-mcp")]
#[command(about = "Material Design 3 theme generation and WCAG contrast MCP server")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, env = "MATERIAL_MCP_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let discovery = MaterialConfig::discover(cli.config.as_deref());
    mcp_common::init_tracing(
        "material_mcp",
        &discovery.config.logging.tracing_options(),
    )?;

    for skipped in &discovery.skipped {
        tracing::warn!("Skipping config: {}", skipped);
    }
    match &discovery.source {
        Some(path) => tracing::info!("Loaded config from {}", path.display()),
        None => tracing::info!("No config file found, using defaults"),
    }

    tracing::info!("Starting Material MCP Server");

    let server = MaterialMcpServer::with_config(discovery.config);
    let service = server.serve(stdio()).await?;

    tracing::info!("Server running, waiting for requests...");
    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
