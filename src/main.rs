//! Night Market MCP Server
//!
//! Serves the token swap tools over stdio.

use rmcp::ServiceExt;

use night_market_agent::{init_tracing, Config, TokenSwapServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_tracing(&config.log_level);

    tracing::info!("Starting night market MCP server");

    // Create the server
    let server = TokenSwapServer::new(config)?;

    // Run with stdio transport
    let transport = rmcp::transport::stdio();
    let running = server.serve(transport).await?;

    // Wait for the server to finish
    running.waiting().await?;

    Ok(())
}
