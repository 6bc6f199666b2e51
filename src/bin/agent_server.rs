//! Night Market Agent HTTP Server
//!
//! Serves `POST /api/agent/message` for the game frontend.

use std::{net::SocketAddr, sync::Arc};

use night_market_agent::{
    agent::{MarketAgent, OpenAiChatModel},
    http::{self, AppState},
    init_tracing, Config, TokenSwapServer,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    init_tracing(&config.log_level);

    tracing::info!(model = %config.agent.model, "Starting night market agent server");

    let model = OpenAiChatModel::new(&config.agent)?;
    let max_steps = config.agent.max_steps;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));

    let server = TokenSwapServer::new(config)?;
    let agent = MarketAgent::new(server, Arc::new(model), max_steps);

    http::serve(addr, AppState { agent: Arc::new(agent) }).await?;

    Ok(())
}
