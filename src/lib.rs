//! Night Market Agent Library
//!
//! Token swap tools for the night market game, on Celo and Rootstock.
//!
//! # Features
//!
//! - **Token Directory**: Static symbol/address tables with per-token decimals
//! - **Swap Dispatch**: One `swap(amountIn, tokenOut, userWallet)` write per request,
//!   with every failure shaped into a structured result
//! - **MCP Tools**: `swap_tokens`, `get_token_address`, `get_token_symbol`
//! - **Agent Endpoint**: `POST /api/agent/message` running a tool-calling chat model
//!
//! # Example
//!
//! ```rust,ignore
//! use night_market_agent::{Config, TokenSwapServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let server = TokenSwapServer::new(config)?;
//!     // Run server...
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod chain;
pub mod config;
pub mod error;
pub mod http;
pub mod mcp;
pub mod services;
pub mod types;

pub use config::Config;
pub use error::{AppError, Result};
pub use mcp::TokenSwapServer;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `log_level`.
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
