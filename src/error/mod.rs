//! Error types and handling module.
//!
//! Defines all application-specific error types and conversions.

use rmcp::ErrorData as McpError;
use thiserror::Error;

use crate::types::ChainId;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// RPC or contract errors.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Transport errors.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Invalid EVM address.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Amount missing, malformed, or not positive.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// A required tool argument was not supplied.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Symbol not present in the token directory.
    #[error("Token not found: {0}")]
    TokenNotFound(String),

    /// Symbol only resolved through the other chain's table.
    #[error("{symbol} is not listed on {chain}")]
    TokenNotOnChain { symbol: String, chain: ChainId },

    /// Both sides of a swap resolved to the same token.
    #[error("Cannot swap {0} for itself")]
    SameToken(String),

    /// No swap contract configured for the chain.
    #[error("Swaps are not available on {0}: no swap contract configured")]
    UnsupportedChain(ChainId),

    /// Wallet-related errors.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Chat model or agent loop failure.
    #[error("Agent error: {0}")]
    Agent(String),
}

impl From<alloy::transports::TransportError> for AppError {
    fn from(err: alloy::transports::TransportError) -> Self {
        AppError::Transport(err.to_string())
    }
}

impl From<alloy::contract::Error> for AppError {
    fn from(err: alloy::contract::Error) -> Self {
        AppError::Rpc(err.to_string())
    }
}

impl From<alloy::signers::local::LocalSignerError> for AppError {
    fn from(err: alloy::signers::local::LocalSignerError) -> Self {
        AppError::Wallet(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Agent(err.to_string())
    }
}

impl From<AppError> for McpError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::InvalidAddress(_)
            | AppError::InvalidAmount(_)
            | AppError::MissingField(_)
            | AppError::TokenNotFound(_)
            | AppError::TokenNotOnChain { .. }
            | AppError::SameToken(_)
            | AppError::Parse(_) => McpError::invalid_params(err.to_string(), None),
            AppError::Config(_) | AppError::UnsupportedChain(_) => {
                McpError::invalid_request(err.to_string(), None)
            }
            _ => McpError::internal_error(err.to_string(), None),
        }
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
