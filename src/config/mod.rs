//! Configuration management module.
//!
//! Handles loading configuration from environment variables.

use std::env;

use alloy::primitives::Address;

use crate::{
    chain::constants::{CELO_SWAP_CONTRACT, DEFAULT_CELO_RPC_URL, DEFAULT_ROOTSTOCK_RPC_URL},
    error::AppError,
    types::ChainId,
};

/// Default OpenAI-compatible API base.
pub const DEFAULT_AGENT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default chat model.
pub const DEFAULT_AGENT_MODEL: &str = "gpt-4o-mini";

/// Default cap on model round-trips per agent message.
pub const DEFAULT_AGENT_MAX_STEPS: usize = 10;

/// Default HTTP port for the agent server.
pub const DEFAULT_HTTP_PORT: u16 = 3000;

/// RPC endpoint and swap contract for one chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainEndpoint {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,
    /// Swap contract, if deployed on this chain.
    pub swap_contract: Option<Address>,
}

/// Chat model settings for the agent server.
#[derive(Clone)]
pub struct AgentConfig {
    /// API key; only the HTTP agent needs it.
    pub api_key: Option<String>,
    /// API base URL (without `/chat/completions`).
    pub base_url: String,
    /// Model name.
    pub model: String,
    /// Maximum model round-trips per message.
    pub max_steps: usize,
}

/// Application configuration.
#[derive(Clone)]
pub struct Config {
    /// Celo endpoint.
    pub celo: ChainEndpoint,
    /// Rootstock endpoint.
    pub rootstock: ChainEndpoint,
    /// Private key for the swap signer (hex string).
    pub private_key: String,
    /// Chat model settings.
    pub agent: AgentConfig,
    /// HTTP listen port.
    pub http_port: u16,
    /// Logging level (default: info).
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `SWAP_SIGNER_PRIVATE_KEY`: Private key of the account that submits swaps
    ///
    /// Optional environment variables:
    /// - `CELO_RPC_URL`, `ROOTSTOCK_RPC_URL`: JSON-RPC endpoints
    /// - `CELO_SWAP_CONTRACT`, `ROOTSTOCK_SWAP_CONTRACT`: swap contract addresses
    /// - `OPENAI_API_KEY`, `OPENAI_BASE_URL`, `AGENT_MODEL`, `AGENT_MAX_STEPS`
    /// - `PORT`: HTTP port (default: 3000)
    /// - `LOG_LEVEL`: Logging level (default: info)
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let private_key = get("SWAP_SIGNER_PRIVATE_KEY").ok_or_else(|| {
            AppError::Config("SWAP_SIGNER_PRIVATE_KEY environment variable not set".into())
        })?;

        let celo = ChainEndpoint {
            rpc_url: get("CELO_RPC_URL").unwrap_or_else(|| DEFAULT_CELO_RPC_URL.to_string()),
            swap_contract: Some(
                parse_contract("CELO_SWAP_CONTRACT", get("CELO_SWAP_CONTRACT"))?
                    .unwrap_or(CELO_SWAP_CONTRACT),
            ),
        };

        let rootstock = ChainEndpoint {
            rpc_url: get("ROOTSTOCK_RPC_URL")
                .unwrap_or_else(|| DEFAULT_ROOTSTOCK_RPC_URL.to_string()),
            swap_contract: parse_contract(
                "ROOTSTOCK_SWAP_CONTRACT",
                get("ROOTSTOCK_SWAP_CONTRACT"),
            )?,
        };

        let max_steps = match get("AGENT_MAX_STEPS") {
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|steps| *steps > 0)
                .ok_or_else(|| AppError::Config(format!("Invalid AGENT_MAX_STEPS: {}", raw)))?,
            None => DEFAULT_AGENT_MAX_STEPS,
        };

        let agent = AgentConfig {
            api_key: get("OPENAI_API_KEY"),
            base_url: get("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_AGENT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            model: get("AGENT_MODEL").unwrap_or_else(|| DEFAULT_AGENT_MODEL.to_string()),
            max_steps,
        };

        let http_port = match get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| AppError::Config(format!("Invalid PORT: {}", raw)))?,
            None => DEFAULT_HTTP_PORT,
        };

        let log_level = get("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Ok(Self { celo, rootstock, private_key, agent, http_port, log_level })
    }

    /// Endpoint settings for a chain.
    pub fn endpoint(&self, chain: ChainId) -> &ChainEndpoint {
        match chain {
            ChainId::Celo => &self.celo,
            ChainId::Rootstock => &self.rootstock,
        }
    }
}

fn parse_contract(key: &str, raw: Option<String>) -> Result<Option<Address>, AppError> {
    raw.map(|value| {
        value
            .parse::<Address>()
            .map_err(|e| AppError::Config(format!("Invalid {} '{}': {}", key, value, e)))
    })
    .transpose()
}

impl std::fmt::Debug for AgentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_steps", &self.max_steps)
            .finish()
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("celo", &self.celo)
            .field("rootstock", &self.rootstock)
            .field("private_key", &"<redacted>")
            .field("agent", &self.agent)
            .field("http_port", &self.http_port)
            .field("log_level", &self.log_level)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn load(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_private_key_is_required() {
        match load(&[]) {
            Err(AppError::Config(msg)) => assert!(msg.contains("SWAP_SIGNER_PRIVATE_KEY")),
            other => panic!("expected config error, got {other:?}"),
        }

        // Blank counts as unset
        assert!(load(&[("SWAP_SIGNER_PRIVATE_KEY", "  ")]).is_err());
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("SWAP_SIGNER_PRIVATE_KEY", KEY)]).unwrap();

        assert_eq!(config.celo.rpc_url, DEFAULT_CELO_RPC_URL);
        assert_eq!(config.celo.swap_contract, Some(CELO_SWAP_CONTRACT));
        assert_eq!(config.rootstock.rpc_url, DEFAULT_ROOTSTOCK_RPC_URL);
        assert_eq!(config.rootstock.swap_contract, None);
        assert_eq!(config.agent.api_key, None);
        assert_eq!(config.agent.base_url, DEFAULT_AGENT_BASE_URL);
        assert_eq!(config.agent.model, DEFAULT_AGENT_MODEL);
        assert_eq!(config.agent.max_steps, 10);
        assert_eq!(config.http_port, 3000);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("SWAP_SIGNER_PRIVATE_KEY", KEY),
            ("ROOTSTOCK_RPC_URL", "http://localhost:4444"),
            ("ROOTSTOCK_SWAP_CONTRACT", "0x0000000000000000000000000000000000000042"),
            ("OPENAI_BASE_URL", "http://localhost:8080/v1/"),
            ("AGENT_MAX_STEPS", "3"),
            ("PORT", "8088"),
        ])
        .unwrap();

        assert_eq!(config.endpoint(ChainId::Rootstock).rpc_url, "http://localhost:4444");
        assert!(config.endpoint(ChainId::Rootstock).swap_contract.is_some());
        assert_eq!(config.agent.base_url, "http://localhost:8080/v1");
        assert_eq!(config.agent.max_steps, 3);
        assert_eq!(config.http_port, 8088);
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let cases = [
            ("CELO_SWAP_CONTRACT", "0x1234"),
            ("AGENT_MAX_STEPS", "0"),
            ("AGENT_MAX_STEPS", "many"),
            ("PORT", "99999"),
        ];

        for (key, value) in cases {
            let result = load(&[("SWAP_SIGNER_PRIVATE_KEY", KEY), (key, value)]);
            assert!(matches!(result, Err(AppError::Config(_))), "{key}={value}");
        }
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config =
            load(&[("SWAP_SIGNER_PRIVATE_KEY", KEY), ("OPENAI_API_KEY", "sk-test-secret")])
                .unwrap();
        let rendered = format!("{config:?}");

        assert!(!rendered.contains("ac0974bec39a17e36ba4a6b4d238ff944bacb478"));
        assert!(!rendered.contains("sk-test-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
