//! MCP server implementation.

use std::sync::Arc;

use rmcp::{
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{Implementation, ServerCapabilities, ServerInfo, Tool},
    schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};

use crate::{
    config::Config,
    error::AppError,
    services::{OnChainSubmitter, SwapDispatcher, SwapSubmitter, TokenDirectory},
    types::{parse_address, ChainId, SwapRequest, TokenAddressLookup, TokenSymbolLookup},
};

/// Token swap MCP server.
///
/// Exposes the swap dispatcher and the token directory as tools.
#[derive(Clone)]
pub struct TokenSwapServer {
    dispatcher: SwapDispatcher,
    directory: Arc<TokenDirectory>,
    tool_router: ToolRouter<Self>,
}

impl TokenSwapServer {
    /// Create a server that submits swaps on-chain.
    ///
    /// No network calls are made here; each swap opens its own connection.
    pub fn new(config: Config) -> Result<Self, AppError> {
        tracing::info!("Initializing token swap server");

        let submitter = OnChainSubmitter::new(&config)?;
        let server = Self::with_submitter(Arc::new(submitter));

        tracing::info!("Token swap server initialized successfully");

        Ok(server)
    }

    /// Create a server around any submitter.
    pub fn with_submitter(submitter: Arc<dyn SwapSubmitter>) -> Self {
        let directory = Arc::new(TokenDirectory::new());
        for chain in ChainId::ALL {
            let tokens = directory.tokens(chain).count();
            tracing::debug!(chain = %chain, tokens, "Tokens listed");
        }
        let dispatcher = SwapDispatcher::new(directory.clone(), submitter);

        Self { dispatcher, directory, tool_router: Self::tool_router() }
    }

    /// Tool definitions, with their input schemas.
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }
}

/// Input parameters for the swap_tokens tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SwapTokensInput {
    /// The token to swap from (symbol, e.g., "USDC", "cUSD", "RIF").
    pub from_token: String,
    /// The amount to swap (human-readable, e.g., "1.5").
    pub amount: String,
    /// The token to swap to (symbol, e.g., "CELO", "DOC").
    #[serde(default)]
    pub to_token: Option<String>,
    /// The wallet address that receives the swapped tokens (0x...).
    pub wallet_address: String,
    /// Set to true to swap on Rootstock. When unset the chain is inferred from the symbols.
    #[serde(default)]
    pub is_rootstock: Option<bool>,
}

/// Input parameters for the get_token_address tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTokenAddressInput {
    /// The token symbol (e.g., "cUSD", "RIF").
    pub token_name: String,
    /// Set to true to prefer Rootstock tokens.
    #[serde(default)]
    pub is_rootstock: Option<bool>,
}

/// Input parameters for the get_token_symbol tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTokenSymbolInput {
    /// The token contract address (0x...).
    pub token_address: String,
    /// Set to true to prefer Rootstock tokens.
    #[serde(default)]
    pub is_rootstock: Option<bool>,
}

/// Chain consulted first by the lookup tools.
fn lookup_hint(is_rootstock: Option<bool>) -> ChainId {
    ChainId::from_rootstock_flag(is_rootstock).unwrap_or_default()
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value).map_err(|e| McpError::internal_error(e.to_string(), None))
}

#[tool_router]
impl TokenSwapServer {
    /// Swap one token for another through the stall swap contract.
    ///
    /// Always answers with a JSON result object; failures carry
    /// `success: false` instead of an MCP error.
    #[tool(
        description = "Swap one token for another on Celo or Rootstock. Sends the swapped tokens to walletAddress."
    )]
    pub async fn swap_tokens(
        &self,
        Parameters(input): Parameters<SwapTokensInput>,
    ) -> Result<String, McpError> {
        tracing::info!(
            from = %input.from_token,
            to = ?input.to_token,
            amount = %input.amount,
            is_rootstock = ?input.is_rootstock,
            "swap_tokens called"
        );

        let request = SwapRequest {
            from_symbol: input.from_token,
            to_symbol: input.to_token,
            amount: input.amount,
            destination_wallet: input.wallet_address,
            chain_hint: ChainId::from_rootstock_flag(input.is_rootstock),
        };

        let result = self.dispatcher.dispatch(request).await;

        to_json(&result)
    }

    /// Look up the contract address of a token symbol.
    #[tool(description = "Get the address for a given token name on Celo or Rootstock")]
    pub async fn get_token_address(
        &self,
        Parameters(input): Parameters<GetTokenAddressInput>,
    ) -> Result<String, McpError> {
        tracing::info!(token = %input.token_name, "get_token_address called");

        let lookup = match self
            .directory
            .resolve_address(&input.token_name, lookup_hint(input.is_rootstock))
        {
            Some(entry) => TokenAddressLookup::resolved(&input.token_name, entry),
            None => TokenAddressLookup::missing(&input.token_name),
        };

        to_json(&lookup)
    }

    /// Look up the symbol of a token contract address.
    #[tool(description = "Get the token symbol for a contract address on Celo or Rootstock")]
    pub async fn get_token_symbol(
        &self,
        Parameters(input): Parameters<GetTokenSymbolInput>,
    ) -> Result<String, McpError> {
        tracing::info!(address = %input.token_address, "get_token_symbol called");

        let address = parse_address(&input.token_address)?;

        let lookup = match self.directory.resolve_symbol(address, lookup_hint(input.is_rootstock)) {
            Some(entry) => TokenSymbolLookup::resolved(&input.token_address, entry),
            None => TokenSymbolLookup::missing(&input.token_address),
        };

        to_json(&lookup)
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for TokenSwapServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "night-market-agent".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Night market token swap server. Provides tools for swapping tokens and \
                 looking up token addresses on Celo and Rootstock."
                    .to_string(),
            ),
        }
    }
}
