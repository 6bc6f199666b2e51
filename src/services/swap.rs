//! Swap dispatch service.
//!
//! Turns a tool-level swap request into exactly one contract write and shapes
//! the outcome. Every failure is reported as a [`SwapResult::Failure`]; nothing
//! is retried.

use std::sync::Arc;

use alloy::primitives::{Address, TxHash};
use async_trait::async_trait;

use crate::{
    chain::{ChainClient, SwapSigner},
    config::Config,
    error::{AppError, Result},
    services::TokenDirectory,
    types::{
        parse_address, parse_positive_amount, to_smallest_unit, ChainId, SwapCall, SwapReceipt,
        SwapRequest, SwapResult,
    },
};

// ============================================================================
// Submitter
// ============================================================================

/// Outbound side of a swap: sends one resolved write and reports its hash.
#[async_trait]
pub trait SwapSubmitter: Send + Sync {
    async fn submit_swap(&self, call: SwapCall) -> Result<TxHash>;
}

/// Submits swaps to the configured Celo and Rootstock contracts.
#[derive(Debug, Clone)]
pub struct OnChainSubmitter {
    celo: ChainClient,
    rootstock: ChainClient,
    signer: SwapSigner,
}

impl OnChainSubmitter {
    /// Create a submitter from configuration. No network calls are made.
    pub fn new(config: &Config) -> Result<Self> {
        let signer = SwapSigner::from_private_key(&config.private_key)?;
        let celo = ChainClient::new(ChainId::Celo, config.endpoint(ChainId::Celo))?;
        let rootstock = ChainClient::new(ChainId::Rootstock, config.endpoint(ChainId::Rootstock))?;

        Ok(Self { celo, rootstock, signer })
    }

    fn client(&self, chain: ChainId) -> &ChainClient {
        match chain {
            ChainId::Celo => &self.celo,
            ChainId::Rootstock => &self.rootstock,
        }
    }
}

#[async_trait]
impl SwapSubmitter for OnChainSubmitter {
    async fn submit_swap(&self, call: SwapCall) -> Result<TxHash> {
        self.client(call.chain)
            .submit_swap(&self.signer, call.amount_in, call.token_out, call.user_wallet)
            .await
    }
}

// ============================================================================
// Dispatcher
// ============================================================================

/// Validates, resolves, and submits swaps.
#[derive(Clone)]
pub struct SwapDispatcher {
    directory: Arc<TokenDirectory>,
    submitter: Arc<dyn SwapSubmitter>,
}

impl SwapDispatcher {
    /// Create a new dispatcher.
    pub fn new(directory: Arc<TokenDirectory>, submitter: Arc<dyn SwapSubmitter>) -> Self {
        Self { directory, submitter }
    }

    /// Run a swap request to completion. Never fails; errors become
    /// [`SwapResult::Failure`].
    pub async fn dispatch(&self, request: SwapRequest) -> SwapResult {
        tracing::info!(
            from = %request.from_symbol,
            to = ?request.to_symbol,
            amount = %request.amount,
            wallet = %request.destination_wallet,
            chain_hint = ?request.chain_hint,
            "Dispatching swap"
        );

        match self.try_dispatch(&request).await {
            Ok(receipt) => SwapResult::Success(receipt),
            Err(err) => {
                tracing::warn!(error = %err, from = %request.from_symbol, "Swap failed");
                SwapResult::failure(&err)
            }
        }
    }

    async fn try_dispatch(&self, request: &SwapRequest) -> Result<SwapReceipt> {
        // Validate
        let to_symbol = request
            .to_symbol
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(AppError::MissingField("toToken"))?;

        let from_symbol = Some(request.from_symbol.trim())
            .filter(|s| !s.is_empty())
            .ok_or(AppError::MissingField("fromToken"))?;

        let amount = parse_positive_amount(&request.amount)?;
        let user_wallet = parse_wallet(&request.destination_wallet)?;

        // Classify
        let chain = self.directory.infer_chain(from_symbol, to_symbol, request.chain_hint);

        // Resolve
        let from_entry = self
            .directory
            .resolve_address(from_symbol, chain)
            .ok_or_else(|| AppError::TokenNotFound(from_symbol.to_string()))?;
        let to_entry = self
            .directory
            .resolve_address(to_symbol, chain)
            .ok_or_else(|| AppError::TokenNotFound(to_symbol.to_string()))?;

        for entry in [from_entry, to_entry] {
            if entry.chain != chain {
                return Err(AppError::TokenNotOnChain {
                    symbol: entry.symbol.to_string(),
                    chain,
                });
            }
        }

        if from_entry.address == to_entry.address {
            return Err(AppError::SameToken(from_entry.symbol.to_string()));
        }

        // Convert
        let amount_in = to_smallest_unit(amount, from_entry.decimals)?;

        let call = SwapCall { chain, amount_in, token_out: to_entry.address, user_wallet };

        tracing::debug!(
            chain = %chain,
            from = %from_entry.address,
            to = %to_entry.address,
            amount_in = %amount_in,
            "Swap resolved"
        );

        // Dispatch
        let tx_hash = self.submitter.submit_swap(call).await?;

        Ok(SwapReceipt::new(from_entry, to_entry, &request.amount, &call, tx_hash))
    }
}

/// Parse the destination wallet; blank counts as missing.
fn parse_wallet(s: &str) -> Result<Address> {
    if s.trim().is_empty() {
        return Err(AppError::MissingField("walletAddress"));
    }
    parse_address(s)
}
