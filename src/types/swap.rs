//! Swap-related types.

use alloy::primitives::{Address, TxHash, U256};
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    types::{ChainId, TokenEntry},
};

/// Hint returned with every failed swap.
pub const SWAP_RETRY_HINT: &str =
    "Check the token symbols, amount, and wallet address, then try the swap again.";

/// A swap as requested by a tool caller, before any validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
    /// Symbol of the token being sold.
    pub from_symbol: String,
    /// Symbol of the token being bought.
    pub to_symbol: Option<String>,
    /// Human-readable amount of `from_symbol`.
    pub amount: String,
    /// Wallet that receives the proceeds.
    pub destination_wallet: String,
    /// Chain the caller asked for explicitly, if any.
    pub chain_hint: Option<ChainId>,
}

/// A fully resolved contract write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapCall {
    /// Chain to submit on.
    pub chain: ChainId,
    /// Input amount in the input token's smallest unit.
    pub amount_in: U256,
    /// Token the contract pays out.
    pub token_out: Address,
    /// Recipient of the payout.
    pub user_wallet: Address,
}

/// Successful swap submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SwapReceipt {
    pub success: bool,
    pub from_symbol: String,
    pub from_address: String,
    pub to_symbol: String,
    pub to_address: String,
    /// Amount as the caller wrote it.
    pub amount: String,
    /// Amount in smallest units, as sent to the contract.
    pub amount_in: String,
    pub destination_wallet: String,
    pub transaction_hash: String,
    pub chain: ChainId,
}

/// Failed swap; nothing else about the request is echoed back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SwapFailure {
    pub success: bool,
    pub error: String,
    pub details: String,
}

/// Outcome handed back to the agent runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SwapResult {
    Success(SwapReceipt),
    Failure(SwapFailure),
}

impl SwapReceipt {
    /// Assemble a receipt from the request and the submitted call.
    pub fn new(
        from: &TokenEntry,
        to: &TokenEntry,
        amount: &str,
        call: &SwapCall,
        tx_hash: TxHash,
    ) -> Self {
        Self {
            success: true,
            from_symbol: from.symbol.to_string(),
            from_address: from.address.to_checksum(None),
            to_symbol: to.symbol.to_string(),
            to_address: to.address.to_checksum(None),
            amount: amount.trim().to_string(),
            amount_in: call.amount_in.to_string(),
            destination_wallet: call.user_wallet.to_checksum(None),
            transaction_hash: tx_hash.to_string(),
            chain: call.chain,
        }
    }
}

impl SwapResult {
    /// Shape an error into the failure variant.
    pub fn failure(err: &AppError) -> Self {
        SwapResult::Failure(SwapFailure {
            success: false,
            error: err.to_string(),
            details: SWAP_RETRY_HINT.to_string(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SwapResult::Success(_))
    }
}
