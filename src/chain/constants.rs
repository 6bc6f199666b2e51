//! Chain network constants.
//!
//! Contains chain IDs, default RPC endpoints, and swap contract addresses.

use alloy::primitives::{address, Address};

// ============================================================================
// Chain IDs
// ============================================================================

/// Celo Mainnet chain ID.
pub const CELO_MAINNET_CHAIN_ID: u64 = 42220;

/// Rootstock Mainnet chain ID.
pub const ROOTSTOCK_MAINNET_CHAIN_ID: u64 = 30;

// ============================================================================
// Default RPC Endpoints
// ============================================================================

/// Public Celo JSON-RPC endpoint.
pub const DEFAULT_CELO_RPC_URL: &str = "https://celo.drpc.org";

/// Public Rootstock JSON-RPC endpoint.
pub const DEFAULT_ROOTSTOCK_RPC_URL: &str = "https://public-node.rsk.co";

// ============================================================================
// Swap Contracts
// ============================================================================

/// Stall swap contract deployed on Celo Mainnet.
pub const CELO_SWAP_CONTRACT: Address = address!("0c14591696e97c8824852143d430A786Fb3992Db");
