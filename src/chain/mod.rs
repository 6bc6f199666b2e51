//! EVM chain interaction module.
//!
//! Contains the per-chain client, the swap signer, and contract bindings.

pub mod client;
pub mod constants;
pub mod contracts;
pub mod wallet;

pub use client::ChainClient;
pub use wallet::SwapSigner;
