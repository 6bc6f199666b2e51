//! Business logic services module.

pub mod swap;
pub mod token_directory;

pub use swap::{OnChainSubmitter, SwapDispatcher, SwapSubmitter};
pub use token_directory::{TokenDirectory, CELO_TOKENS, ROOTSTOCK_TOKENS};
