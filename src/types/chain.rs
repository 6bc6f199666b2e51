//! Supported chains.

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::{
    chain::constants::{CELO_MAINNET_CHAIN_ID, ROOTSTOCK_MAINNET_CHAIN_ID},
    error::{AppError, Result},
};

/// A network the swap tools can dispatch to.
///
/// Selects the token partition, swap contract, and RPC endpoint for a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ChainId {
    /// Celo Mainnet.
    #[default]
    Celo,
    /// Rootstock Mainnet.
    Rootstock,
}

impl ChainId {
    /// Every supported chain, in default lookup order.
    pub const ALL: [ChainId; 2] = [ChainId::Celo, ChainId::Rootstock];

    /// Numeric EVM chain ID.
    pub fn evm_chain_id(self) -> u64 {
        match self {
            ChainId::Celo => CELO_MAINNET_CHAIN_ID,
            ChainId::Rootstock => ROOTSTOCK_MAINNET_CHAIN_ID,
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            ChainId::Celo => "Celo",
            ChainId::Rootstock => "Rootstock",
        }
    }

    /// The chain consulted when a lookup misses on `self`.
    pub fn other(self) -> ChainId {
        match self {
            ChainId::Celo => ChainId::Rootstock,
            ChainId::Rootstock => ChainId::Celo,
        }
    }

    /// Map the tools' `isRootstock` flag onto an explicit chain hint.
    ///
    /// Only `true` counts as an explicit choice; `false` and an absent flag
    /// both leave the chain open to inference.
    pub fn from_rootstock_flag(flag: Option<bool>) -> Option<ChainId> {
        match flag {
            Some(true) => Some(ChainId::Rootstock),
            _ => None,
        }
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ChainId {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "celo" => Ok(ChainId::Celo),
            "rootstock" | "rsk" => Ok(ChainId::Rootstock),
            _ => Err(format!("Unsupported chain: {}", s)),
        }
    }
}

/// Parse and validate an EVM address from a string.
///
/// Validates:
/// - Address format (0x + 40 hex characters)
/// - Hex digits only; checksum casing is not enforced
pub fn parse_address(s: &str) -> Result<Address> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err(AppError::InvalidAddress("Address cannot be empty".to_string()));
    }

    if !trimmed.starts_with("0x") && !trimmed.starts_with("0X") {
        return Err(AppError::InvalidAddress(format!("Address must start with '0x': {}", s)));
    }

    if trimmed.len() != 42 {
        return Err(AppError::InvalidAddress(format!(
            "Address must be 42 characters (0x + 40 hex chars), got {}: {}",
            trimmed.len(),
            s
        )));
    }

    format!("0x{}", &trimmed[2..])
        .parse::<Address>()
        .map_err(|e| AppError::InvalidAddress(format!("Invalid address format '{}': {}", s, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evm_chain_ids() {
        assert_eq!(ChainId::Celo.evm_chain_id(), 42220);
        assert_eq!(ChainId::Rootstock.evm_chain_id(), 30);
    }

    #[test]
    fn test_other_is_an_involution() {
        for chain in ChainId::ALL {
            assert_ne!(chain.other(), chain);
            assert_eq!(chain.other().other(), chain);
        }
    }

    #[test]
    fn test_rootstock_flag() {
        assert_eq!(ChainId::from_rootstock_flag(Some(true)), Some(ChainId::Rootstock));
        assert_eq!(ChainId::from_rootstock_flag(Some(false)), None);
        assert_eq!(ChainId::from_rootstock_flag(None), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("celo".parse::<ChainId>().unwrap(), ChainId::Celo);
        assert_eq!("CELO".parse::<ChainId>().unwrap(), ChainId::Celo);
        assert_eq!("Rootstock".parse::<ChainId>().unwrap(), ChainId::Rootstock);
        assert_eq!(" rsk ".parse::<ChainId>().unwrap(), ChainId::Rootstock);
        assert!("ethereum".parse::<ChainId>().is_err());
        assert!("".parse::<ChainId>().is_err());
    }

    #[test]
    fn test_parse_address() {
        let expected = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";

        let parsed = parse_address(" 0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266 ").unwrap();
        assert_eq!(format!("{parsed:?}").to_lowercase(), expected);

        let upper = parse_address("0XF39FD6E51AAD88F6F4CE6AB8827279CFFFB92266").unwrap();
        assert_eq!(upper, parsed);
    }

    #[test]
    fn test_parse_address_rejects_malformed() {
        for input in ["", "   ", "f39Fd6e51aad88F6F4ce6aB8827279cffFb92266", "0x1234", "0x"] {
            assert!(matches!(parse_address(input), Err(AppError::InvalidAddress(_))), "{input}");
        }
        let bad_hex = format!("0x{}", "g".repeat(40));
        assert!(parse_address(&bad_hex).is_err());
    }

    #[test]
    fn test_serialization_uses_label() {
        assert_eq!(serde_json::to_string(&ChainId::Celo).unwrap(), "\"Celo\"");
        assert_eq!(serde_json::to_string(&ChainId::Rootstock).unwrap(), "\"Rootstock\"");
        assert_eq!(ChainId::Rootstock.to_string(), "Rootstock");
    }
}
