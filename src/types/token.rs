//! Token-related types and amount conversion.

use alloy::primitives::{Address, U256};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{
    error::{AppError, Result},
    types::ChainId,
};

/// A token known to the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenEntry {
    /// Display symbol (e.g., "cUSD").
    pub symbol: &'static str,
    /// Token contract address.
    pub address: Address,
    /// Decimal exponent of the smallest unit.
    pub decimals: u8,
    /// Chain the address lives on.
    pub chain: ChainId,
}

/// Response of the `get_token_address` tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAddressLookup {
    /// Name as supplied by the caller.
    pub token_name: String,
    /// Checksummed address, or "Token not found".
    pub address: String,
    /// Whether the token resolved.
    pub found: bool,
    /// Chain the resolved token lives on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<ChainId>,
    /// Decimal exponent of the resolved token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,
}

/// Response of the `get_token_symbol` tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSymbolLookup {
    /// Address as supplied by the caller.
    pub token_address: String,
    /// Symbol, or "Token not found".
    pub symbol: String,
    /// Whether the address resolved.
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<ChainId>,
}

/// Text reported in place of an address or symbol that did not resolve.
pub const TOKEN_NOT_FOUND: &str = "Token not found";

impl TokenAddressLookup {
    pub fn resolved(token_name: &str, entry: &TokenEntry) -> Self {
        Self {
            token_name: token_name.to_string(),
            address: entry.address.to_checksum(None),
            found: true,
            chain: Some(entry.chain),
            decimals: Some(entry.decimals),
        }
    }

    pub fn missing(token_name: &str) -> Self {
        Self {
            token_name: token_name.to_string(),
            address: TOKEN_NOT_FOUND.to_string(),
            found: false,
            chain: None,
            decimals: None,
        }
    }
}

impl TokenSymbolLookup {
    pub fn resolved(token_address: &str, entry: &TokenEntry) -> Self {
        Self {
            token_address: token_address.to_string(),
            symbol: entry.symbol.to_string(),
            found: true,
            chain: Some(entry.chain),
        }
    }

    pub fn missing(token_address: &str) -> Self {
        Self {
            token_address: token_address.to_string(),
            symbol: TOKEN_NOT_FOUND.to_string(),
            found: false,
            chain: None,
        }
    }
}

/// Parse a human-readable amount and require it to be strictly positive.
pub fn parse_positive_amount(amount: &str) -> Result<Decimal> {
    let trimmed = amount.trim();

    if trimmed.is_empty() {
        return Err(AppError::InvalidAmount("Amount cannot be empty".to_string()));
    }

    let value = Decimal::from_str(trimmed)
        .map_err(|_| AppError::InvalidAmount(format!("'{}' is not a decimal number", trimmed)))?;

    if value <= Decimal::ZERO {
        return Err(AppError::InvalidAmount(format!(
            "Amount must be greater than zero, got {}",
            trimmed
        )));
    }

    Ok(value)
}

/// Convert a positive amount into smallest units, truncating extra digits.
///
/// The result is never below one unit, so a dust amount still produces a
/// non-zero write.
pub fn to_smallest_unit(amount: Decimal, decimals: u8) -> Result<U256> {
    let units = parse_units(&amount.to_string(), decimals).map_err(AppError::InvalidAmount)?;
    Ok(units.max(U256::from(1u64)))
}

/// Parse a human-readable amount string to U256 with decimals.
///
/// Digits past `decimals` are dropped.
pub fn parse_units(amount: &str, decimals: u8) -> std::result::Result<U256, String> {
    let amount = amount.trim();

    if amount.is_empty() {
        return Err("Amount cannot be empty".to_string());
    }

    if amount.starts_with('-') {
        return Err("Amount cannot be negative".to_string());
    }

    let decimals = decimals as usize;
    let multiplier = U256::from(10u64).pow(U256::from(decimals));

    let (integer, fraction) = match amount.split_once('.') {
        Some((_, f)) if f.contains('.') => return Err("Invalid amount format".to_string()),
        Some((i, f)) => (i, f),
        None => (amount, ""),
    };

    let mut fraction = fraction.to_string();
    if fraction.len() > decimals {
        fraction.truncate(decimals);
    } else {
        fraction.push_str(&"0".repeat(decimals - fraction.len()));
    }

    let integer_value = if integer.is_empty() {
        U256::ZERO
    } else {
        integer.parse::<U256>().map_err(|e| format!("Invalid integer part: {}", e))?
    };

    let fraction_value = if fraction.is_empty() {
        U256::ZERO
    } else {
        fraction.parse::<U256>().map_err(|e| format!("Invalid fraction part: {}", e))?
    };

    integer_value
        .checked_mul(multiplier)
        .and_then(|scaled| scaled.checked_add(fraction_value))
        .ok_or_else(|| format!("Amount {} overflows 256 bits", amount))
}
