//! Integration tests for the token lookup tools.
//!
//! Run with: `cargo test --test test_token_lookup`

mod common;

use night_market_agent::{
    mcp::{GetTokenAddressInput, GetTokenSymbolInput},
    services::{CELO_TOKENS, ROOTSTOCK_TOKENS},
    types::ChainId,
};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::Value;

async fn address_of(name: &str, is_rootstock: Option<bool>) -> Value {
    let (server, _) = common::create_test_server();
    let input = GetTokenAddressInput { token_name: name.to_string(), is_rootstock };
    let result = server.get_token_address(Parameters(input)).await.unwrap();
    serde_json::from_str(&result).unwrap()
}

/// Test a Celo symbol lookup.
#[tokio::test]
async fn test_get_cusd_address() {
    let parsed = address_of("cUSD", None).await;

    assert_eq!(parsed["tokenName"], "cUSD");
    assert_eq!(parsed["found"], true);
    assert_eq!(parsed["chain"], "Celo");
    assert_eq!(parsed["decimals"], 18);
    assert_eq!(
        parsed["address"].as_str().unwrap().to_lowercase(),
        "0x765de816845861e75a25fca122bb6898b8b1282a"
    );
}

/// Symbols match regardless of case and fall back across chains.
#[tokio::test]
async fn test_get_address_case_insensitive_with_fallback() {
    let parsed = address_of("rif", None).await;

    assert_eq!(parsed["found"], true);
    assert_eq!(parsed["chain"], "Rootstock");
    assert_eq!(parsed["tokenName"], "rif");
}

/// Every table entry is reachable through the tool.
#[tokio::test]
async fn test_get_address_for_every_token() {
    for entry in CELO_TOKENS.iter().chain(ROOTSTOCK_TOKENS.iter()) {
        let is_rootstock = entry.chain == ChainId::Rootstock;
        let parsed = address_of(entry.symbol, Some(is_rootstock)).await;

        assert_eq!(parsed["found"], true, "{} should resolve", entry.symbol);
        assert_eq!(
            parsed["address"].as_str().unwrap().to_lowercase(),
            entry.address.to_string().to_lowercase()
        );
    }
}

/// Unknown symbols report not-found instead of an error.
#[tokio::test]
async fn test_get_address_not_found() {
    let parsed = address_of("SHIB", Some(true)).await;

    assert_eq!(parsed["found"], false);
    assert_eq!(parsed["address"], "Token not found");
    assert!(parsed.get("chain").is_none());
}

/// Test an address to symbol lookup.
#[tokio::test]
async fn test_get_token_symbol() {
    let (server, _) = common::create_test_server();
    let input = GetTokenSymbolInput {
        token_address: "0x2acc95758f8b5f583470ba265eb685a8f45fc9d5".to_string(),
        is_rootstock: None,
    };

    let result = server.get_token_symbol(Parameters(input)).await.unwrap();
    let parsed: Value = serde_json::from_str(&result).unwrap();

    assert_eq!(parsed["symbol"], "RIF");
    assert_eq!(parsed["found"], true);
    assert_eq!(parsed["chain"], "Rootstock");
}

/// Unknown addresses are not-found; malformed ones are invalid params.
#[tokio::test]
async fn test_get_token_symbol_misses() {
    let (server, _) = common::create_test_server();

    let unknown = GetTokenSymbolInput {
        token_address: "0x0000000000000000000000000000000000000001".to_string(),
        is_rootstock: None,
    };
    let parsed: Value =
        serde_json::from_str(&server.get_token_symbol(Parameters(unknown)).await.unwrap())
            .unwrap();
    assert_eq!(parsed["found"], false);

    let malformed =
        GetTokenSymbolInput { token_address: "not-an-address".to_string(), is_rootstock: None };
    let err = server.get_token_symbol(Parameters(malformed)).await.unwrap_err();
    assert_eq!(err.code, rmcp::model::ErrorCode::INVALID_PARAMS);
}
