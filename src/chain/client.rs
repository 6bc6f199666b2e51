//! Per-chain RPC client for swap writes.

use alloy::{
    primitives::{Address, TxHash, U256},
    providers::{Provider, ProviderBuilder},
    transports::http::reqwest::Url,
};

use crate::{
    chain::{contracts::IStallSwap, SwapSigner},
    config::ChainEndpoint,
    error::{AppError, Result},
    types::ChainId,
};

/// RPC endpoint and swap contract for one chain.
///
/// Holds no connection: every write builds its own transport and signing
/// filler, so concurrent swaps never share provider state.
#[derive(Debug, Clone)]
pub struct ChainClient {
    chain: ChainId,
    rpc_url: Url,
    swap_contract: Option<Address>,
}

impl ChainClient {
    /// Create a client for `chain`. The URL is validated; no network calls are made.
    pub fn new(chain: ChainId, endpoint: &ChainEndpoint) -> Result<Self> {
        let rpc_url = endpoint.rpc_url.parse::<Url>().map_err(|_| {
            AppError::Config(format!("Invalid {} RPC URL: {}", chain, endpoint.rpc_url))
        })?;

        tracing::info!(chain = %chain, rpc_url = %rpc_url, "Chain client configured");

        Ok(Self { chain, rpc_url, swap_contract: endpoint.swap_contract })
    }

    /// Submit `swap(amountIn, tokenOut, userWallet)` and return the transaction
    /// hash once the node has accepted it. Does not wait for inclusion.
    ///
    /// The node must report this client's chain ID; otherwise nothing is signed.
    pub async fn submit_swap(
        &self,
        signer: &SwapSigner,
        amount_in: U256,
        token_out: Address,
        user_wallet: Address,
    ) -> Result<TxHash> {
        let contract = self.swap_contract.ok_or(AppError::UnsupportedChain(self.chain))?;

        let provider = ProviderBuilder::new()
            .wallet(signer.network_wallet())
            .connect_http(self.rpc_url.clone());

        let remote_chain_id = provider.get_chain_id().await?;
        ensure_chain_id(self.chain, remote_chain_id)?;

        let swap = IStallSwap::new(contract, provider);

        tracing::info!(
            chain = %self.chain,
            contract = %contract,
            amount_in = %amount_in,
            token_out = %token_out,
            user_wallet = %user_wallet,
            "Submitting swap"
        );

        let pending = swap.swap(amount_in, token_out, user_wallet).send().await?;
        let tx_hash = *pending.tx_hash();

        tracing::info!(chain = %self.chain, tx_hash = %tx_hash, "Swap submitted");

        Ok(tx_hash)
    }
}

fn ensure_chain_id(chain: ChainId, remote: u64) -> Result<()> {
    if remote == chain.evm_chain_id() {
        return Ok(());
    }

    tracing::error!(
        chain = %chain,
        expected = chain.evm_chain_id(),
        remote,
        "RPC chain ID mismatch"
    );

    Err(AppError::Config(format!(
        "{} RPC endpoint reports chain ID {}, expected {}",
        chain,
        remote,
        chain.evm_chain_id()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;
    use axum::{routing::post, Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn endpoint(rpc_url: &str, swap_contract: Option<Address>) -> ChainEndpoint {
        ChainEndpoint { rpc_url: rpc_url.to_string(), swap_contract }
    }

    #[test]
    fn test_client_rejects_bad_url() {
        let result = ChainClient::new(ChainId::Celo, &endpoint("not a url", None));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_chain_id_must_match() {
        assert!(ensure_chain_id(ChainId::Celo, 42220).is_ok());
        assert!(ensure_chain_id(ChainId::Rootstock, 30).is_ok());

        match ensure_chain_id(ChainId::Celo, 1) {
            Err(AppError::Config(msg)) => assert!(msg.contains("expected 42220")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_submit_without_contract_fails_before_any_io() {
        let client =
            ChainClient::new(ChainId::Rootstock, &endpoint("http://127.0.0.1:1", None)).unwrap();
        let signer = SwapSigner::from_private_key(DEV_KEY).unwrap();

        let result = client.submit_swap(&signer, U256::from(1u64), Address::ZERO, Address::ZERO).await;

        assert!(matches!(result, Err(AppError::UnsupportedChain(ChainId::Rootstock))));
    }

    /// JSON-RPC node that answers `eth_chainId` with `chain_id` and records every method.
    async fn spawn_node(chain_id: u64) -> (String, Arc<Mutex<Vec<String>>>) {
        let methods = Arc::new(Mutex::new(Vec::new()));
        let seen = methods.clone();

        let app = Router::new().route(
            "/",
            post(move |Json(body): Json<Value>| {
                let seen = seen.clone();
                async move {
                    let method = body["method"].as_str().unwrap_or_default().to_string();
                    seen.lock().unwrap().push(method);
                    Json(json!({
                        "jsonrpc": "2.0",
                        "id": body["id"],
                        "result": format!("{:#x}", chain_id),
                    }))
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", addr), methods)
    }

    #[tokio::test]
    async fn test_submit_refuses_wrong_network() {
        let (url, methods) = spawn_node(1).await;
        let contract = address!("0c14591696e97c8824852143d430A786Fb3992Db");
        let client = ChainClient::new(ChainId::Celo, &endpoint(&url, Some(contract))).unwrap();
        let signer = SwapSigner::from_private_key(DEV_KEY).unwrap();

        let result = client.submit_swap(&signer, U256::from(1u64), Address::ZERO, Address::ZERO).await;

        match result {
            Err(AppError::Config(msg)) => {
                assert!(msg.contains("chain ID 1"));
                assert!(msg.contains("expected 42220"));
            }
            other => panic!("expected chain mismatch, got {other:?}"),
        }
        assert_eq!(*methods.lock().unwrap(), vec!["eth_chainId".to_string()]);
    }
}
