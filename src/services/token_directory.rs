//! Static token directory for Celo and Rootstock.
//!
//! Symbols resolve against the hinted chain first and fall back to the other
//! supported chain. Lookups are pure and never touch the network.

use std::collections::HashMap;

use alloy::primitives::{address, Address};

use crate::types::{ChainId, TokenEntry};

// ============================================================================
// Token Tables
// ============================================================================

const fn token(symbol: &'static str, address: Address, decimals: u8, chain: ChainId) -> TokenEntry {
    TokenEntry { symbol, address, decimals, chain }
}

/// Top tokens on Celo Mainnet.
pub const CELO_TOKENS: [TokenEntry; 6] = [
    token("CELO", address!("471EcE3750Da237f93B8E339c536989b8978a438"), 18, ChainId::Celo),
    token("cUSD", address!("765DE816845861e75A25fCA122bb6898B8B1282a"), 18, ChainId::Celo),
    token("cEUR", address!("D8763CBa276a3738E6DE85b4b3bF5FDed6D6cA73"), 18, ChainId::Celo),
    token("USDC", address!("cebA9300f2b948710d2653dD7B07f33A8B32118C"), 6, ChainId::Celo),
    token("DAI", address!("E4fE50cdD716522A56204352f00AA110F731932d"), 18, ChainId::Celo),
    token("USDT", address!("48065fbBE25f71C9282ddf5e1cD6D6A887483D5e"), 6, ChainId::Celo),
];

/// Top tokens on Rootstock Mainnet.
pub const ROOTSTOCK_TOKENS: [TokenEntry; 6] = [
    token("RBTC", address!("542fDA317318eBF1d3DEAf76E0b632741A7e677d"), 18, ChainId::Rootstock),
    token("DOC", address!("e700691dA7b9851F2F35f8b8182c69c53CcaD9Db"), 18, ChainId::Rootstock),
    token("RIF", address!("2aCC95758f8b5F583470bA265Eb685a8f45fC9D5"), 18, ChainId::Rootstock),
    token("SOV", address!("EFc78fc7d48b64958315949279Ba181c2114ABBd"), 18, ChainId::Rootstock),
    token("BPRO", address!("440bBd6a888a36DE6e2F6A25f65bc4e16874faa9"), 18, ChainId::Rootstock),
    token("RUSDT", address!("Ef213441a85DF4d7acBdAe0Cf78004E1e486BB96"), 18, ChainId::Rootstock),
];

// ============================================================================
// Token Directory
// ============================================================================

/// Symbol and address indexes for one chain.
#[derive(Debug, Default)]
struct ChainIndex {
    /// Keyed by upper-cased symbol.
    by_symbol: HashMap<String, TokenEntry>,
    by_address: HashMap<Address, TokenEntry>,
}

impl ChainIndex {
    fn insert(&mut self, entry: TokenEntry) {
        self.by_symbol.insert(entry.symbol.to_uppercase(), entry.clone());
        self.by_address.insert(entry.address, entry);
    }
}

/// Read-only symbol/address directory partitioned by chain.
#[derive(Debug)]
pub struct TokenDirectory {
    celo: ChainIndex,
    rootstock: ChainIndex,
}

impl Default for TokenDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenDirectory {
    /// Build the directory from the built-in token tables.
    pub fn new() -> Self {
        let mut celo = ChainIndex::default();
        let mut rootstock = ChainIndex::default();

        for entry in CELO_TOKENS {
            celo.insert(entry);
        }
        for entry in ROOTSTOCK_TOKENS {
            rootstock.insert(entry);
        }

        Self { celo, rootstock }
    }

    fn index(&self, chain: ChainId) -> &ChainIndex {
        match chain {
            ChainId::Celo => &self.celo,
            ChainId::Rootstock => &self.rootstock,
        }
    }

    /// Resolve a symbol, case-insensitively, preferring `chain_hint`.
    pub fn resolve_address(&self, symbol: &str, chain_hint: ChainId) -> Option<&TokenEntry> {
        let key = symbol.trim().to_uppercase();
        if key.is_empty() {
            return None;
        }

        [chain_hint, chain_hint.other()]
            .into_iter()
            .find_map(|chain| self.index(chain).by_symbol.get(&key))
    }

    /// Resolve an address back to its token, preferring `chain_hint`.
    pub fn resolve_symbol(&self, address: Address, chain_hint: ChainId) -> Option<&TokenEntry> {
        [chain_hint, chain_hint.other()]
            .into_iter()
            .find_map(|chain| self.index(chain).by_address.get(&address))
    }

    /// Whether `symbol` is listed on `chain` itself, ignoring fallback.
    pub fn contains(&self, chain: ChainId, symbol: &str) -> bool {
        self.index(chain).by_symbol.contains_key(&symbol.trim().to_uppercase())
    }

    /// All tokens listed on `chain`.
    pub fn tokens(&self, chain: ChainId) -> impl Iterator<Item = &TokenEntry> {
        self.index(chain).by_symbol.values()
    }

    /// Decide which chain a swap runs on.
    ///
    /// An explicit hint always wins. Without one, the swap moves to Rootstock
    /// when either symbol is a Rootstock token, and stays on Celo otherwise.
    pub fn infer_chain(
        &self,
        from_symbol: &str,
        to_symbol: &str,
        explicit_hint: Option<ChainId>,
    ) -> ChainId {
        if let Some(chain) = explicit_hint {
            return chain;
        }

        if self.contains(ChainId::Rootstock, from_symbol)
            || self.contains(ChainId::Rootstock, to_symbol)
        {
            ChainId::Rootstock
        } else {
            ChainId::Celo
        }
    }
}
