//! Signing wallet for swap submissions.

use alloy::{network::EthereumWallet, primitives::Address, signers::local::PrivateKeySigner};

use crate::error::Result;

/// The account that pays for and signs every swap write.
///
/// Key material is loaded once from configuration and never printed; the
/// `Debug` impl only shows the derived address.
#[derive(Clone)]
pub struct SwapSigner {
    signer: PrivateKeySigner,
}

impl SwapSigner {
    /// Build a signer from a hex private key, with or without the `0x` prefix.
    pub fn from_private_key(private_key: &str) -> Result<Self> {
        let trimmed = private_key.trim();
        let key = trimmed.strip_prefix("0x").unwrap_or(trimmed);

        let signer: PrivateKeySigner = key.parse()?;

        tracing::info!(address = %signer.address(), "Swap signer loaded");

        Ok(Self { signer })
    }

    /// Address of the signing account.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Network wallet used by the provider's signing filler.
    pub fn network_wallet(&self) -> EthereumWallet {
        EthereumWallet::from(self.signer.clone())
    }
}

impl std::fmt::Debug for SwapSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwapSigner").field("address", &self.address()).finish()
    }
}
