//! Wallet provider backed by a locally configured signing key.

use async_trait::async_trait;

use client_blockchain_core::{Address, WalletError, WalletProvider};

/// Local-key analogue of an injected browser wallet.
///
/// Account access is granted implicitly: the key was supplied by the user via
/// configuration, so there is no interactive prompt to deny. The denial path
/// still exists at the trait level for providers that do prompt.
pub struct EthWalletProvider {
    address: Address,
}

impl EthWalletProvider {
    pub fn new(address: Address) -> Self {
        Self { address }
    }
}

#[async_trait]
impl WalletProvider for EthWalletProvider {
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        Ok(vec![self.address.clone()])
    }
}
