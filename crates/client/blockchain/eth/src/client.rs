//! Ethereum marketplace client implementation.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use ethers::abi::Abi;
use ethers::contract::{Contract, ContractCall};
use ethers::middleware::SignerMiddleware;
use ethers::providers::{Http, Provider};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::{U256, U64};

use client_blockchain_core::{Address, ContractError, MarketplaceContract, NftListing};

use crate::abi::MARKETPLACE_ABI;
use crate::config::EthConfig;
use crate::convert::{self, ListingTuple};

type WriteClient = SignerMiddleware<Provider<Http>, LocalWallet>;

/// Dynamic-ABI binding to the deployed marketplace contract.
///
/// Reads work with a bare provider. Writes require signer middleware and are
/// only available when a signing key was configured.
pub struct EthMarketplace {
    read: Contract<Provider<Http>>,
    write: Option<Contract<WriteClient>>,
    signer_address: Option<Address>,
    call_timeout: Duration,
}

impl EthMarketplace {
    /// Build the contract binding from configuration.
    ///
    /// Does not touch the network; connectivity problems surface on the first
    /// call instead.
    pub fn connect(config: &EthConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|reason| anyhow::anyhow!("Invalid Ethereum configuration: {reason}"))?;

        let abi: Abi =
            serde_json::from_str(MARKETPLACE_ABI).context("Embedded marketplace ABI is invalid")?;
        let address: ethers::types::H160 = config
            .contract_address
            .parse()
            .context("Invalid contract address")?;
        let provider = Provider::<Http>::try_from(config.rpc_url.as_str())
            .context("Invalid RPC endpoint URL")?;

        let read = Contract::new(address, abi.clone(), Arc::new(provider.clone()));

        let (write, signer_address) = match &config.private_key {
            Some(key) => {
                let key = key.trim();
                let key = key.strip_prefix("0x").unwrap_or(key);
                let wallet: LocalWallet = key
                    .parse()
                    .context("MARKET_PRIVATE_KEY is not a valid signing key")?;
                let wallet = wallet.with_chain_id(config.chain_id);
                let signer_address = convert::from_h160(wallet.address());
                let middleware = SignerMiddleware::new(provider, wallet);
                let contract = Contract::new(address, abi, Arc::new(middleware));
                (Some(contract), Some(signer_address))
            }
            None => (None, None),
        };

        Ok(Self {
            read,
            write,
            signer_address,
            call_timeout: Duration::from_secs(config.call_timeout_secs),
        })
    }

    /// Address of the configured signing account, if any.
    pub fn signer_address(&self) -> Option<Address> {
        self.signer_address.clone()
    }

    fn write_contract(&self) -> Result<&Contract<WriteClient>, ContractError> {
        self.write.as_ref().ok_or(ContractError::NoSigner)
    }

    fn check_sender(&self, sender: &Address) -> Result<(), ContractError> {
        match &self.signer_address {
            Some(signer) if signer == sender => Ok(()),
            _ => Err(ContractError::CallFailed {
                reason: format!("sender {sender} does not match the configured signer"),
            }),
        }
    }

    async fn execute_write(&self, call: ContractCall<WriteClient, ()>) -> Result<(), ContractError> {
        let work = async {
            let pending = call.send().await.map_err(call_failed)?;
            let receipt = pending.await.map_err(call_failed)?;
            match receipt {
                Some(receipt) if receipt.status == Some(U64::from(1)) => Ok(()),
                Some(receipt) => Err(ContractError::CallFailed {
                    reason: format!("transaction {:#x} reverted", receipt.transaction_hash),
                }),
                None => Err(ContractError::CallFailed {
                    reason: "transaction was dropped before inclusion".to_owned(),
                }),
            }
        };

        self.with_timeout(work).await
    }

    async fn with_timeout<T>(
        &self,
        work: impl Future<Output = Result<T, ContractError>>,
    ) -> Result<T, ContractError> {
        match tokio::time::timeout(self.call_timeout, work).await {
            Ok(result) => result,
            Err(_) => Err(ContractError::CallFailed {
                reason: format!("timed out after {}s", self.call_timeout.as_secs()),
            }),
        }
    }
}

fn call_failed(err: impl std::fmt::Display) -> ContractError {
    ContractError::CallFailed {
        reason: err.to_string(),
    }
}

#[async_trait]
impl MarketplaceContract for EthMarketplace {
    async fn list_nft(
        &self,
        sender: &Address,
        name: &str,
        description: &str,
        price: u128,
        image_url: &str,
    ) -> Result<(), ContractError> {
        let contract = self.write_contract()?;
        self.check_sender(sender)?;

        let call = contract
            .method::<_, ()>(
                "listNFT",
                (
                    name.to_owned(),
                    description.to_owned(),
                    U256::from(price),
                    image_url.to_owned(),
                ),
            )
            .map_err(call_failed)?
            .from(convert::to_h160(sender)?);

        tracing::debug!(name, price, "Submitting listNFT transaction");
        self.execute_write(call).await
    }

    async fn buy_nft(&self, sender: &Address, id: u64, value: u128) -> Result<(), ContractError> {
        let contract = self.write_contract()?;
        self.check_sender(sender)?;

        let call = contract
            .method::<_, ()>("buyNFT", U256::from(id))
            .map_err(call_failed)?
            .from(convert::to_h160(sender)?)
            .value(U256::from(value));

        tracing::debug!(id, value, "Submitting buyNFT transaction");
        self.execute_write(call).await
    }

    async fn get_nfts(&self) -> Result<Vec<NftListing>, ContractError> {
        let call = self
            .read
            .method::<_, Vec<ListingTuple>>("getNFTs", ())
            .map_err(call_failed)?;

        let raw = self
            .with_timeout(async { call.call().await.map_err(call_failed) })
            .await?;

        let mut listings = Vec::with_capacity(raw.len());
        for record in raw {
            match convert::to_listing(record) {
                Ok(listing) => listings.push(listing),
                // One corrupt record must not fail the whole snapshot.
                Err(err) => tracing::warn!("Skipping malformed listing record: {err}"),
            }
        }
        Ok(listings)
    }
}
