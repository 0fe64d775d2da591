//! Mock wallet and marketplace for testing without a network.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::traits::{ContractError, MarketplaceContract, WalletError, WalletProvider};
use crate::types::{Address, NftListing};

/// Mock wallet provider with a fixed account list.
#[derive(Clone, Default)]
pub struct MockWalletProvider {
    accounts: Vec<Address>,
    deny: bool,
}

impl MockWalletProvider {
    pub fn with_accounts<S: Into<String>>(accounts: impl IntoIterator<Item = S>) -> Self {
        Self {
            accounts: accounts.into_iter().map(Address::new).collect(),
            deny: false,
        }
    }

    pub fn with_account(account: impl Into<String>) -> Self {
        Self::with_accounts([account.into()])
    }

    /// Provider that rejects every access request, like a user dismissing the
    /// connection prompt.
    pub fn denying() -> Self {
        Self {
            accounts: Vec::new(),
            deny: true,
        }
    }
}

#[async_trait]
impl WalletProvider for MockWalletProvider {
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        if self.deny {
            return Err(WalletError::UserDeniedAccess);
        }
        Ok(self.accounts.clone())
    }
}

#[derive(Default)]
struct MockState {
    listings: Vec<NftListing>,
    next_id: u64,
    list_calls: usize,
    buy_calls: usize,
    fetch_calls: usize,
    fail_next: Option<String>,
}

/// In-memory marketplace simulating the contract's listing and purchase
/// rules, including reverts.
#[derive(Clone, Default)]
pub struct MockMarketplace {
    state: Arc<Mutex<MockState>>,
}

impl MockMarketplace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next call (of any kind) fail with a revert-style reason.
    pub fn fail_next_call(&self, reason: impl Into<String>) {
        self.state.lock().unwrap().fail_next = Some(reason.into());
    }

    /// Insert a listing directly, bypassing the call surface.
    pub fn seed_listing(
        &self,
        name: &str,
        price: u128,
        owner: impl Into<String>,
        is_for_sale: bool,
    ) -> u64 {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id;
        state.next_id += 1;
        state.listings.push(NftListing {
            id,
            name: name.to_owned(),
            description: format!("{name} description"),
            price,
            image_url: format!("http://x/{name}.png"),
            owner: Address::new(owner),
            is_for_sale,
        });
        id
    }

    pub fn list_calls(&self) -> usize {
        self.state.lock().unwrap().list_calls
    }

    pub fn buy_calls(&self) -> usize {
        self.state.lock().unwrap().buy_calls
    }

    pub fn fetch_calls(&self) -> usize {
        self.state.lock().unwrap().fetch_calls
    }
}

fn take_failure(state: &mut MockState) -> Result<(), ContractError> {
    match state.fail_next.take() {
        Some(reason) => Err(ContractError::CallFailed { reason }),
        None => Ok(()),
    }
}

#[async_trait]
impl MarketplaceContract for MockMarketplace {
    async fn list_nft(
        &self,
        sender: &Address,
        name: &str,
        description: &str,
        price: u128,
        image_url: &str,
    ) -> Result<(), ContractError> {
        let mut state = self.state.lock().unwrap();
        state.list_calls += 1;
        take_failure(&mut state)?;

        let id = state.next_id;
        state.next_id += 1;
        state.listings.push(NftListing {
            id,
            name: name.to_owned(),
            description: description.to_owned(),
            price,
            image_url: image_url.to_owned(),
            owner: sender.clone(),
            is_for_sale: true,
        });
        Ok(())
    }

    async fn buy_nft(&self, sender: &Address, id: u64, value: u128) -> Result<(), ContractError> {
        let mut state = self.state.lock().unwrap();
        state.buy_calls += 1;
        take_failure(&mut state)?;

        let listing = state
            .listings
            .iter_mut()
            .find(|listing| listing.id == id)
            .ok_or_else(|| ContractError::CallFailed {
                reason: format!("execution reverted: unknown listing {id}"),
            })?;

        if !listing.is_for_sale {
            return Err(ContractError::CallFailed {
                reason: format!("execution reverted: listing {id} is not for sale"),
            });
        }
        if listing.owner == *sender {
            return Err(ContractError::CallFailed {
                reason: format!("execution reverted: owner cannot buy listing {id}"),
            });
        }
        if value != listing.price {
            return Err(ContractError::CallFailed {
                reason: format!(
                    "execution reverted: sent value {value} does not match price {}",
                    listing.price
                ),
            });
        }

        listing.owner = sender.clone();
        listing.is_for_sale = false;
        Ok(())
    }

    async fn get_nfts(&self) -> Result<Vec<NftListing>, ContractError> {
        let mut state = self.state.lock().unwrap();
        state.fetch_calls += 1;
        take_failure(&mut state)?;
        Ok(state.listings.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_marketplace_enforces_contract_rules() {
        let market = MockMarketplace::new();
        let seller = Address::new("0xSeller");
        let buyer = Address::new("0xBuyer");

        market
            .list_nft(&seller, "Art1", "desc", 100, "http://x/img.png")
            .await
            .unwrap();

        // Repeated reads with no intervening writes are identical.
        let first = market.get_nfts().await.unwrap();
        let second = market.get_nfts().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);

        // Wrong attached value reverts without mutating anything.
        let err = market.buy_nft(&buyer, 0, 99).await.unwrap_err();
        assert!(matches!(err, ContractError::CallFailed { .. }));
        assert!(market.get_nfts().await.unwrap()[0].is_for_sale);

        market.buy_nft(&buyer, 0, 100).await.unwrap();
        let after = market.get_nfts().await.unwrap();
        assert_eq!(after[0].owner, buyer);
        assert!(!after[0].is_for_sale);

        // Sold listings revert further purchases.
        let err = market.buy_nft(&seller, 0, 100).await.unwrap_err();
        assert!(matches!(err, ContractError::CallFailed { .. }));

        assert_eq!(market.list_calls(), 1);
        assert_eq!(market.buy_calls(), 3);
    }

    #[tokio::test]
    async fn injected_failure_hits_exactly_one_call() {
        let market = MockMarketplace::new();
        market.fail_next_call("execution reverted: out of gas");

        let err = market.get_nfts().await.unwrap_err();
        assert!(err.to_string().contains("out of gas"));

        market.get_nfts().await.unwrap();
    }
}
