//! Unit-correct bridge to the remote marketplace contract.

use std::sync::Arc;

use crate::traits::{ContractError, MarketplaceContract};
use crate::types::{Address, ListingDraft, NftListing};
use crate::units;

/// Typed marketplace API over an abstract contract backend.
///
/// Owns the display-unit/base-unit boundary: draft prices are converted to
/// base units exactly once on the way out, and listing prices stay in base
/// units until the presentation layer formats them, avoiding repeated lossy
/// conversion.
#[derive(Clone)]
pub struct MarketplaceClient {
    contract: Arc<dyn MarketplaceContract>,
    decimals: u32,
}

impl MarketplaceClient {
    pub fn new(contract: Arc<dyn MarketplaceContract>, decimals: u32) -> Self {
        Self { contract, decimals }
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Submit a draft as a remote create call with `sender` as the owner.
    ///
    /// Succeeds or fails atomically as a single remote transaction. The draft
    /// is not cleared here on either outcome; that is the caller's decision.
    pub async fn list(&self, draft: &ListingDraft, sender: &Address) -> Result<(), ContractError> {
        let price = units::to_base_units(&draft.price, self.decimals)?;
        self.contract
            .list_nft(sender, &draft.name, &draft.description, price, &draft.image_url)
            .await
    }

    /// Purchase a listing, attaching its price as the transferred value.
    ///
    /// The for-sale and ownership preconditions are checked locally first so
    /// an obviously doomed call never leaves the client; the remote contract
    /// remains authoritative.
    pub async fn buy(&self, listing: &NftListing, sender: &Address) -> Result<(), ContractError> {
        if !listing.is_for_sale {
            return Err(ContractError::NotForSale(listing.id));
        }
        if listing.owner == *sender {
            return Err(ContractError::AlreadyOwned(listing.id));
        }

        self.contract.buy_nft(sender, listing.id, listing.price).await
    }

    /// Retrieve the complete current listing snapshot.
    pub async fn fetch_all(&self) -> Result<Vec<NftListing>, ContractError> {
        self.contract.get_nfts().await
    }

    /// Format a listing price in display units.
    pub fn display_price(&self, listing: &NftListing) -> String {
        units::to_display_units(listing.price, self.decimals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockMarketplace;

    fn draft() -> ListingDraft {
        ListingDraft {
            name: "Art1".into(),
            description: "desc".into(),
            price: "0.5".into(),
            image_url: "http://x/img.png".into(),
        }
    }

    #[tokio::test]
    async fn list_converts_price_to_base_units() {
        let market = MockMarketplace::new();
        let client = MarketplaceClient::new(Arc::new(market.clone()), 18);
        let seller = Address::new("0xSeller");

        client.list(&draft(), &seller).await.unwrap();

        let listings = client.fetch_all().await.unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].price, 5 * 10u128.pow(17));
        assert_eq!(listings[0].owner, seller);
        assert!(listings[0].is_for_sale);
        assert_eq!(client.display_price(&listings[0]), "0.5");
    }

    #[tokio::test]
    async fn buy_is_blocked_locally_for_own_listing() {
        let market = MockMarketplace::new();
        let client = MarketplaceClient::new(Arc::new(market.clone()), 18);
        let seller = Address::new("0xAbC");

        client.list(&draft(), &seller).await.unwrap();
        let listing = client.fetch_all().await.unwrap().remove(0);

        // Same identity, different casing: no remote call may be issued.
        let err = client
            .buy(&listing, &Address::new("0xabc"))
            .await
            .unwrap_err();
        assert!(matches!(err, ContractError::AlreadyOwned(_)));
        assert_eq!(market.buy_calls(), 0);
    }

    #[tokio::test]
    async fn buy_transfers_ownership_remotely() {
        let market = MockMarketplace::new();
        let client = MarketplaceClient::new(Arc::new(market.clone()), 18);
        let seller = Address::new("0xSeller");
        let buyer = Address::new("0xBuyer");

        client.list(&draft(), &seller).await.unwrap();
        let listing = client.fetch_all().await.unwrap().remove(0);

        client.buy(&listing, &buyer).await.unwrap();

        let after = client.fetch_all().await.unwrap().remove(0);
        assert_eq!(after.owner, buyer);
        assert!(!after.is_for_sale);
        assert!(matches!(
            client.buy(&after, &buyer).await.unwrap_err(),
            ContractError::NotForSale(_)
        ));
    }
}
