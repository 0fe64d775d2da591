//! Marketplace view model: single owner of UI-visible state.
//!
//! Orchestrates the wallet session and the marketplace client, holds the
//! reconciled listing snapshot and the draft, and enforces the allowed
//! operation sequence. Every remote call is a cooperative await point; there
//! is one logical thread of control.

use tokio::sync::broadcast;

use client_blockchain_core::{
    Address, ContractError, ListingDraft, MarketplaceClient, NftListing, ValidationError,
    WalletError, WalletSession, units,
};

use crate::config::FrontendConfig;
use crate::event::MarketEvent;
use crate::format;
use crate::message::MessageLog;

/// Listing-submission state machine.
///
/// `Idle → Validating → Submitting → (Succeeded | Failed) → Idle`.
/// The terminal states transition back to `Idle` as soon as the outcome has
/// been recorded; they exist so subscribers can observe the transition.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// Purchase state machine: `Ready → Purchasing(id) → Ready`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PurchaseState {
    Ready,
    Purchasing(u64),
}

/// Errors surfaced at the view-model boundary.
///
/// Converted to display-safe notices here; none propagate to the
/// presentation layer and none are fatal.
#[derive(Debug, thiserror::Error)]
pub enum MarketError {
    #[error("Connect a wallet before submitting")]
    NotReady,

    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Contract(#[from] ContractError),
}

pub struct MarketViewModel {
    wallet: WalletSession,
    client: Option<MarketplaceClient>,
    decimals: u32,
    /// Last fetched snapshot; replaced wholesale, never patched element-wise.
    listings: Vec<NftListing>,
    draft: ListingDraft,
    submit: SubmitState,
    purchase: PurchaseState,
    /// Token of the most recently initiated fetch.
    fetch_issued: u64,
    messages: MessageLog,
    events: broadcast::Sender<MarketEvent>,
}

impl MarketViewModel {
    pub fn new(
        wallet: WalletSession,
        client: Option<MarketplaceClient>,
        config: &FrontendConfig,
    ) -> Self {
        let (events, _) = broadcast::channel(config.channels.event_buffer);
        let decimals = client
            .as_ref()
            .map_or(units::DEFAULT_DECIMALS, MarketplaceClient::decimals);

        Self {
            wallet,
            client,
            decimals,
            listings: Vec::new(),
            draft: ListingDraft::default(),
            submit: SubmitState::Idle,
            purchase: PurchaseState::Ready,
            fetch_issued: 0,
            messages: MessageLog::new(config.messages.capacity),
            events,
        }
    }

    /// Subscribe to state-change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<MarketEvent> {
        self.events.subscribe()
    }

    pub fn account(&self) -> Option<&Address> {
        self.wallet.current_account()
    }

    /// Both a connected account and a configured client are required for
    /// write operations.
    pub fn is_ready(&self) -> bool {
        self.wallet.is_connected() && self.client.is_some()
    }

    /// The last fetched snapshot, in contract order.
    pub fn listings(&self) -> &[NftListing] {
        &self.listings
    }

    pub fn listing(&self, id: u64) -> Option<&NftListing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    pub fn draft(&self) -> &ListingDraft {
        &self.draft
    }

    /// Apply a draft edit and notify subscribers.
    pub fn edit_draft(&mut self, edit: impl FnOnce(&mut ListingDraft)) {
        edit(&mut self.draft);
        self.notify(MarketEvent::DraftChanged);
    }

    pub fn submit_state(&self) -> SubmitState {
        self.submit
    }

    pub fn purchase_state(&self) -> PurchaseState {
        self.purchase
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    pub fn display_price(&self, listing: &NftListing) -> String {
        units::to_display_units(listing.price, self.decimals)
    }

    /// Whether the current account may buy `listing`.
    pub fn purchasable(&self, listing: &NftListing) -> bool {
        match self.account() {
            Some(account) => listing.purchasable_by(account),
            None => false,
        }
    }

    /// Connect the wallet and store the active account.
    pub async fn connect_wallet(&mut self) {
        match self.wallet.connect().await {
            Ok(account) => {
                self.messages
                    .push_info(format!("Connected: {}", format::short_address(&account)));
                self.notify(MarketEvent::MessageLogged);
                self.notify(MarketEvent::AccountChanged(account));
            }
            Err(err) => self.report(err.into()),
        }
    }

    /// Drive the listing-submission state machine for the current draft.
    ///
    /// On success the draft is cleared and a full refresh runs; on failure
    /// the draft is retained so the user can correct and resubmit.
    pub async fn submit_listing(&mut self) {
        if self.submit != SubmitState::Idle {
            return;
        }

        self.set_submit(SubmitState::Validating);
        if let Err(err) = self.draft.validate(self.decimals) {
            self.set_submit(SubmitState::Idle);
            self.report(err.into());
            return;
        }

        let (account, client) = match (self.wallet.current_account().cloned(), self.client.clone())
        {
            (Some(account), Some(client)) => (account, client),
            _ => {
                self.set_submit(SubmitState::Idle);
                self.report(MarketError::NotReady);
                return;
            }
        };

        self.set_submit(SubmitState::Submitting);
        match client.list(&self.draft, &account).await {
            Ok(()) => {
                self.set_submit(SubmitState::Succeeded);
                self.draft.clear();
                self.notify(MarketEvent::DraftChanged);
                self.messages.push_info("NFT listed successfully");
                self.notify(MarketEvent::MessageLogged);
                self.refresh().await;
            }
            Err(err) => {
                self.set_submit(SubmitState::Failed);
                self.report(err.into());
            }
        }
        self.set_submit(SubmitState::Idle);
    }

    /// Drive the purchase state machine for listing `id`.
    ///
    /// A purchase the contract would certainly revert (own listing, not for
    /// sale) is blocked locally and never issued.
    pub async fn purchase(&mut self, id: u64) {
        if self.purchase != PurchaseState::Ready {
            return;
        }

        let (account, client) = match (self.wallet.current_account().cloned(), self.client.clone())
        {
            (Some(account), Some(client)) => (account, client),
            _ => {
                self.report(MarketError::NotReady);
                return;
            }
        };

        let Some(listing) = self.listing(id).cloned() else {
            self.messages
                .push_warning(format!("Listing {id} is no longer available"));
            self.notify(MarketEvent::MessageLogged);
            return;
        };

        if !listing.purchasable_by(&account) {
            let err = if listing.owner == account {
                ContractError::AlreadyOwned(id)
            } else {
                ContractError::NotForSale(id)
            };
            self.report(err.into());
            return;
        }

        self.set_purchase(PurchaseState::Purchasing(id));
        match client.buy(&listing, &account).await {
            Ok(()) => {
                self.set_purchase(PurchaseState::Ready);
                self.messages
                    .push_info(format!("Purchased \"{}\"", listing.name));
                self.notify(MarketEvent::MessageLogged);
                // Remote state changed; re-fetch the full snapshot.
                self.refresh().await;
            }
            Err(err) => {
                // Remote state is unchanged on failure; no refresh required.
                self.set_purchase(PurchaseState::Ready);
                self.report(err.into());
            }
        }
    }

    /// Fetch the full listing snapshot and replace the local cache.
    pub async fn refresh(&mut self) {
        let Some(client) = self.client.clone() else {
            return;
        };

        let token = self.begin_fetch();
        match client.fetch_all().await {
            Ok(listings) => {
                self.apply_fetch(token, listings);
            }
            Err(err) => self.report(err.into()),
        }
    }

    /// Issue a staleness token for a fetch initiated now.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_issued += 1;
        self.fetch_issued
    }

    /// Apply a completed fetch.
    ///
    /// Only the most recently initiated fetch may replace the snapshot;
    /// completions carrying a superseded token are discarded so a late
    /// arrival cannot revert the displayed state.
    pub fn apply_fetch(&mut self, token: u64, listings: Vec<NftListing>) -> bool {
        if token != self.fetch_issued {
            tracing::debug!(token, latest = self.fetch_issued, "Discarding stale fetch");
            return false;
        }

        self.listings = listings;
        self.notify(MarketEvent::ListingsUpdated);
        true
    }

    fn set_submit(&mut self, state: SubmitState) {
        self.submit = state;
        self.notify(MarketEvent::SubmitChanged(state));
    }

    fn set_purchase(&mut self, state: PurchaseState) {
        self.purchase = state;
        self.notify(MarketEvent::PurchaseChanged(state));
    }

    fn report(&mut self, err: MarketError) {
        tracing::warn!("{err}");
        self.messages.push_error(err.to_string());
        self.notify(MarketEvent::MessageLogged);
    }

    fn notify(&self, event: MarketEvent) {
        // Nobody listening is fine; the next subscriber reads fresh state.
        let _ = self.events.send(event);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use client_blockchain_core::{MockMarketplace, MockWalletProvider};

    use super::*;
    use crate::message::MessageLevel;

    const BUYER: &str = "0xAbCdEf0123456789aBcDeF0123456789abcdef01";

    fn view_model(market: &MockMarketplace, provider: Option<MockWalletProvider>) -> MarketViewModel {
        let wallet = WalletSession::new(
            provider.map(|provider| Arc::new(provider) as Arc<dyn client_blockchain_core::WalletProvider>),
        );
        let client = MarketplaceClient::new(Arc::new(market.clone()), 18);
        MarketViewModel::new(wallet, Some(client), &FrontendConfig::default())
    }

    async fn connected_view_model(market: &MockMarketplace) -> MarketViewModel {
        let mut vm = view_model(market, Some(MockWalletProvider::with_account(BUYER)));
        vm.connect_wallet().await;
        assert!(vm.is_ready());
        vm
    }

    fn fill_draft(vm: &mut MarketViewModel) {
        vm.edit_draft(|draft| {
            draft.name = "Art1".into();
            draft.description = "desc".into();
            draft.price = "0.5".into();
            draft.image_url = "http://x/img.png".into();
        });
    }

    fn last_error(vm: &MarketViewModel) -> String {
        let entry = vm.messages().last().expect("no messages logged");
        assert_eq!(entry.level, MessageLevel::Error);
        entry.text.clone()
    }

    #[tokio::test]
    async fn successful_submission_clears_draft_and_refreshes() {
        let market = MockMarketplace::new();
        let mut vm = connected_view_model(&market).await;
        fill_draft(&mut vm);

        vm.submit_listing().await;

        assert_eq!(market.list_calls(), 1);
        assert!(vm.draft().is_empty());
        assert_eq!(vm.submit_state(), SubmitState::Idle);

        let listings = vm.listings();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].name, "Art1");
        assert_eq!(listings[0].description, "desc");
        assert_eq!(listings[0].image_url, "http://x/img.png");
        assert!(listings[0].is_for_sale);
        // Case-insensitive owner match against the connected account.
        assert_eq!(listings[0].owner, Address::new(BUYER.to_lowercase()));
        assert_eq!(vm.display_price(&listings[0]), "0.5");
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_the_remote() {
        let market = MockMarketplace::new();
        let mut vm = connected_view_model(&market).await;
        vm.edit_draft(|draft| {
            draft.name = "Art1".into();
            draft.price = "0.5".into();
        });

        vm.submit_listing().await;

        assert_eq!(market.list_calls(), 0);
        assert_eq!(vm.submit_state(), SubmitState::Idle);
        assert!(last_error(&vm).contains("description"));
        // Draft retained for correction.
        assert_eq!(vm.draft().name, "Art1");
    }

    #[tokio::test]
    async fn submission_without_wallet_is_not_ready() {
        let market = MockMarketplace::new();
        let mut vm = view_model(&market, None);

        vm.connect_wallet().await;
        assert!(vm.account().is_none());
        assert!(last_error(&vm).contains("wallet"));

        fill_draft(&mut vm);
        vm.submit_listing().await;

        assert_eq!(market.list_calls(), 0);
        assert!(last_error(&vm).contains("Connect a wallet"));
    }

    #[tokio::test]
    async fn denied_connection_leaves_account_unset() {
        let market = MockMarketplace::new();
        let mut vm = view_model(&market, Some(MockWalletProvider::denying()));

        vm.connect_wallet().await;

        assert!(vm.account().is_none());
        assert!(!vm.is_ready());
        assert!(last_error(&vm).contains("denied"));
    }

    #[tokio::test]
    async fn failed_submission_retains_draft_and_reason() {
        let market = MockMarketplace::new();
        let mut vm = connected_view_model(&market).await;
        fill_draft(&mut vm);

        market.fail_next_call("execution reverted: out of gas");
        vm.submit_listing().await;

        assert_eq!(market.list_calls(), 1);
        assert_eq!(market.fetch_calls(), 0);
        assert!(!vm.draft().is_empty());
        assert_eq!(vm.submit_state(), SubmitState::Idle);
        assert!(last_error(&vm).contains("out of gas"));
    }

    #[tokio::test]
    async fn purchase_transfers_ownership_and_refreshes() {
        let market = MockMarketplace::new();
        let id = market.seed_listing("Art1", 100, "0xSeller", true);
        let mut vm = connected_view_model(&market).await;
        vm.refresh().await;

        vm.purchase(id).await;

        assert_eq!(market.buy_calls(), 1);
        assert_eq!(vm.purchase_state(), PurchaseState::Ready);
        let listing = vm.listing(id).unwrap();
        assert_eq!(listing.owner, Address::new(BUYER));
        assert!(!listing.is_for_sale);
    }

    #[tokio::test]
    async fn own_listing_purchase_is_blocked_locally() {
        let market = MockMarketplace::new();
        // Seeded with different casing than the connected account.
        let id = market.seed_listing("Art1", 100, BUYER.to_uppercase().replace("0X", "0x"), true);
        let mut vm = connected_view_model(&market).await;
        vm.refresh().await;

        vm.purchase(id).await;

        assert_eq!(market.buy_calls(), 0);
        assert!(last_error(&vm).contains("already owned"));
    }

    #[tokio::test]
    async fn sold_listing_purchase_is_blocked_locally() {
        let market = MockMarketplace::new();
        let id = market.seed_listing("Art1", 100, "0xSeller", false);
        let mut vm = connected_view_model(&market).await;
        vm.refresh().await;

        vm.purchase(id).await;

        assert_eq!(market.buy_calls(), 0);
        assert!(last_error(&vm).contains("not for sale"));
    }

    #[tokio::test]
    async fn failed_purchase_does_not_refresh() {
        let market = MockMarketplace::new();
        let id = market.seed_listing("Art1", 100, "0xSeller", true);
        let mut vm = connected_view_model(&market).await;
        vm.refresh().await;
        let fetches_before = market.fetch_calls();

        market.fail_next_call("execution reverted: insufficient funds");
        vm.purchase(id).await;

        assert_eq!(market.buy_calls(), 1);
        assert_eq!(market.fetch_calls(), fetches_before);
        assert_eq!(vm.purchase_state(), PurchaseState::Ready);
        assert!(last_error(&vm).contains("insufficient funds"));
        // Local cache still shows the pre-failure state.
        assert!(vm.listing(id).unwrap().is_for_sale);
    }

    #[tokio::test]
    async fn repeated_fetches_are_idempotent() {
        let market = MockMarketplace::new();
        market.seed_listing("Art1", 100, "0xSeller", true);
        market.seed_listing("Art2", 200, "0xSeller", true);
        let mut vm = connected_view_model(&market).await;

        vm.refresh().await;
        let first = vm.listings().to_vec();
        vm.refresh().await;

        assert_eq!(vm.listings(), first.as_slice());
    }

    #[tokio::test]
    async fn superseded_fetch_results_are_discarded() {
        let market = MockMarketplace::new();
        let mut vm = connected_view_model(&market).await;

        let stale = NftListing {
            id: 0,
            name: "stale".into(),
            description: String::new(),
            price: 1,
            image_url: String::new(),
            owner: Address::new("0xSeller"),
            is_for_sale: true,
        };
        let fresh = NftListing {
            name: "fresh".into(),
            ..stale.clone()
        };

        let first = vm.begin_fetch();
        let second = vm.begin_fetch();

        // The later-initiated fetch completes first and wins.
        assert!(vm.apply_fetch(second, vec![fresh.clone()]));
        // The earlier fetch arrives late and is silently dropped.
        assert!(!vm.apply_fetch(first, vec![stale]));

        assert_eq!(vm.listings(), &[fresh]);
    }

    #[tokio::test]
    async fn submission_publishes_state_machine_transitions() {
        let market = MockMarketplace::new();
        let mut vm = connected_view_model(&market).await;
        fill_draft(&mut vm);
        let mut events = vm.subscribe();

        vm.submit_listing().await;

        let mut submit_states = Vec::new();
        while let Ok(event) = events.try_recv() {
            if let MarketEvent::SubmitChanged(state) = event {
                submit_states.push(state);
            }
        }
        assert_eq!(
            submit_states,
            vec![
                SubmitState::Validating,
                SubmitState::Submitting,
                SubmitState::Succeeded,
                SubmitState::Idle,
            ]
        );
    }
}
