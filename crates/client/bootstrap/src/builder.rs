//! Builds the view model and its collaborators for front-ends.
use std::sync::Arc;

use client_blockchain_core::{
    MarketplaceClient, MarketplaceContract, WalletProvider, WalletSession,
};
use client_frontend_core::{FrontendConfig, MarketViewModel};

use crate::config::MarketConfig;

/// Builder that assembles the wallet session, marketplace client, and view
/// model for clients.
///
/// Both the wallet provider and the contract backend are optional: the
/// application stays interactive without them, and write operations simply
/// report not-ready until they are supplied.
pub struct MarketBuilder {
    config: MarketConfig,
    frontend_config: FrontendConfig,
    provider: Option<Arc<dyn WalletProvider>>,
    contract: Option<Arc<dyn MarketplaceContract>>,
}

impl MarketBuilder {
    pub fn new() -> Self {
        Self {
            config: MarketConfig::default(),
            frontend_config: FrontendConfig::default(),
            provider: None,
            contract: None,
        }
    }

    pub fn config(mut self, config: MarketConfig) -> Self {
        self.config = config;
        self
    }

    pub fn frontend_config(mut self, frontend_config: FrontendConfig) -> Self {
        self.frontend_config = frontend_config;
        self
    }

    /// Supply the wallet provider (e.g. the Ethereum local-key provider).
    pub fn wallet_provider(mut self, provider: Arc<dyn WalletProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Supply the contract backend (e.g. the Ethereum marketplace binding).
    pub fn contract(mut self, contract: Arc<dyn MarketplaceContract>) -> Self {
        self.contract = Some(contract);
        self
    }

    pub fn build(self) -> MarketSetup {
        let wallet = WalletSession::new(self.provider);
        let client = self
            .contract
            .map(|contract| MarketplaceClient::new(contract, self.config.currency_decimals));

        if client.is_none() {
            tracing::warn!("No contract backend supplied; marketplace is offline");
        }

        let view_model = MarketViewModel::new(wallet, client, &self.frontend_config);

        MarketSetup {
            config: self.config,
            view_model,
        }
    }
}

impl Default for MarketBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct MarketSetup {
    pub config: MarketConfig,
    pub view_model: MarketViewModel,
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_blockchain_core::{MockMarketplace, MockWalletProvider};

    #[tokio::test]
    async fn build_without_backends_yields_offline_view_model() {
        let setup = MarketBuilder::new().build();
        assert!(!setup.view_model.is_ready());
        assert!(setup.view_model.listings().is_empty());
    }

    #[tokio::test]
    async fn build_with_backends_yields_ready_view_model() {
        let market = MockMarketplace::new();
        market.seed_listing("Art1", 100, "0xSeller", true);

        let mut setup = MarketBuilder::new()
            .wallet_provider(Arc::new(MockWalletProvider::with_account("0xBuyer")))
            .contract(Arc::new(market))
            .build();

        setup.view_model.connect_wallet().await;
        setup.view_model.refresh().await;

        assert!(setup.view_model.is_ready());
        assert_eq!(setup.view_model.listings().len(), 1);
    }
}
