//! Marketplace client binary.
//!
//! Composition root that assembles:
//! 1. Configuration (environment + `.env`)
//! 2. The Ethereum chain layer (optional - the app runs offline without it)
//! 3. The view model via `MarketBuilder`
//! 4. The terminal frontend
//!
//! ```bash
//! MARKET_RPC_URL=http://localhost:8545 \
//! MARKET_PRIVATE_KEY=0x... \
//! cargo run -p market-client
//! ```

use std::sync::Arc;

use anyhow::Result;

use client_blockchain_eth::{EthConfig, EthMarketplace, EthWalletProvider};
use client_bootstrap::{MarketBuilder, MarketConfig};
use client_frontend_cli::{CliConfig, CliFrontend, logging};
use client_frontend_core::FrontendConfig;
use market_client::Client;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Setup logging (file-based; the TUI owns the terminal)
    let _log_guard = logging::setup_logging()?;

    // 2. Load configuration from environment
    let market_config = MarketConfig::from_env();
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();

    tracing::info!("Starting marketplace client");
    tracing::info!(
        "Currency decimals: {}",
        market_config.currency_decimals
    );

    let mut builder = MarketBuilder::new()
        .config(market_config)
        .frontend_config(frontend_config);

    // 3. Optional: Ethereum chain layer
    match EthConfig::from_env() {
        Ok(eth_config) => match EthMarketplace::connect(&eth_config) {
            Ok(marketplace) => {
                tracing::info!(
                    rpc = %eth_config.rpc_url,
                    contract = %eth_config.contract_address,
                    "Ethereum marketplace client initialized"
                );

                if let Some(address) = marketplace.signer_address() {
                    builder = builder.wallet_provider(Arc::new(EthWalletProvider::new(address)));
                } else {
                    tracing::warn!(
                        "No signing key configured; wallet connection will be unavailable"
                    );
                }

                builder = builder.contract(Arc::new(marketplace));
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to initialize Ethereum client: {e:#}. Continuing without chain access."
                );
            }
        },
        Err(e) => {
            tracing::warn!(
                "Ethereum configuration not found: {e:#}. Continuing without chain access."
            );
        }
    }

    // 4. Build the view model and the frontend, then run
    let setup = builder.build();

    let client = Client::builder()
        .view_model(setup.view_model)
        .frontend(CliFrontend::new(cli_config))
        .build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
