//! Chain-agnostic client configuration structures and loaders.
use std::env;

use client_blockchain_core::units;

/// Upper bound keeping `10^decimals` inside the base-unit range.
const MAX_DECIMALS: u32 = 30;

/// Configuration required to bootstrap a marketplace client.
#[derive(Clone, Debug)]
pub struct MarketConfig {
    /// Native-currency precision of the deployed chain. Must match the
    /// chain's decimals exactly or listings will be mis-priced by orders of
    /// magnitude.
    pub currency_decimals: u32,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            currency_decimals: units::DEFAULT_DECIMALS,
        }
    }
}

impl MarketConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MARKET_CURRENCY_DECIMALS` - native-currency precision (default: 18)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(decimals) = read_env::<u32>("MARKET_CURRENCY_DECIMALS") {
            config.currency_decimals = decimals.min(MAX_DECIMALS);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
