//! Ethereum connection configuration.
//!
//! Everything is read from environment variables (a `.env` file is loaded by
//! the binary before this runs):
//! - `MARKET_RPC_URL` - JSON-RPC endpoint (required)
//! - `MARKET_CONTRACT_ADDRESS` - deployed marketplace address
//!   (default: the fixed deployment address)
//! - `MARKET_CHAIN_ID` - chain id used for transaction signing (default: 31337)
//! - `MARKET_PRIVATE_KEY` - hex signing key; omit for a read-only client
//! - `MARKET_CALL_TIMEOUT_SECS` - per-call timeout (default: 60)

use std::env;

use anyhow::{Context, Result};

use crate::convert;

/// Address the marketplace contract was provisioned at.
pub const DEFAULT_CONTRACT_ADDRESS: &str = "0x8F6636b2CB02488d52F93dF3f0357fdEEba07b77";

const DEFAULT_CHAIN_ID: u64 = 31337;
const DEFAULT_CALL_TIMEOUT_SECS: u64 = 60;

/// Ethereum-specific configuration.
#[derive(Debug, Clone)]
pub struct EthConfig {
    pub rpc_url: String,
    pub contract_address: String,
    pub chain_id: u64,
    pub private_key: Option<String>,
    pub call_timeout_secs: u64,
}

impl EthConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let rpc_url =
            env::var("MARKET_RPC_URL").context("MARKET_RPC_URL environment variable not set")?;

        let contract_address = env::var("MARKET_CONTRACT_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_CONTRACT_ADDRESS.to_owned());

        let config = Self {
            rpc_url,
            contract_address,
            chain_id: read_env("MARKET_CHAIN_ID").unwrap_or(DEFAULT_CHAIN_ID),
            private_key: env::var("MARKET_PRIVATE_KEY").ok(),
            call_timeout_secs: read_env("MARKET_CALL_TIMEOUT_SECS")
                .unwrap_or(DEFAULT_CALL_TIMEOUT_SECS),
        };

        config
            .validate()
            .map_err(|reason| anyhow::anyhow!("Invalid Ethereum configuration: {reason}"))?;
        Ok(config)
    }

    /// Validate configuration without touching the network.
    pub fn validate(&self) -> Result<(), String> {
        if self.rpc_url.is_empty() {
            return Err("RPC URL must not be empty".to_owned());
        }
        if !convert::is_valid_address(&self.contract_address) {
            return Err(format!(
                "contract address `{}` is not a 20-byte hex address",
                self.contract_address
            ));
        }
        if self.call_timeout_secs == 0 {
            return Err("call timeout must be at least one second".to_owned());
        }
        Ok(())
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> EthConfig {
        EthConfig {
            rpc_url: "http://localhost:8545".to_owned(),
            contract_address: DEFAULT_CONTRACT_ADDRESS.to_owned(),
            chain_id: DEFAULT_CHAIN_ID,
            private_key: None,
            call_timeout_secs: DEFAULT_CALL_TIMEOUT_SECS,
        }
    }

    #[test]
    fn default_contract_address_is_valid() {
        assert_eq!(config().validate(), Ok(()));
    }

    #[test]
    fn malformed_contract_address_is_rejected() {
        let mut config = config();
        config.contract_address = "0x1234".to_owned();
        assert!(config.validate().is_err());

        config.contract_address = "not-an-address".to_owned();
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = config();
        config.call_timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
