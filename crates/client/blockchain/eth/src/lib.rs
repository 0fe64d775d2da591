//! Ethereum backend for the marketplace client.
//!
//! Implements the `client-blockchain-core` traits on top of `ethers`:
//!
//! ```text
//! domain types → client-blockchain-eth → JSON-RPC node
//!                    ↓
//!               dynamic-ABI contract binding
//!               (abi/marketplace.json, compiled in)
//! ```
//!
//! Reads go through a plain HTTP provider. Writes go through signer
//! middleware built from a locally configured key, the native analogue of an
//! injected browser wallet; when no key is configured the marketplace is
//! read-only and write calls report a missing signer.
//!
//! # Usage
//!
//! ```ignore
//! use client_blockchain_eth::{EthConfig, EthMarketplace, EthWalletProvider};
//!
//! let config = EthConfig::from_env()?;
//! let marketplace = EthMarketplace::connect(&config)?;
//! let wallet = marketplace.signer_address().map(EthWalletProvider::new);
//! ```

pub mod abi;
pub mod client;
pub mod config;
pub mod convert;
pub mod wallet;

pub use client::EthMarketplace;
pub use config::{EthConfig, DEFAULT_CONTRACT_ADDRESS};
pub use wallet::EthWalletProvider;
