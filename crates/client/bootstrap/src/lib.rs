//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading and the builder that assembles the wallet
//! session, marketplace client, and view model. Chain backends are injected
//! as trait objects so this crate stays chain-agnostic and the core remains
//! testable without a wallet or node.
pub mod builder;
pub mod config;

pub use builder::{MarketBuilder, MarketSetup};
pub use config::MarketConfig;
