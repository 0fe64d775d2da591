//! Chain-agnostic marketplace domain layer.
//!
//! This crate defines the client-side contract for talking to an NFT
//! marketplace deployed on a blockchain, without committing to any concrete
//! chain SDK.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: MarketplaceClient / WalletSession (unit-correct domain API)
//!
//! Layer 1: Domain Traits (WalletProvider, MarketplaceContract)
//!
//! Layer 0: Concrete backends (client-blockchain-eth, mocks)
//! ```
//!
//! All amounts cross the trait boundary as integer base units; conversion to
//! and from display units happens in [`units`] and is driven by a configurable
//! decimals constant rather than a hardcoded scale.

pub mod market;
pub mod traits;
pub mod types;
pub mod units;
pub mod wallet;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use market::MarketplaceClient;
pub use traits::{ContractError, MarketplaceContract, WalletError, WalletProvider};
pub use types::{Address, ListingDraft, NftListing, ValidationError, PLACEHOLDER_IMAGE_URL};
pub use units::{to_base_units, to_display_units, UnitsError, DEFAULT_DECIMALS};
pub use wallet::WalletSession;

#[cfg(any(test, feature = "mock"))]
pub use mock::{MockMarketplace, MockWalletProvider};
