//! Wallet and marketplace abstraction traits.
//!
//! - `WalletProvider`: account access, the injected-wallet analogue
//! - `MarketplaceContract`: the remote contract's observable call surface
//!
//! Concrete backends live in `client-blockchain-eth`; in-memory versions for
//! tests live in [`crate::mock`].

use async_trait::async_trait;

use crate::types::{Address, NftListing};
use crate::units::UnitsError;

/// Wallet provider errors.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("No wallet provider detected; install or configure a wallet")]
    ProviderUnavailable,

    #[error("The wallet denied the account access request")]
    UserDeniedAccess,

    #[error("Wallet RPC error: {0}")]
    Rpc(String),
}

/// Remote contract call errors.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// The call reverted, timed out, or the network failed. The underlying
    /// reason is preserved for display.
    #[error("Remote call failed: {reason}")]
    CallFailed { reason: String },

    #[error("Listing {0} is not for sale")]
    NotForSale(u64),

    #[error("Listing {0} is already owned by this account")]
    AlreadyOwned(u64),

    #[error("No signing account is configured")]
    NoSigner,

    #[error("Malformed listing record: {0}")]
    InvalidRecord(String),

    #[error("Invalid price: {0}")]
    Units(#[from] UnitsError),
}

/// Browser-wallet analogue granting access to the user's accounts.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Request account access.
    ///
    /// Returns the accounts in provider order; the first one becomes the
    /// active account.
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError>;
}

/// Typed call surface of the remote marketplace contract.
///
/// All amounts are integer base units. Write calls mutate remote state and
/// must not be retried automatically; a blindly retried purchase could
/// double-charge. Reads have no side effects.
#[async_trait]
pub trait MarketplaceContract: Send + Sync {
    /// Create a listing. `sender` becomes the owner. Atomic: either the whole
    /// listing exists after the call or nothing does.
    async fn list_nft(
        &self,
        sender: &Address,
        name: &str,
        description: &str,
        price: u128,
        image_url: &str,
    ) -> Result<(), ContractError>;

    /// Purchase listing `id`, attaching `value` as the transferred amount.
    /// The contract reverts unless `value` equals the listing price.
    async fn buy_nft(&self, sender: &Address, id: u64, value: u128) -> Result<(), ContractError>;

    /// Full snapshot of every listing. Order is contract-defined and not
    /// guaranteed stable across calls.
    async fn get_nfts(&self) -> Result<Vec<NftListing>, ContractError>;
}
