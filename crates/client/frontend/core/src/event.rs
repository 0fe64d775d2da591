//! State-change notifications pushed from the view model to presentation
//! layers.

use client_blockchain_core::Address;

use crate::view_model::{PurchaseState, SubmitState};

/// Published on the view model's broadcast channel after every observable
/// state change. Presentation layers subscribe and re-render; they never
/// poll.
#[derive(Clone, Debug)]
pub enum MarketEvent {
    /// Wallet connected; the active account changed.
    AccountChanged(Address),
    /// The listing snapshot was replaced by a completed fetch.
    ListingsUpdated,
    /// A draft field changed or the draft was cleared.
    DraftChanged,
    /// Listing-submission state machine transition.
    SubmitChanged(SubmitState),
    /// Purchase state machine transition.
    PurchaseChanged(PurchaseState),
    /// A notice was appended to the message log.
    MessageLogged,
}
