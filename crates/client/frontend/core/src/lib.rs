//! Cross-frontend primitives for presenting the marketplace.
//!
//! Houses the view model, its push-notification channel, message logging, and
//! the frontend trait that both the CLI and future graphical clients consume.
pub mod config;
pub mod event;
pub mod format;
pub mod frontend;
pub mod message;
pub mod view_model;

pub use config::{ChannelConfig, FrontendConfig, MessageConfig};
pub use event::MarketEvent;
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel, MessageLog};
pub use view_model::{MarketError, MarketViewModel, PurchaseState, SubmitState};
