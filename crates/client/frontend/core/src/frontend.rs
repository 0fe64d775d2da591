//! Trait describing a runnable client front-end.
use anyhow::Result;
use async_trait::async_trait;

use crate::view_model::MarketViewModel;

/// Frontend abstraction for UI layers.
///
/// Frontends take ownership of the view model, subscribe to its event
/// channel, and dispatch user intents into it. They render state; they never
/// talk to the wallet or the contract directly.
///
/// # Implementations
///
/// - `CliFrontend`: terminal UI (ratatui + crossterm)
/// - Future: graphical or web frontends
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop.
    ///
    /// Blocks until the user quits the application.
    ///
    /// # Errors
    ///
    /// Returns an error only on fatal frontend failures (e.g. the terminal
    /// cannot be initialized). Marketplace errors are notices inside the view
    /// model, not errors here.
    async fn run(&mut self, view_model: MarketViewModel) -> Result<()>;
}
