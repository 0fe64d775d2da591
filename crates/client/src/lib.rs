//! Top-level client orchestrating the view model and frontend layers.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ MarketViewModel (wallet session + marketplace client + UI state)
//!   └─→ Frontend (UI layer - CLI, future GUIs)
//! ```
//!
//! # Separation of Concerns
//!
//! - **Client**: composition root, lifecycle, initial snapshot fetch
//! - **ViewModel**: orchestration and invariant enforcement
//! - **Frontend**: rendering and user input, via the view-model contract only
//!
//! All layers are constructed independently and injected via the builder, so
//! the core stays testable without a real wallet or node.

mod builder;

pub use builder::ClientBuilder;

// Re-export the Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use client_frontend_core::MarketViewModel;

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` assembles the layers
/// 2. `Client::run()` fetches the initial listing snapshot
/// 3. `Client::run()` transfers control to the frontend (blocking)
pub struct Client {
    view_model: MarketViewModel,
    frontend: Box<dyn Frontend>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client until the user quits.
    pub async fn run(self) -> Result<()> {
        let Self {
            mut view_model,
            mut frontend,
        } = self;

        // Populate the marketplace before the first frame.
        view_model.refresh().await;

        frontend.run(view_model).await
    }
}
