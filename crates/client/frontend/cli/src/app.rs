//! CLI frontend implementing the shared `Frontend` trait.

use anyhow::Result;
use async_trait::async_trait;

use client_frontend_core::{Frontend, MarketViewModel};

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal;

/// Terminal frontend.
///
/// Owns terminal setup/teardown; the event loop owns the view model for the
/// lifetime of the session.
pub struct CliFrontend {
    config: CliConfig,
}

impl CliFrontend {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, view_model: MarketViewModel) -> Result<()> {
        let mut tui = terminal::init()?;

        let result = EventLoop::new(view_model, self.config.clone())
            .run(&mut tui)
            .await;

        // Always restore the terminal, even when the loop failed.
        let restored = terminal::restore();
        result.and(restored)
    }
}
