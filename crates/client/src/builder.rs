//! Client builder with dependency injection pattern.

use anyhow::{Context, Result};

use client_frontend_core::MarketViewModel;

use crate::{Client, Frontend};

/// Builder for constructing a [`Client`] with proper validation.
///
/// Both the view model and the frontend are required; missing fields cause
/// `build()` to fail rather than panicking later.
#[derive(Default)]
pub struct ClientBuilder {
    view_model: Option<MarketViewModel>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the view model (required).
    ///
    /// Construct it via `MarketBuilder` from the `client-bootstrap` crate.
    pub fn view_model(mut self, view_model: MarketViewModel) -> Self {
        self.view_model = Some(view_model);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    pub fn build(self) -> Result<Client> {
        let view_model = self
            .view_model
            .context("View model is required. Use .view_model() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client {
            view_model,
            frontend,
        })
    }
}
