//! Pumps view-model events, user input, and rendering for the CLI client.
use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tokio::time::{self, Duration};

use client_blockchain_core::ListingDraft;
use client_frontend_core::{MarketEvent, MarketViewModel};

use crate::config::CliConfig;
use crate::input::{InputHandler, UiIntent};
use crate::presentation::terminal::Tui;
use crate::presentation::ui::{self, RenderContext};
use crate::state::{AppState, FormField};

const FRAME_INTERVAL_MS: u64 = 16;

/// Event loop owning the view model and coordinating UI updates.
///
/// The view model publishes `MarketEvent`s on every observable change; the
/// loop re-renders on those notifications and on input. While a submission or
/// purchase is awaited the loop does not poll input, which also keeps the
/// triggering intent disabled until the call resolves.
pub struct EventLoop {
    view_model: MarketViewModel,
    events: broadcast::Receiver<MarketEvent>,
    input: InputHandler,
    app_state: AppState,
    cli_config: CliConfig,
}

impl EventLoop {
    pub fn new(view_model: MarketViewModel, cli_config: CliConfig) -> Self {
        let events = view_model.subscribe();
        Self {
            view_model,
            events,
            input: InputHandler::new(),
            app_state: AppState::new(),
            cli_config,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        self.render(terminal)?;

        loop {
            tokio::select! {
                result = self.events.recv() => {
                    match result {
                        Ok(_) => {
                            self.app_state
                                .clamp_selection(self.view_model.listings().len());
                            self.render(terminal)?;
                        }
                        Err(RecvError::Closed) => {
                            tracing::warn!("Event stream closed");
                            break;
                        }
                        Err(RecvError::Lagged(skipped)) => {
                            tracing::warn!("Dropped {} stale events", skipped);
                        }
                    }
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal).await? {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal).await
            }
            Event::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    async fn handle_key_press(&mut self, key: KeyEvent, terminal: &mut Tui) -> Result<bool> {
        match self.input.handle_key(self.app_state.mode, key) {
            UiIntent::Quit => return Ok(true),
            UiIntent::ConnectWallet => self.view_model.connect_wallet().await,
            UiIntent::Refresh => self.view_model.refresh().await,
            UiIntent::EnterCompose => self.app_state.enter_compose(),
            UiIntent::LeaveCompose => self.app_state.exit_to_browse(),
            UiIntent::SubmitListing => {
                self.view_model.submit_listing().await;
                // A cleared draft means the submission went through.
                if self.view_model.draft().is_empty() {
                    self.app_state.exit_to_browse();
                }
            }
            UiIntent::BuySelected => {
                if let Some(id) = self.selected_listing_id() {
                    self.view_model.purchase(id).await;
                }
            }
            UiIntent::SelectNext => {
                self.app_state.select_next(self.view_model.listings().len());
            }
            UiIntent::SelectPrev => {
                self.app_state.select_prev(self.view_model.listings().len());
            }
            UiIntent::FocusNext => self.app_state.focus_next(),
            UiIntent::FocusPrev => self.app_state.focus_prev(),
            UiIntent::Insert(ch) => {
                let focus = self.app_state.focus;
                self.view_model
                    .edit_draft(|draft| field_mut(draft, focus).push(ch));
            }
            UiIntent::Backspace => {
                let focus = self.app_state.focus;
                self.view_model.edit_draft(|draft| {
                    field_mut(draft, focus).pop();
                });
            }
            UiIntent::None => return Ok(false),
        }

        self.render(terminal)?;
        Ok(false)
    }

    fn selected_listing_id(&self) -> Option<u64> {
        self.view_model
            .listings()
            .get(self.app_state.selected)
            .map(|listing| listing.id)
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let ctx = RenderContext {
            view_model: &self.view_model,
            app_state: &self.app_state,
            message_panel_height: self.cli_config.ui.message_panel_height,
        };
        ui::render(terminal, &ctx)
    }
}

fn field_mut(draft: &mut ListingDraft, field: FormField) -> &mut String {
    match field {
        FormField::Name => &mut draft.name,
        FormField::Description => &mut draft.description,
        FormField::Price => &mut draft.price,
        FormField::ImageUrl => &mut draft.image_url,
    }
}
