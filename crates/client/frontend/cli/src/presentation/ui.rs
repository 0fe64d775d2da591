//! UI rendering entry point composing all widgets.
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout};

use client_frontend_core::MarketViewModel;

use crate::presentation::terminal::Tui;
use crate::presentation::theme::MarketTheme;
use crate::presentation::widgets;
use crate::state::{AppMode, AppState};

/// Rendering context containing all state needed for one frame.
pub struct RenderContext<'a> {
    pub view_model: &'a MarketViewModel,
    pub app_state: &'a AppState,
    pub message_panel_height: u16,
}

/// Render the terminal UI.
///
/// Layout: header, main area (listings or compose form), message panel,
/// footer. All widgets consume the view model directly.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = MarketTheme;

    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(ctx.message_panel_height),
                Constraint::Length(2),
            ])
            .split(frame.area());

        widgets::header::render(frame, chunks[0], ctx, &theme);

        match ctx.app_state.mode {
            AppMode::Browse => widgets::listings::render(frame, chunks[1], ctx, &theme),
            AppMode::Compose => widgets::form::render(frame, chunks[1], ctx, &theme),
        }

        widgets::messages::render(frame, chunks[2], ctx, &theme);
        widgets::footer::render(frame, chunks[3], ctx, &theme);
    })?;

    Ok(())
}

/// Status line summarizing an in-flight operation, if any.
pub fn activity_line(view_model: &MarketViewModel) -> Option<String> {
    use client_frontend_core::{PurchaseState, SubmitState};

    match (view_model.submit_state(), view_model.purchase_state()) {
        (SubmitState::Submitting, _) => Some("Submitting listing…".to_owned()),
        (_, PurchaseState::Purchasing(id)) => Some(format!("Purchasing listing {id}…")),
        _ => None,
    }
}
