//! Header widget: title and wallet connection state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use client_frontend_core::format::short_address;

use crate::presentation::theme::MarketTheme;
use crate::presentation::ui::RenderContext;

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext, theme: &MarketTheme) {
    let account = match ctx.view_model.account() {
        Some(account) => Span::styled(
            format!("Connected: {}", short_address(account)),
            theme.account(true),
        ),
        None => Span::styled("Wallet disconnected — press c to connect", theme.account(false)),
    };

    let line = Line::from(vec![
        Span::styled("NFT Marketplace", theme.title()),
        Span::raw("   "),
        account,
    ]);

    let header = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}
