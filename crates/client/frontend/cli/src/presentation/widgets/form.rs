//! Compose form widget: the four listing draft fields.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use strum::IntoEnumIterator;

use client_blockchain_core::ListingDraft;

use crate::presentation::theme::MarketTheme;
use crate::presentation::ui::RenderContext;
use crate::state::FormField;

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext, theme: &MarketTheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" List an NFT ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let constraints: Vec<Constraint> = FormField::iter()
        .map(|_| Constraint::Length(1))
        .chain([Constraint::Min(0)])
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let draft = ctx.view_model.draft();
    for (index, field) in FormField::iter().enumerate() {
        let focused = ctx.app_state.focus == field;
        let label_style = if focused {
            theme.focused_field()
        } else {
            theme.hint()
        };

        let marker = if focused { "▸ " } else { "  " };
        let value = field_value(draft, field);
        let line = Line::from(vec![
            Span::styled(format!("{marker}{field}: "), label_style),
            Span::raw(value.to_owned()),
            Span::raw(if focused { "▏" } else { "" }),
        ]);
        frame.render_widget(Paragraph::new(line), rows[index]);
    }
}

fn field_value(draft: &ListingDraft, field: FormField) -> &str {
    match field {
        FormField::Name => &draft.name,
        FormField::Description => &draft.description,
        FormField::Price => &draft.price,
        FormField::ImageUrl => &draft.image_url,
    }
}
