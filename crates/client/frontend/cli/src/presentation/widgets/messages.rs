//! Message panel widget: recent notices from the view model.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::presentation::theme::MarketTheme;
use crate::presentation::ui::RenderContext;

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext, theme: &MarketTheme) {
    let visible = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = ctx
        .view_model
        .messages()
        .recent(visible)
        .map(|entry| Line::styled(entry.text.clone(), theme.style_message(entry.level)))
        .collect();

    let panel =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Messages "));
    frame.render_widget(panel, area);
}
