//! Footer widget: key hints and in-flight operation status.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::presentation::theme::MarketTheme;
use crate::presentation::ui::{self, RenderContext};
use crate::state::AppMode;

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext, theme: &MarketTheme) {
    let hints = match ctx.app_state.mode {
        AppMode::Browse => "c connect · r refresh · n new listing · ↑/↓ select · b buy · q quit",
        AppMode::Compose => "Tab next field · Enter submit · Esc cancel",
    };

    let line = match ui::activity_line(ctx.view_model) {
        Some(activity) => Line::styled(activity, theme.for_sale()),
        None => Line::styled(hints, theme.hint()),
    };

    frame.render_widget(Paragraph::new(line), area);
}
