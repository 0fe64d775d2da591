//! Listing browser widget: the marketplace snapshot plus a detail pane.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use client_blockchain_core::NftListing;
use client_frontend_core::format::short_address;

use crate::presentation::theme::MarketTheme;
use crate::presentation::ui::RenderContext;

pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext, theme: &MarketTheme) {
    let listings = ctx.view_model.listings();

    if listings.is_empty() {
        let empty = Paragraph::new("No NFTs listed yet")
            .block(Block::default().borders(Borders::ALL).title(" Marketplace "));
        frame.render_widget(empty, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(5)])
        .split(area);

    render_table(frame, chunks[0], ctx, theme, listings);

    if let Some(listing) = listings.get(ctx.app_state.selected) {
        render_detail(frame, chunks[1], ctx, theme, listing);
    }
}

fn render_table(
    frame: &mut Frame,
    area: Rect,
    ctx: &RenderContext,
    theme: &MarketTheme,
    listings: &[NftListing],
) {
    let rows = listings.iter().enumerate().map(|(index, listing)| {
        let status = status_span(ctx, theme, listing);
        let row = Row::new(vec![
            Span::raw(listing.id.to_string()),
            Span::raw(listing.name.clone()),
            Span::styled(ctx.view_model.display_price(listing), theme.price()),
            status,
            Span::raw(short_address(&listing.owner)),
        ]);

        if index == ctx.app_state.selected {
            row.style(theme.selected_row())
        } else {
            row
        }
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Percentage(35),
            Constraint::Length(16),
            Constraint::Length(14),
            Constraint::Min(15),
        ],
    )
    .header(Row::new(vec!["Id", "Name", "Price", "Status", "Owner"]))
    .block(Block::default().borders(Borders::ALL).title(" Marketplace "));

    frame.render_widget(table, area);
}

fn render_detail(
    frame: &mut Frame,
    area: Rect,
    ctx: &RenderContext,
    theme: &MarketTheme,
    listing: &NftListing,
) {
    let status = status_span(ctx, theme, listing);
    let lines = vec![
        Line::from(listing.description.clone()),
        Line::from(format!("Image: {}", listing.image_url_or_placeholder())),
        Line::from(vec![
            Span::raw(format!(
                "Price: {} — ",
                ctx.view_model.display_price(listing)
            )),
            status,
        ]),
    ];

    let detail = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", listing.name)),
    );
    frame.render_widget(detail, area);
}

fn status_span(ctx: &RenderContext, theme: &MarketTheme, listing: &NftListing) -> Span<'static> {
    let owned = ctx
        .view_model
        .account()
        .is_some_and(|account| listing.owner == *account);

    if owned {
        Span::styled("you own this", theme.owned())
    } else if !listing.is_for_sale {
        Span::styled("not for sale", theme.sold())
    } else if ctx.view_model.purchasable(listing) {
        Span::styled("for sale — b to buy", theme.for_sale())
    } else {
        Span::styled("for sale", theme.for_sale())
    }
}
