//! Styling rules for the terminal UI.

use client_frontend_core::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

/// Consistent color scheme for the CLI.
pub struct MarketTheme;

impl MarketTheme {
    pub fn title(&self) -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn account(&self, connected: bool) -> Style {
        if connected {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    pub fn price(&self) -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn for_sale(&self) -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn sold(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn owned(&self) -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn focused_field(&self) -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected_row(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    pub fn style_message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
