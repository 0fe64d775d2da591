//! Terminal rendering layer.

pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
