//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-intent mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent};

use crate::state::AppMode;

/// High-level outcome of processing a keyboard event.
#[derive(Debug, PartialEq, Eq)]
pub enum UiIntent {
    /// Exit the application.
    Quit,
    /// Request wallet connection.
    ConnectWallet,
    /// Re-fetch the listing snapshot.
    Refresh,
    /// Open the listing form.
    EnterCompose,
    /// Close the listing form without submitting.
    LeaveCompose,
    /// Submit the current draft.
    SubmitListing,
    /// Buy the selected listing.
    BuySelected,
    /// Move the listing selection.
    SelectNext,
    SelectPrev,
    /// Move form focus.
    FocusNext,
    FocusPrev,
    /// Append a character to the focused form field.
    Insert(char),
    /// Delete the last character of the focused form field.
    Backspace,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into UI intents depending on the current mode.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, mode: AppMode, key: KeyEvent) -> UiIntent {
        match mode {
            AppMode::Browse => self.handle_browse(key),
            AppMode::Compose => self.handle_compose(key),
        }
    }

    fn handle_browse(&self, key: KeyEvent) -> UiIntent {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => UiIntent::Quit,
            KeyCode::Char('c') => UiIntent::ConnectWallet,
            KeyCode::Char('r') => UiIntent::Refresh,
            KeyCode::Char('n') => UiIntent::EnterCompose,
            KeyCode::Char('b') | KeyCode::Enter => UiIntent::BuySelected,
            KeyCode::Down | KeyCode::Char('j') => UiIntent::SelectNext,
            KeyCode::Up | KeyCode::Char('k') => UiIntent::SelectPrev,
            _ => UiIntent::None,
        }
    }

    fn handle_compose(&self, key: KeyEvent) -> UiIntent {
        match key.code {
            KeyCode::Esc => UiIntent::LeaveCompose,
            KeyCode::Enter => UiIntent::SubmitListing,
            KeyCode::Tab | KeyCode::Down => UiIntent::FocusNext,
            KeyCode::BackTab | KeyCode::Up => UiIntent::FocusPrev,
            KeyCode::Backspace => UiIntent::Backspace,
            KeyCode::Char(ch) => UiIntent::Insert(ch),
            _ => UiIntent::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn browse_mode_maps_marketplace_commands() {
        let input = InputHandler::new();
        assert_eq!(
            input.handle_key(AppMode::Browse, key(KeyCode::Char('q'))),
            UiIntent::Quit
        );
        assert_eq!(
            input.handle_key(AppMode::Browse, key(KeyCode::Char('c'))),
            UiIntent::ConnectWallet
        );
        assert_eq!(
            input.handle_key(AppMode::Browse, key(KeyCode::Enter)),
            UiIntent::BuySelected
        );
        assert_eq!(
            input.handle_key(AppMode::Browse, key(KeyCode::Char('j'))),
            UiIntent::SelectNext
        );
    }

    #[test]
    fn compose_mode_routes_text_into_fields() {
        let input = InputHandler::new();
        // 'q' is text while composing, never quit.
        assert_eq!(
            input.handle_key(AppMode::Compose, key(KeyCode::Char('q'))),
            UiIntent::Insert('q')
        );
        assert_eq!(
            input.handle_key(AppMode::Compose, key(KeyCode::Backspace)),
            UiIntent::Backspace
        );
        assert_eq!(
            input.handle_key(AppMode::Compose, key(KeyCode::Esc)),
            UiIntent::LeaveCompose
        );
        assert_eq!(
            input.handle_key(AppMode::Compose, key(KeyCode::Enter)),
            UiIntent::SubmitListing
        );
    }
}
