//! Application state for mode management and UI context.

use strum::{Display, EnumIter};

/// Top-level application mode determining input handling and UI layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppMode {
    /// Browsing the listing snapshot.
    Browse,
    /// Editing the listing draft form.
    Compose,
}

/// Draft form field currently holding keyboard focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
pub enum FormField {
    #[strum(serialize = "Name")]
    Name,
    #[strum(serialize = "Description")]
    Description,
    #[strum(serialize = "Price (display units)")]
    Price,
    #[strum(serialize = "Image URL")]
    ImageUrl,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Description,
            Self::Description => Self::Price,
            Self::Price => Self::ImageUrl,
            Self::ImageUrl => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::ImageUrl,
            Self::Description => Self::Name,
            Self::Price => Self::Description,
            Self::ImageUrl => Self::Price,
        }
    }
}

/// Mutable application state tracking current mode, selection, and focus.
#[derive(Clone, Debug)]
pub struct AppState {
    pub mode: AppMode,
    /// Index of the selected listing within the current snapshot.
    pub selected: usize,
    /// Focused form field while composing.
    pub focus: FormField,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: AppMode::Browse,
            selected: 0,
            focus: FormField::Name,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter_compose(&mut self) {
        self.mode = AppMode::Compose;
        self.focus = FormField::Name;
    }

    pub fn exit_to_browse(&mut self) {
        self.mode = AppMode::Browse;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_prev(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    /// Keep the selection inside a freshly replaced snapshot.
    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn default_mode_is_browse() {
        let state = AppState::new();
        assert_eq!(state.mode, AppMode::Browse);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn focus_cycles_through_all_fields() {
        let mut focus = FormField::Name;
        for expected in FormField::iter() {
            assert_eq!(focus, expected);
            focus = focus.next();
        }
        assert_eq!(focus, FormField::Name);
        assert_eq!(focus.prev(), FormField::ImageUrl);
    }

    #[test]
    fn selection_wraps_and_clamps() {
        let mut state = AppState::new();
        state.select_prev(3);
        assert_eq!(state.selected, 2);
        state.select_next(3);
        assert_eq!(state.selected, 0);

        state.selected = 5;
        state.clamp_selection(2);
        assert_eq!(state.selected, 1);
        state.clamp_selection(0);
        assert_eq!(state.selected, 0);

        // Empty snapshots never move the cursor.
        state.select_next(0);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn compose_mode_round_trip_resets_focus() {
        let mut state = AppState::new();
        state.enter_compose();
        state.focus_next();
        assert_eq!(state.focus, FormField::Description);

        state.exit_to_browse();
        state.enter_compose();
        assert_eq!(state.focus, FormField::Name);
    }
}
