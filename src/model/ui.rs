//! UI Model
//!
//! This sub-model contains all state related to the terminal surface:
//! cursor, input modes, popups and the toast.

use std::time::{Duration, Instant};

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_millis(1500);

/// Locale picker popup state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalePickerState {
    /// Highlighted row in the locale list
    pub selected_index: usize,
}

/// UI preferences and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    /// Card under the cursor, as an index into the current page
    pub cursor: usize,

    /// Whether the search box is receiving keystrokes
    pub search_mode: bool,

    /// Locale picker popup (None when closed)
    pub locale_picker: Option<LocalePickerState>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Number of card columns in the grid
    pub grid_columns: usize,

    /// Whether the dialog should close
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool, grid_columns: usize) -> Self {
        Self {
            cursor: 0,
            search_mode: false,
            locale_picker: None,
            toast_message: None,
            vim_mode,
            grid_columns: grid_columns.max(1),
            should_quit: false,
        }
    }

    /// Check if any modal surface is capturing keys
    pub fn has_modal(&self) -> bool {
        self.locale_picker.is_some() || self.search_mode
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    pub fn should_dismiss_toast(&self) -> bool {
        self.toast_message
            .as_ref()
            .is_some_and(|(_, shown)| shown.elapsed() >= TOAST_DURATION)
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ui_model() {
        let ui = UiModel::new(true, 0);
        assert!(ui.vim_mode);
        assert_eq!(ui.grid_columns, 1);
        assert!(!ui.has_modal());
    }

    #[test]
    fn test_toast_lifecycle() {
        let mut ui = UiModel::new(false, 3);
        ui.show_toast("Saved".to_string());
        assert!(ui.toast_message.is_some());
        assert!(!ui.should_dismiss_toast());
        ui.dismiss_toast();
        assert!(ui.toast_message.is_none());
    }

    #[test]
    fn test_modal_detection() {
        let mut ui = UiModel::new(false, 3);
        ui.locale_picker = Some(LocalePickerState { selected_index: 0 });
        assert!(ui.has_modal());
    }
}
