//! Locale popup navigation

use crate::model::ui::LocalePickerState;

use super::DialogController;

impl DialogController {
    /// Open the picker on the active locale; no-op until locales are loaded
    pub fn open_locale_picker(&mut self) -> bool {
        let catalog = &self.model.catalog;
        if catalog.locales.is_empty() {
            return false;
        }

        let selected_index = catalog
            .locales
            .iter()
            .position(|l| l.code == catalog.selected_locale)
            .unwrap_or(0);
        self.model.ui.locale_picker = Some(LocalePickerState { selected_index });
        true
    }

    pub fn close_locale_picker(&mut self) {
        self.model.ui.locale_picker = None;
    }

    pub fn locale_picker_up(&mut self) {
        if let Some(picker) = &mut self.model.ui.locale_picker {
            picker.selected_index = picker.selected_index.saturating_sub(1);
        }
    }

    pub fn locale_picker_down(&mut self) {
        let last = self.model.catalog.locales.len().saturating_sub(1);
        if let Some(picker) = &mut self.model.ui.locale_picker {
            picker.selected_index = (picker.selected_index + 1).min(last);
        }
    }

    /// Apply the highlighted locale and close the picker
    pub fn confirm_locale_picker(&mut self) -> bool {
        let Some(picker) = self.model.ui.locale_picker.take() else {
            return false;
        };
        let Some(code) = self
            .model
            .catalog
            .locales
            .get(picker.selected_index)
            .map(|l| l.code.clone())
        else {
            return false;
        };
        self.select_locale(&code)
    }
}
