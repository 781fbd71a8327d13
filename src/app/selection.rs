//! Card cursor and selection toggling

use crate::api::Asset;
use crate::logic::layout::{move_cursor, Direction};

use super::DialogController;

impl DialogController {
    /// Asset under the cursor on the current page
    pub fn cursor_asset(&self) -> Option<&Asset> {
        self.current_view().items.get(self.model.ui.cursor).copied()
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        let len = self.current_view().items.len();
        self.model.ui.cursor =
            move_cursor(self.model.ui.cursor, direction, len, self.model.ui.grid_columns);
    }

    /// Toggle the asset with `id` from the current collection
    ///
    /// Returns whether it is selected afterwards, or None if no such asset.
    pub fn toggle_selection(&mut self, id: &str) -> Option<bool> {
        let asset = self.model.catalog.find_asset(id)?.clone();
        let selected = self.model.selection.toggle(&asset);
        tracing::debug!(id, selected, total = self.model.selection.len(), "Selection toggled");
        Some(selected)
    }

    pub fn toggle_at_cursor(&mut self) -> Option<bool> {
        let id = self.cursor_asset()?.id().to_string();
        self.toggle_selection(&id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.model.selection.contains(id)
    }
}
