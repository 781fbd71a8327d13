//! Search and pagination
//!
//! Each filter edit resets the page index and cursor in the same call, so the
//! view never pairs a new search with an old page offset.

use super::DialogController;

impl DialogController {
    /// Replace the search string (page index goes back to 0)
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.model.view.set_search(search);
        self.model.ui.cursor = 0;
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut search = self.model.view.search().to_string();
        search.push(c);
        self.set_search(search);
    }

    pub fn pop_search_char(&mut self) {
        let mut search = self.model.view.search().to_string();
        if search.pop().is_some() {
            self.set_search(search);
        }
    }

    pub fn clear_search(&mut self) {
        if !self.model.view.search().is_empty() {
            self.set_search(String::new());
        }
    }

    /// Go to the next page of the filtered collection; false on the last page
    pub fn next_page(&mut self) -> bool {
        let page_count = self.current_view().page_count;
        let next = self.model.view.page_index() + 1;
        let moved = self.model.view.set_page(next, page_count);
        if moved {
            self.model.ui.cursor = 0;
        }
        moved
    }

    pub fn prev_page(&mut self) -> bool {
        let Some(prev) = self.model.view.page_index().checked_sub(1) else {
            return false;
        };
        let page_count = self.current_view().page_count;
        let moved = self.model.view.set_page(prev, page_count);
        if moved {
            self.model.ui.cursor = 0;
        }
        moved
    }

    pub fn cycle_page_size(&mut self) {
        self.model.view.cycle_page_size();
        self.model.ui.cursor = 0;
    }
}
