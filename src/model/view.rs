//! View Model
//!
//! Search and paging state. Every filter change resets the page index in the
//! same call, so a new filter is never observed with a stale page offset.

use super::types::PageSize;

#[derive(Clone, Debug, PartialEq)]
pub struct ViewModel {
    search: String,
    page_index: usize,
    page_size: PageSize,
}

impl ViewModel {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            search: String::new(),
            page_index: 0,
            page_size,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Replace the search string and go back to the first page
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page_index = 0;
    }

    /// Move to `page_index` if it is one of `page_count` pages
    pub fn set_page(&mut self, page_index: usize, page_count: usize) -> bool {
        if page_index < page_count && page_index != self.page_index {
            self.page_index = page_index;
            true
        } else {
            false
        }
    }

    pub fn reset_page(&mut self) {
        self.page_index = 0;
    }

    /// Switch to the next page size and go back to the first page
    pub fn cycle_page_size(&mut self) {
        self.page_size = self.page_size.cycle();
        self.page_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_search_resets_page() {
        let mut view = ViewModel::new(PageSize::Twelve);
        assert!(view.set_page(3, 5));
        view.set_search("logo");
        assert_eq!(view.search(), "logo");
        assert_eq!(view.page_index(), 0);
    }

    #[test]
    fn test_set_page_bounds() {
        let mut view = ViewModel::new(PageSize::Twelve);
        assert!(!view.set_page(2, 2));
        assert!(view.set_page(1, 2));
        assert!(!view.set_page(1, 2));
        assert_eq!(view.page_index(), 1);
    }

    #[test]
    fn test_cycle_page_size_resets_page() {
        let mut view = ViewModel::new(PageSize::Twelve);
        view.set_page(1, 3);
        view.cycle_page_size();
        assert_eq!(view.page_size(), PageSize::TwentyFour);
        assert_eq!(view.page_index(), 0);
    }
}
