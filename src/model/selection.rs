//! Selection Model
//!
//! The ordered, deduplicated set of assets the user picked. It survives
//! locale, filter and page changes and is only handed over on close.

use crate::api::Asset;
use crate::logic::selection;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionSet {
    assets: Vec<Asset>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        selection::is_selected(&self.assets, id)
    }

    /// Add or remove `asset`; returns true when it is now selected
    pub fn toggle(&mut self, asset: &Asset) -> bool {
        self.assets = selection::toggle(&self.assets, asset);
        self.contains(asset.id())
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn as_slice(&self) -> &[Asset] {
        &self.assets
    }

    /// Copy of the selection in pick order
    pub fn to_vec(&self) -> Vec<Asset> {
        self.assets.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_reports_state() {
        let mut set = SelectionSet::new();
        let asset = Asset::new("a", "A", Some("//img"));
        assert!(set.toggle(&asset));
        assert!(set.contains("a"));
        assert!(!set.toggle(&asset));
        assert!(set.is_empty());
    }
}
