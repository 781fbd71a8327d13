//! Selection Logic
//!
//! Toggling assets in and out of the ordered selection. Identity is the asset
//! id; the input is never mutated.

use crate::api::Asset;

/// Whether an asset with `id` is in the selection
pub fn is_selected(selection: &[Asset], id: &str) -> bool {
    selection.iter().any(|a| a.id() == id)
}

/// Remove `asset` if its id is present, otherwise append it at the end
pub fn toggle(selection: &[Asset], asset: &Asset) -> Vec<Asset> {
    if is_selected(selection, asset.id()) {
        selection
            .iter()
            .filter(|a| a.id() != asset.id())
            .cloned()
            .collect()
    } else {
        let mut next = Vec::with_capacity(selection.len() + 1);
        next.extend_from_slice(selection);
        next.push(asset.clone());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(id: &str) -> Asset {
        Asset::new(id, format!("Asset {}", id), Some("//img"))
    }

    #[test]
    fn test_toggle_appends_at_end() {
        let selection = vec![asset("a"), asset("b")];
        let next = toggle(&selection, &asset("c"));
        let ids: Vec<_> = next.iter().map(Asset::id).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(selection.len(), 2, "input must not be mutated");
    }

    #[test]
    fn test_toggle_removes_by_id() {
        let selection = vec![asset("a"), asset("b"), asset("c")];
        // Same id, different record (e.g. refetched in another locale)
        let other_locale = Asset::new("b", "Asset b (de)", Some("//img/de"));
        let next = toggle(&selection, &other_locale);
        let ids: Vec<_> = next.iter().map(Asset::id).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let selection = vec![asset("a"), asset("b"), asset("c")];
        for id in ["a", "b", "c", "d"] {
            let once = toggle(&selection, &asset(id));
            let twice = toggle(&once, &asset(id));
            if id == "d" {
                assert_eq!(twice, selection);
            } else {
                // Removed then re-appended: set is equal, others keep their order
                let others: Vec<_> = twice.iter().filter(|a| a.id() != id).collect();
                let original: Vec<_> = selection.iter().filter(|a| a.id() != id).collect();
                assert_eq!(others, original);
                assert_eq!(twice.len(), selection.len());
            }
        }
    }

    #[test]
    fn test_no_duplicates() {
        let mut selection = Vec::new();
        selection = toggle(&selection, &asset("a"));
        selection = toggle(&selection, &asset("b"));
        selection = toggle(&selection, &asset("a"));
        selection = toggle(&selection, &asset("a"));
        let ids: Vec<_> = selection.iter().map(Asset::id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
