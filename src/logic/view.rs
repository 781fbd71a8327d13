//! View Derivation
//!
//! Pure functions that turn the fetched asset collection into the page of
//! cards to render. The result depends only on (assets, search, page index,
//! page size).

use crate::api::Asset;

use super::pagination::page_count;

/// Render-ready slice of the asset collection
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView<'a> {
    /// Assets on the requested page, in collection order
    pub items: Vec<&'a Asset>,
    /// Assets with a file URL (before the search filter)
    pub renderable: usize,
    /// Assets with a file URL whose title matches the search
    pub matched: usize,
    pub page_index: usize,
    pub page_count: usize,
}

/// True when the asset has a file URL we can show
pub fn has_file_url(asset: &Asset) -> bool {
    asset.file_url().is_some()
}

/// Case-insensitive substring match on the asset title
///
/// An empty search keeps everything.
pub fn title_matches(asset: &Asset, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    asset.title().to_lowercase().contains(&search.to_lowercase())
}

/// Drop assets without a file URL, then keep titles matching `search`
pub fn filter_assets<'a>(assets: &'a [Asset], search: &str) -> Vec<&'a Asset> {
    assets
        .iter()
        .filter(|asset| has_file_url(asset))
        .filter(|asset| title_matches(asset, search))
        .collect()
}

/// Contiguous `[size * index, size * (index + 1))` slice; empty when out of range
pub fn page_slice<T: Copy>(items: &[T], page_index: usize, page_size: usize) -> Vec<T> {
    let size = page_size.max(1);
    let start = size.saturating_mul(page_index);
    if start >= items.len() {
        return Vec::new();
    }
    let end = start.saturating_add(size).min(items.len());
    items[start..end].to_vec()
}

/// Filter, then paginate
pub fn derive_view<'a>(
    assets: &'a [Asset],
    search: &str,
    page_index: usize,
    page_size: usize,
) -> DerivedView<'a> {
    let renderable = assets.iter().filter(|asset| has_file_url(asset)).count();
    let filtered = filter_assets(assets, search);
    let items = page_slice(&filtered, page_index, page_size);

    DerivedView {
        items,
        renderable,
        matched: filtered.len(),
        page_index,
        page_count: page_count(filtered.len() as u64, page_size as u64) as usize,
    }
}
