//! Catalog Model
//!
//! Data fetched from the Delivery API (locales, assets) plus the fetch
//! lifecycle: the dialog phase and the request generation used to drop stale
//! responses.

use crate::api::{Asset, Locale};

use super::types::DialogPhase;

#[derive(Clone, Debug)]
pub struct CatalogModel {
    /// Locales of the space; fetched once per dialog
    pub locales: Vec<Locale>,

    /// Whether the locale list has arrived (it may legitimately be empty)
    pub locales_loaded: bool,

    /// Locale the asset collection is fetched for
    pub selected_locale: String,

    /// Asset collection for `selected_locale`, replaced wholesale on refetch
    pub assets: Vec<Asset>,

    /// Whether `assets` holds a completed fetch for `selected_locale`
    pub assets_loaded: bool,

    pub phase: DialogPhase,

    /// Generation of the newest request; responses tagged otherwise are stale
    pub generation: u64,
}

impl CatalogModel {
    pub fn new(default_locale: &str) -> Self {
        Self {
            locales: Vec::new(),
            locales_loaded: false,
            selected_locale: default_locale.to_string(),
            assets: Vec::new(),
            assets_loaded: false,
            phase: DialogPhase::Idle,
            generation: 0,
        }
    }

    /// Bump the generation; every response from older requests becomes stale
    pub fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Display name of the selected locale, falling back to its code
    pub fn selected_locale_name(&self) -> &str {
        self.locales
            .iter()
            .find(|l| l.code == self.selected_locale)
            .map(|l| l.name.as_str())
            .unwrap_or(&self.selected_locale)
    }

    pub fn find_asset(&self, id: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_invalidates_older_requests() {
        let mut catalog = CatalogModel::new("en-US");
        let first = catalog.next_generation();
        let second = catalog.next_generation();
        assert!(!catalog.is_current(first));
        assert!(catalog.is_current(second));
    }

    #[test]
    fn test_locale_name_fallback() {
        let mut catalog = CatalogModel::new("en-US");
        assert_eq!(catalog.selected_locale_name(), "en-US");

        catalog.locales = vec![Locale {
            code: "en-US".to_string(),
            name: "English (United States)".to_string(),
            default: true,
        }];
        assert_eq!(catalog.selected_locale_name(), "English (United States)");
    }
}
