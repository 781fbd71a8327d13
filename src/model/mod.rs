//! Pure Application Model
//!
//! This module defines the cloneable state of the dialog.
//! The Model is organized into focused sub-models:
//!
//! - **CatalogModel**: Delivery API data (locales, assets) and fetch phase
//! - **ViewModel**: Search string, page index, page size
//! - **SelectionSet**: Assets picked so far, in pick order
//! - **UiModel**: Cursor, input modes, popups
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No services: All I/O lives in the fetch service
//! - Only the dialog controller writes to it

pub mod catalog;
pub mod selection;
pub mod types;
pub mod ui;
pub mod view;

pub use catalog::CatalogModel;
pub use selection::SelectionSet;
pub use types::*;
pub use ui::UiModel;
pub use view::ViewModel;

use crate::config::DialogConfig;

/// Root dialog model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub catalog: CatalogModel,
    pub view: ViewModel,
    pub selection: SelectionSet,
    pub ui: UiModel,
}

impl Model {
    /// Create initial model from the dialog configuration
    pub fn new(config: &DialogConfig) -> Self {
        Self {
            catalog: CatalogModel::new(&config.params.default_locale),
            view: ViewModel::new(config.page_size),
            selection: SelectionSet::new(),
            ui: UiModel::new(config.vim_mode, config.grid_columns),
        }
    }

    pub fn phase(&self) -> &DialogPhase {
        &self.catalog.phase
    }
}
