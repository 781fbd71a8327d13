//! Dialog Controller
//!
//! The controller owns the model and is the only thing that writes to it.
//! Methods are kept as `impl DialogController` but organized by functional
//! domain:
//! - fetch: Request sequencing, response handling, retry, locale changes
//! - filters: Search and pagination
//! - locale_picker: Locale popup navigation
//! - selection: Card cursor and selection toggling
//! - finalize: Save / cancel and the hand-off to the host

pub mod fetch;
pub mod filters;
pub mod finalize;
pub mod locale_picker;
pub mod selection;

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::config::DialogConfig;
use crate::logic::view::{derive_view, DerivedView};
use crate::model::{DialogError, DialogOutcome, DialogPhase, Model};
use crate::services::FetchRequest;

/// What the content area should show
#[derive(Debug, Clone, PartialEq)]
pub enum ContentState<'a> {
    /// Fetch in flight (skeleton cards)
    Loading,
    /// Configuration or fetch error
    Failed(&'a DialogError),
    /// The space has no locales
    NoLocales,
    /// No asset with a file URL in the selected locale
    NoAssets,
    /// Assets exist but none match the search
    NoMatches,
    Cards(DerivedView<'a>),
}

pub struct DialogController {
    pub model: Model,
    config: Arc<DialogConfig>,
    fetch_tx: mpsc::UnboundedSender<FetchRequest>,
    outcome: Option<DialogOutcome>,
    disposed: bool,
}

impl DialogController {
    pub fn new(config: Arc<DialogConfig>, fetch_tx: mpsc::UnboundedSender<FetchRequest>) -> Self {
        Self {
            model: Model::new(&config),
            config,
            fetch_tx,
            outcome: None,
            disposed: false,
        }
    }

    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    pub fn phase(&self) -> &DialogPhase {
        &self.model.catalog.phase
    }

    /// Validate configuration and start the locale fetch
    ///
    /// With missing host parameters no request is sent; the dialog shows a
    /// configuration error instead.
    pub fn mount(&mut self) {
        if let Err(e) = self.config.params.validate() {
            tracing::warn!("Configuration error: {}", e);
            self.model.catalog.phase = DialogPhase::Error(DialogError::Configuration(e));
            return;
        }

        tracing::info!(
            space = %self.config.params.space_id,
            locale = %self.config.params.default_locale,
            strategy = self.config.pagination.as_str(),
            "Dialog mounted"
        );
        self.request_locales();
    }

    /// Stop accepting responses; anything still in flight is dropped on arrival
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.model.catalog.next_generation();
        self.model.ui.should_quit = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Filtered and paginated view of the current collection
    pub fn current_view(&self) -> DerivedView<'_> {
        derive_view(
            &self.model.catalog.assets,
            self.model.view.search(),
            self.model.view.page_index(),
            self.model.view.page_size().get(),
        )
    }

    pub fn content(&self) -> ContentState<'_> {
        match &self.model.catalog.phase {
            DialogPhase::Idle | DialogPhase::LoadingLocales | DialogPhase::LoadingAssets => {
                ContentState::Loading
            }
            DialogPhase::Error(e) => ContentState::Failed(e),
            DialogPhase::Ready => {
                if self.model.catalog.locales.is_empty() {
                    return ContentState::NoLocales;
                }
                let view = self.current_view();
                if view.renderable == 0 {
                    ContentState::NoAssets
                } else if view.matched == 0 {
                    ContentState::NoMatches
                } else {
                    ContentState::Cards(view)
                }
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.model.ui.should_quit
    }
}
