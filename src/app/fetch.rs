//! Fetch sequencing
//!
//! Locales are fetched once and gate the first asset fetch. Every request
//! bumps the generation, and responses from older generations are ignored,
//! so a slow response for a previous locale can never overwrite newer state.

use crate::logic::layout::clamp_cursor;
use crate::model::{DialogError, DialogPhase, FetchStage};
use crate::services::{FetchFailure, FetchKind, FetchRequest, FetchResponse};

use super::DialogController;

impl DialogController {
    fn send_request(&mut self, kind: FetchKind, stage: FetchStage) {
        let generation = self.model.catalog.next_generation();
        let request = FetchRequest { generation, kind };

        if self.fetch_tx.send(request).is_err() {
            tracing::error!(generation, "Fetch service is not running");
            self.fail(
                stage,
                FetchFailure {
                    kind: crate::logic::errors::ErrorType::Other,
                    message: "fetch service stopped".to_string(),
                },
            );
        }
    }

    fn fail(&mut self, stage: FetchStage, failure: FetchFailure) {
        self.model.catalog.phase = DialogPhase::Error(DialogError::Fetch {
            stage,
            kind: failure.kind,
            message: failure.message,
        });
    }

    pub(crate) fn request_locales(&mut self) {
        self.model.catalog.phase = DialogPhase::LoadingLocales;
        self.send_request(FetchKind::Locales, FetchStage::Locales);
    }

    /// Drop the current collection and fetch it again for the selected locale
    pub(crate) fn request_assets(&mut self) {
        self.model.catalog.assets = Vec::new();
        self.model.catalog.assets_loaded = false;
        self.model.ui.cursor = 0;
        self.model.catalog.phase = DialogPhase::LoadingAssets;

        let locale = self.model.catalog.selected_locale.clone();
        self.send_request(FetchKind::Assets { locale }, FetchStage::Assets);
    }

    /// Apply a fetch response; returns false when it was stale and ignored
    pub fn handle_fetch_response(&mut self, response: FetchResponse) -> bool {
        if self.is_disposed() || !self.model.catalog.is_current(response.generation()) {
            tracing::debug!(
                generation = response.generation(),
                current = self.model.catalog.generation,
                "Discarding stale fetch response"
            );
            return false;
        }

        match response {
            FetchResponse::Locales { result: Ok(locales), .. } => {
                tracing::info!(count = locales.len(), "Locales loaded");
                let has_locales = !locales.is_empty();
                self.model.catalog.locales = locales;
                self.model.catalog.locales_loaded = true;

                if has_locales {
                    self.request_assets();
                } else {
                    // Nothing to fetch assets for; the view explains why
                    self.model.catalog.phase = DialogPhase::Ready;
                }
            }
            FetchResponse::Locales { result: Err(failure), .. } => {
                self.fail(FetchStage::Locales, failure);
            }
            FetchResponse::Assets { locale, result: Ok(assets), .. } => {
                tracing::info!(%locale, count = assets.len(), "Assets loaded");
                self.model.catalog.assets = assets;
                self.model.catalog.assets_loaded = true;
                self.model.catalog.phase = DialogPhase::Ready;

                let page_len = self.current_view().items.len();
                self.model.ui.cursor = clamp_cursor(self.model.ui.cursor, page_len);
            }
            FetchResponse::Assets { result: Err(failure), .. } => {
                self.fail(FetchStage::Assets, failure);
            }
        }

        true
    }

    /// Switch the active locale and refetch its asset collection
    ///
    /// Returns false when `code` is already active or locales are not loaded.
    pub fn select_locale(&mut self, code: &str) -> bool {
        if !self.model.catalog.locales_loaded || self.model.catalog.selected_locale == code {
            return false;
        }

        tracing::info!(from = %self.model.catalog.selected_locale, to = code, "Locale changed");
        self.model.catalog.selected_locale = code.to_string();
        self.model.view.reset_page();
        self.request_assets();
        true
    }

    /// Re-issue the failed fetch; configuration errors cannot be retried
    pub fn retry(&mut self) -> bool {
        let stage = match &self.model.catalog.phase {
            DialogPhase::Error(DialogError::Fetch { stage, .. }) => *stage,
            _ => return false,
        };

        tracing::info!(?stage, "Retrying fetch");
        match stage {
            FetchStage::Locales => self.request_locales(),
            FetchStage::Assets => self.request_assets(),
        }
        true
    }
}
