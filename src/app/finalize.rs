//! Save / cancel and the hand-off to the host
//!
//! Whatever happens, the host receives a list: the selection on save, an
//! empty list on cancel or when the dialog never finished.

use anyhow::Result;

use crate::api::Asset;
use crate::host::DialogHost;
use crate::model::DialogOutcome;

use super::DialogController;

impl DialogController {
    /// Close with the current selection, in pick order
    pub fn save(&mut self) -> Vec<Asset> {
        let selection = self.model.selection.to_vec();
        tracing::info!(count = selection.len(), "Dialog saved");
        self.outcome = Some(DialogOutcome::Saved(selection.clone()));
        self.model.ui.should_quit = true;
        selection
    }

    /// Close without saving
    pub fn cancel(&mut self) {
        tracing::info!("Dialog cancelled");
        self.outcome = Some(DialogOutcome::Cancelled);
        self.model.ui.should_quit = true;
    }

    pub fn outcome(&self) -> Option<&DialogOutcome> {
        self.outcome.as_ref()
    }

    /// The list for the host; never anything but a list
    pub fn into_selection(self) -> Vec<Asset> {
        self.outcome
            .map(DialogOutcome::into_selection)
            .unwrap_or_default()
    }

    /// Dispose the dialog and hand the result to `host`
    pub fn close(mut self, host: &mut dyn DialogHost) -> Result<()> {
        self.dispose();
        host.close(self.into_selection())
    }

    /// Close after the terminal session ended, successfully or not
    ///
    /// The host is always closed. A session error takes precedence over a
    /// close error.
    pub fn finish(self, host: &mut dyn DialogHost, session: Result<()>) -> Result<()> {
        if let Err(e) = &session {
            tracing::error!("Dialog session failed: {:#}", e);
        }
        let closed = self.close(host);
        session.and(closed)
    }
}
