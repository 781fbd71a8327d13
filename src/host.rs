//! Host Bridge
//!
//! The narrow interface between the dialog and whatever embeds it. The host
//! owns the process; the dialog only hands back its result through
//! [`DialogHost::close`].

use anyhow::{Context, Result};
use std::io::Write;

use crate::api::Asset;
use crate::logic::thumbnail;

pub trait DialogHost {
    /// Receive the dialog result; always a list, possibly empty
    fn close(&mut self, selection: Vec<Asset>) -> Result<()>;

    /// `(url, title)` shown for an asset in the host's own field
    fn make_thumbnail(&self, asset: &Asset) -> (String, String) {
        thumbnail::make_thumbnail(asset)
    }

    /// Whether the asset field is disabled; always enabled here
    fn is_disabled(&self) -> bool {
        false
    }
}

/// Host that writes the result as a JSON array to a writer (stdout in the binary)
pub struct StdoutHost<W: Write> {
    writer: W,
}

impl<W: Write> StdoutHost<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DialogHost for StdoutHost<W> {
    fn close(&mut self, selection: Vec<Asset>) -> Result<()> {
        for asset in &selection {
            let (url, title) = self.make_thumbnail(asset);
            tracing::info!(id = asset.id(), %title, %url, "Returning asset to host");
        }

        serde_json::to_writer_pretty(&mut self.writer, &selection)
            .context("Failed to write selection")?;
        writeln!(self.writer).context("Failed to write selection")?;
        self.writer.flush().context("Failed to flush selection")?;
        Ok(())
    }
}
