//! Terminal session
//!
//! The UI is drawn on stderr. Stdout carries nothing but the JSON handed to
//! the host, so `dampick > picked.json` works.

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{io, time::Duration};
use tokio::sync::mpsc;

use crate::app::DialogController;
use crate::handlers;
use crate::services::FetchResponse;
use crate::ui;

/// Run the dialog in the alternate screen on stderr
///
/// Whatever part of setup succeeded is undone before returning, and the first
/// error (setup, loop or teardown) wins.
pub async fn run_terminal(
    controller: &mut DialogController,
    fetch_rx: &mut mpsc::UnboundedReceiver<FetchResponse>,
    enabled: bool,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let result = run_in_alternate_screen(controller, fetch_rx, enabled).await;

    let restored = disable_raw_mode().context("Failed to disable raw mode");
    result.and(restored)
}

async fn run_in_alternate_screen(
    controller: &mut DialogController,
    fetch_rx: &mut mpsc::UnboundedReceiver<FetchResponse>,
    enabled: bool,
) -> Result<()> {
    execute!(io::stderr(), EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let result = match Terminal::new(CrosstermBackend::new(io::stderr())) {
        Ok(mut terminal) => {
            let result = run_app(&mut terminal, controller, fetch_rx, enabled).await;
            let shown = terminal.show_cursor().context("Failed to show cursor");
            result.and(shown)
        }
        Err(e) => Err(e).context("Failed to create terminal"),
    };

    let left = execute!(io::stderr(), LeaveAlternateScreen).context("Failed to leave alternate screen");
    result.and(left)
}

/// Event loop: apply fetch responses, draw, read keys until the dialog closes
pub async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    controller: &mut DialogController,
    fetch_rx: &mut mpsc::UnboundedReceiver<FetchResponse>,
    enabled: bool,
) -> Result<()> {
    loop {
        // Process fetch responses (non-blocking); stale ones are dropped inside
        while let Ok(response) = fetch_rx.try_recv() {
            controller.handle_fetch_response(response);
        }

        if controller.model.ui.should_dismiss_toast() {
            controller.model.ui.dismiss_toast();
        }

        terminal.draw(|f| {
            ui::render(f, controller, enabled);
        })?;

        if controller.should_quit() {
            break;
        }

        // Keep the loop ticking so fetch responses show up without a key press
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(controller, key);
            }
        }
    }

    Ok(())
}
