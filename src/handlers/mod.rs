//! Event Handlers
//!
//! This module contains handlers for the events the dialog reacts to:
//! - keyboard: User keyboard input
//!
//! Fetch responses go straight to `DialogController::handle_fetch_response`.

pub mod keyboard;

// Re-export for convenience
pub use keyboard::handle_key;
