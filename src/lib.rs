//! dampick: terminal asset picker for a headless CMS
//!
//! Fetches the locales and assets of a space from the Delivery API and lets
//! the user pick an ordered set of assets, which is handed back to the host
//! on save. Exposes modules for the binary and for testing.

pub mod api;
pub mod app;
pub mod config;
pub mod handlers;
pub mod host;
pub mod logic;
pub mod model;
pub mod services;
pub mod terminal;
pub mod ui;
