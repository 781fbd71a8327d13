//! External Services
//!
//! This module contains services that interact with external systems:
//! - fetch: Delivery API request worker (locales, asset collections)

pub mod fetch;

// Re-export commonly used types for convenience
pub use fetch::{spawn_fetch_service, FetchFailure, FetchKind, FetchRequest, FetchResponse};
