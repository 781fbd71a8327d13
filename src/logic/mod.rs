//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Fetch error classification and messages
//! - formatting: Sizes, dates and width-aware truncation
//! - layout: Card grid cursor movement
//! - pagination: Server request plans and page arithmetic
//! - selection: Ordered, deduplicated selection toggling
//! - thumbnail: Preview URLs and host thumbnails
//! - view: Filter + paginate derivation of the visible cards

pub mod errors;
pub mod formatting;
pub mod layout;
pub mod pagination;
pub mod selection;
pub mod thumbnail;
pub mod view;
