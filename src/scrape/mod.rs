//! Page scrapers for the portal's student views.
//!
//! Each page module pairs a pure `extract` over raw HTML with an async
//! `scrape` that fetches the page through an authenticated session first.
//! Parsing lives entirely in the synchronous halves so no parser state is
//! held across an await.

pub mod attendance;
pub mod midmarks;
pub mod profile;
pub mod table;

pub use table::{Extraction, Row};
