//! Page fetching and article extraction.
//!
//! Everything that touches the network sits behind [`PageFetcher`], so the
//! pipeline can be driven by a real HTTP client, a headless browser, or an
//! in-memory fake in tests.
//!
//! # Implementations
//!
//! | Fetcher | Module | Method |
//! |---------|--------|--------|
//! | [`HttpFetcher`] | [`http`] | Plain HTTP GET, CSS selector extraction |
//!
//! Extraction follows a fallback pattern: the title and the body container
//! are each located with an ordered list of selectors, and the first one that
//! matches wins. Within the body container, paragraphs, ordered list items,
//! unordered list items, and subheadings are collected in that order.

pub mod http;

use crate::error::Result;
use crate::models::FetchedPage;

pub use http::HttpFetcher;

/// Retrieves an article page and returns its title and body text.
pub trait PageFetcher {
    /// Fetch `url` and extract its title and body text.
    ///
    /// Fails on network errors, non-success statuses, and pages that lack
    /// the expected title or body structure.
    async fn fetch(&self, url: &str) -> Result<FetchedPage>;
}
