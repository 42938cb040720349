//! Error types for the metrics pipeline.
//!
//! [`MetricsError`] covers every failure the pipeline can hit: fetching a page,
//! finding the expected structure in its HTML, loading lexicons and input
//! tables, and writing the report. Per-article variants are logged and turned
//! into null rows by [`crate::pipeline`]; the rest are fatal at startup or at
//! report time.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used by the library-style modules.
pub type Result<T> = std::result::Result<T, MetricsError>;

#[derive(Error, Debug)]
pub enum MetricsError {
    /// Network, TLS, or body decoding failure from reqwest.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The page did not contain the element the extractor needs.
    ///
    /// `what` names the missing piece ("title", "body") and `selectors` the
    /// fallback chain that was tried.
    #[error("No {what} element matched any of [{selectors}]")]
    MissingElement { what: &'static str, selectors: String },

    #[error("Invalid CSS selector `{0}`")]
    InvalidSelector(String),

    /// A lexicon file or directory could not be read.
    #[error("Failed to read lexicon {}: {source}", .path.display())]
    Lexicon {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input table is readable but malformed.
    #[error("Invalid input table {}: {reason}", .path.display())]
    Input { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl MetricsError {
    /// Whether this error only affects a single article.
    ///
    /// Per-article errors are downgraded to a null row; anything else aborts
    /// the run.
    pub fn is_per_article(&self) -> bool {
        matches!(
            self,
            MetricsError::Http(_)
                | MetricsError::Status { .. }
                | MetricsError::InvalidUrl(_)
                | MetricsError::MissingElement { .. }
                | MetricsError::Io(_)
        )
    }
}
