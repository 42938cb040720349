//! Output generation for reports and per-article text files.
//!
//! # Submodules
//!
//! - [`csv`]: Writes the metric table as CSV (the default)
//! - [`json`]: Writes the same rows as a JSON document
//! - [`raw_text`]: Persists the scraped text of each article for auditing
//!
//! # Output Structure
//!
//! ```text
//! output.csv                     # one row per input URL, input order
//! extracted_text_files/
//! ├── blackassign0001.txt        # title, then body text
//! └── blackassign0002.txt
//! ```

pub mod csv;
pub mod json;
pub mod raw_text;

use crate::error::Result;
use crate::models::Report;
use serde::Deserialize;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Report file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

/// Render `report` in `format` and write it to `path`.
///
/// The parent directory is created when missing.
#[instrument(level = "info", skip_all, fields(path = %path.display(), ?format))]
pub async fn write_report(report: &Report, path: &Path, format: OutputFormat) -> Result<()> {
    let bytes = match format {
        OutputFormat::Csv => csv::render(report)?,
        OutputFormat::Json => json::render(report)?,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, bytes).await?;
    info!(
        rows = report.articles.len(),
        null_rows = report.failed_count(),
        "Wrote report"
    );
    Ok(())
}
