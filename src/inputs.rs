//! Input table loading.
//!
//! The input is a CSV file with a `URL_ID,URL` header and one article per
//! row. Rows keep their file order, which is also the output order.

use crate::error::{MetricsError, Result};
use crate::models::ArticleInput;
use std::path::Path;
use tracing::{info, instrument};

/// Read every `(URL_ID, URL)` row from `path`.
///
/// Surrounding whitespace is trimmed. A row with an empty id or URL makes the
/// whole table invalid, since it could not be matched to an output row.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn read_inputs(path: &Path) -> Result<Vec<ArticleInput>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut inputs = Vec::new();
    for (index, record) in reader.deserialize::<ArticleInput>().enumerate() {
        let input = record?;
        if input.id.is_empty() || input.url.is_empty() {
            return Err(MetricsError::Input {
                path: path.to_path_buf(),
                reason: format!("row {} has an empty URL_ID or URL", index + 1),
            });
        }
        inputs.push(input);
    }

    info!(count = inputs.len(), "Loaded input rows");
    Ok(inputs)
}
