//! Per-article text files.
//!
//! The scraped text of every article is kept next to the report so a score
//! can be traced back to exactly the text that produced it.

use crate::error::Result;
use crate::utils::sanitize_file_stem;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tokio::fs;
use tracing::{debug, instrument, warn};

/// Path of the text file for article `id` inside `dir`.
pub fn text_path(dir: &Path, id: &str) -> PathBuf {
    dir.join(format!("{}.txt", sanitize_file_stem(id)))
}

/// Outcome of saving one article's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedText {
    pub path: PathBuf,
    /// Another id from this run had already been saved to the same file.
    pub replaced_earlier: bool,
}

/// The text directory for one run.
///
/// Distinct ids can sanitize to the same file name ("a/b" and "a_b"). The
/// directory remembers what it has written so such a collision is logged
/// instead of silently losing the earlier article's text.
#[derive(Debug)]
pub struct RawTextDir {
    dir: PathBuf,
    written: Mutex<HashSet<PathBuf>>,
}

impl RawTextDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Mutex::new(HashSet::new()),
        }
    }

    /// Write `text` to `<dir>/<id>.txt`, replacing any previous file.
    #[instrument(level = "debug", skip(self, text))]
    pub async fn write(&self, id: &str, text: &str) -> Result<SavedText> {
        let path = text_path(&self.dir, id);
        fs::write(&path, text).await?;

        let replaced_earlier = !self
            .written
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.clone());
        if replaced_earlier {
            warn!(
                id,
                path = %path.display(),
                "Text file was already written in this run; earlier article text replaced"
            );
        }
        debug!(path = %path.display(), bytes = text.len(), "Saved article text");
        Ok(SavedText {
            path,
            replaced_earlier,
        })
    }
}
