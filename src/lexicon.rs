//! Word list loading.
//!
//! Positive and negative words come from one-word-per-line lists. Stop-words
//! come from a directory of files whose lines look like `WORD | comment`;
//! only the first field of each line is kept. Lexicon files are frequently
//! Latin-1 rather than UTF-8, so they are decoded lossily.

use crate::error::{MetricsError, Result};
use itertools::Itertools;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Where the lexicon files live.
#[derive(Debug, Clone)]
pub struct LexiconPaths {
    pub stop_words_dir: PathBuf,
    pub positive_words: PathBuf,
    pub negative_words: PathBuf,
}

/// Sentiment word lists and stop-words, all lowercase.
///
/// Built once at startup and shared by reference for the whole run.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    pub positive_words: HashSet<String>,
    pub negative_words: HashSet<String>,
    pub stop_words: HashSet<String>,
}

impl Lexicon {
    /// Load all three word sets. Any unreadable file is an error.
    #[instrument(level = "info", skip_all, fields(stop_words_dir = %paths.stop_words_dir.display()))]
    pub fn load(paths: &LexiconPaths) -> Result<Self> {
        let lexicon = Self {
            positive_words: load_word_list(&paths.positive_words)?,
            negative_words: load_word_list(&paths.negative_words)?,
            stop_words: load_stop_words(&paths.stop_words_dir)?,
        };
        info!(
            positive = lexicon.positive_words.len(),
            negative = lexicon.negative_words.len(),
            stop_words = lexicon.stop_words.len(),
            "Loaded lexicon"
        );
        Ok(lexicon)
    }
}

fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| MetricsError::Lexicon {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Load a one-word-per-line list. Blank lines and `;` comments are skipped.
pub fn load_word_list(path: &Path) -> Result<HashSet<String>> {
    let contents = read_lossy(path)?;
    let words: HashSet<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(';'))
        .map(str::to_lowercase)
        .collect();
    debug!(path = %path.display(), count = words.len(), "Loaded word list");
    Ok(words)
}

/// Load every stop-word file in `dir`, keeping the first field of each line.
///
/// Files are read in name order so logs are stable across platforms.
pub fn load_stop_words(dir: &Path) -> Result<HashSet<String>> {
    let lexicon_err = |source| MetricsError::Lexicon {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(lexicon_err)? {
        let entry = entry.map_err(lexicon_err)?;
        if entry.file_type().map_err(lexicon_err)?.is_file() {
            files.push(entry.path());
        }
    }

    let mut stop_words = HashSet::new();
    for file in files.into_iter().sorted() {
        let contents = read_lossy(&file)?;
        let before = stop_words.len();
        stop_words.extend(
            contents
                .lines()
                .filter_map(|line| line.split_whitespace().next())
                .map(str::to_lowercase),
        );
        debug!(path = %file.display(), added = stop_words.len() - before, "Loaded stop-word file");
    }
    Ok(stop_words)
}
