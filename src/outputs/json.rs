//! JSON report output.
//!
//! Mirrors the CSV table as a document:
//!
//! ```text
//! {
//!   "generated_at": "2025-05-06T08:00:00+00:00",
//!   "articles": [
//!     { "url_id": "blackassign0001", "url": "...", "positive_score": 3, ... },
//!     { "url_id": "blackassign0002", "url": "...", "positive_score": null, ... }
//!   ]
//! }
//! ```

use crate::error::Result;
use crate::models::{MetricRow, Report};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: &'a str,
    articles: Vec<JsonRow<'a>>,
}

/// One article with every metric nullable, so failed rows keep all keys.
#[derive(Debug, Serialize)]
struct JsonRow<'a> {
    url_id: &'a str,
    url: &'a str,
    positive_score: Option<usize>,
    negative_score: Option<usize>,
    polarity_score: Option<f64>,
    subjectivity_score: Option<f64>,
    avg_sentence_length: Option<f64>,
    pct_complex_words: Option<f64>,
    fog_index: Option<f64>,
    avg_words_per_sentence: Option<f64>,
    complex_word_count: Option<usize>,
    word_count: Option<usize>,
    syllables_per_word: Option<f64>,
    personal_pronouns: Option<usize>,
    avg_word_length: Option<f64>,
}

impl<'a> From<&'a MetricRow> for JsonRow<'a> {
    fn from(row: &'a MetricRow) -> Self {
        let m = row.metrics.as_ref();
        Self {
            url_id: &row.id,
            url: &row.url,
            positive_score: m.map(|m| m.positive_score),
            negative_score: m.map(|m| m.negative_score),
            polarity_score: m.map(|m| m.polarity_score),
            subjectivity_score: m.map(|m| m.subjectivity_score),
            avg_sentence_length: m.map(|m| m.avg_sentence_length),
            pct_complex_words: m.map(|m| m.pct_complex_words),
            fog_index: m.map(|m| m.fog_index),
            avg_words_per_sentence: m.map(|m| m.avg_words_per_sentence),
            complex_word_count: m.map(|m| m.complex_word_count),
            word_count: m.map(|m| m.word_count),
            syllables_per_word: m.map(|m| m.syllables_per_word),
            personal_pronouns: m.map(|m| m.personal_pronouns),
            avg_word_length: m.map(|m| m.avg_word_length),
        }
    }
}

/// Render the whole report as pretty-printed JSON bytes.
pub fn render(report: &Report) -> Result<Vec<u8>> {
    let doc = JsonReport {
        generated_at: &report.generated_at,
        articles: report.articles.iter().map(JsonRow::from).collect(),
    };
    Ok(serde_json::to_vec_pretty(&doc)?)
}
