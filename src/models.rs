//! Data models for articles as they move through the pipeline.
//!
//! - [`ArticleInput`]: one row of the input table
//! - [`FetchedPage`]: title and body text scraped from a page
//! - [`ArticleRecord`]: a fetched article with its tokens, ready for scoring
//! - [`ArticleMetrics`]: the fixed tuple of scores for one article
//! - [`MetricRow`]: one output row, with metrics absent for failed articles
//! - [`Report`]: the ordered rows of a run

use crate::normalize::NormalizedText;
use serde::{Deserialize, Serialize};

/// One row of the input table.
///
/// Column names follow the input sheet (`URL_ID`, `URL`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ArticleInput {
    #[serde(rename = "URL_ID")]
    pub id: String,
    #[serde(rename = "URL")]
    pub url: String,
}

/// Title and body text scraped from an article page.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedPage {
    pub title: String,
    /// Body text only; the title is not repeated here.
    pub text: String,
}

/// A fetched article together with its tokens and sentences.
///
/// Lives only for the duration of one pipeline step.
#[derive(Debug)]
pub struct ArticleRecord {
    pub id: String,
    pub url: String,
    pub raw_title: String,
    /// Title followed by body, exactly as persisted to the raw text file.
    pub raw_text: String,
    pub normalized: NormalizedText,
}

impl ArticleRecord {
    /// Join a title and body into the text that gets scored and persisted.
    pub fn compose_text(title: &str, body: &str) -> String {
        match (title.is_empty(), body.is_empty()) {
            (true, _) => body.to_string(),
            (false, true) => title.to_string(),
            (false, false) => format!("{title}\n{body}"),
        }
    }
}

/// Sentiment and readability scores for a single article.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArticleMetrics {
    pub positive_score: usize,
    pub negative_score: usize,
    pub polarity_score: f64,
    pub subjectivity_score: f64,
    pub avg_sentence_length: f64,
    /// Fraction in `[0, 1]`, not multiplied by 100.
    pub pct_complex_words: f64,
    pub fog_index: f64,
    pub avg_words_per_sentence: f64,
    pub complex_word_count: usize,
    /// Word count after stop-word removal.
    pub word_count: usize,
    pub syllables_per_word: f64,
    pub personal_pronouns: usize,
    pub avg_word_length: f64,
}

/// One output row. `metrics` is `None` when the article could not be
/// fetched or parsed; writers render it as a row of nulls.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub id: String,
    pub url: String,
    pub metrics: Option<ArticleMetrics>,
}

impl MetricRow {
    pub fn scored(input: &ArticleInput, metrics: ArticleMetrics) -> Self {
        Self {
            id: input.id.clone(),
            url: input.url.clone(),
            metrics: Some(metrics),
        }
    }

    pub fn null(input: &ArticleInput) -> Self {
        Self {
            id: input.id.clone(),
            url: input.url.clone(),
            metrics: None,
        }
    }

    pub fn is_null(&self) -> bool {
        self.metrics.is_none()
    }
}

/// The result of one run, in input order.
#[derive(Debug)]
pub struct Report {
    /// Local RFC 3339 timestamp of when the report was assembled.
    pub generated_at: String,
    pub articles: Vec<MetricRow>,
}

impl Report {
    pub fn new(articles: Vec<MetricRow>) -> Self {
        Self {
            generated_at: chrono::Local::now().to_rfc3339(),
            articles,
        }
    }

    pub fn failed_count(&self) -> usize {
        self.articles.iter().filter(|row| row.is_null()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ArticleInput {
        ArticleInput {
            id: "blackassign0001".to_string(),
            url: "https://example.com/article".to_string(),
        }
    }

    #[test]
    fn test_compose_text() {
        assert_eq!(ArticleRecord::compose_text("Title", "Body."), "Title\nBody.");
        assert_eq!(ArticleRecord::compose_text("", "Body."), "Body.");
        assert_eq!(ArticleRecord::compose_text("Title", ""), "Title");
    }

    #[test]
    fn test_null_row_keeps_identity() {
        let row = MetricRow::null(&input());
        assert_eq!(row.id, "blackassign0001");
        assert_eq!(row.url, "https://example.com/article");
        assert!(row.is_null());
    }

    #[test]
    fn test_report_failed_count() {
        let metrics = ArticleMetrics {
            positive_score: 1,
            negative_score: 0,
            polarity_score: 0.999999,
            subjectivity_score: 0.5,
            avg_sentence_length: 2.0,
            pct_complex_words: 0.0,
            fog_index: 0.8,
            avg_words_per_sentence: 2.0,
            complex_word_count: 0,
            word_count: 1,
            syllables_per_word: 1.0,
            personal_pronouns: 0,
            avg_word_length: 4.0,
        };
        let report = Report::new(vec![
            MetricRow::scored(&input(), metrics),
            MetricRow::null(&input()),
        ]);
        assert_eq!(report.failed_count(), 1);
        assert!(!report.generated_at.is_empty());
    }
}
