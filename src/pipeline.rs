//! The per-article scoring pipeline.
//!
//! Each input row goes through the same steps, one article at a time:
//!
//! 1. **Fetch**: the [`PageFetcher`] returns the title and body text
//! 2. **Persist**: the text is saved to `<text_dir>/<id>.txt`
//! 3. **Normalize**: tokens, stop-word filtered words, and sentences
//! 4. **Score**: the fixed metric tuple
//!
//! A failure in any step for one article is logged and produces a null row,
//! so the output always has exactly one row per input row, in input order.

use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::metrics;
use crate::models::{ArticleInput, ArticleMetrics, ArticleRecord, MetricRow};
use crate::normalize::{Tokenizer, normalize};
use crate::outputs::raw_text::RawTextDir;
use crate::scrapers::PageFetcher;
use crate::utils::truncate_for_log;
use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, error, info, instrument, warn};

/// Borrowed collaborators for one run.
#[derive(Debug)]
pub struct Pipeline<'a, F, T: ?Sized> {
    pub fetcher: &'a F,
    pub tokenizer: &'a T,
    pub lexicon: &'a Lexicon,
    pub texts: &'a RawTextDir,
}

impl<'a, F, T> Pipeline<'a, F, T>
where
    F: PageFetcher,
    T: Tokenizer + ?Sized,
{
    /// Fetch, persist, and tokenize one article.
    #[instrument(level = "info", skip_all, fields(id = %input.id, url = %input.url))]
    pub async fn fetch_record(&self, input: &ArticleInput) -> Result<ArticleRecord> {
        let page = self.fetcher.fetch(&input.url).await?;
        let raw_text = ArticleRecord::compose_text(&page.title, &page.text);
        let saved = self.texts.write(&input.id, &raw_text).await?;

        let normalized = normalize(self.tokenizer, &raw_text, &self.lexicon.stop_words);
        debug!(
            tokens = normalized.tokens.len(),
            words = normalized.words.len(),
            sentences = normalized.sentences.len(),
            text_file = %saved.path.display(),
            replaced_earlier = saved.replaced_earlier,
            preview = %truncate_for_log(&raw_text, 120),
            "Normalized article text"
        );

        Ok(ArticleRecord {
            id: input.id.clone(),
            url: input.url.clone(),
            raw_title: page.title,
            raw_text,
            normalized,
        })
    }

    /// Run every step for one article.
    pub async fn process_article(&self, input: &ArticleInput) -> Result<ArticleMetrics> {
        let record = self.fetch_record(input).await?;
        if record.normalized.tokens.is_empty() {
            warn!(
                id = %record.id,
                url = %record.url,
                title = %record.raw_title,
                bytes = record.raw_text.len(),
                "Article has no words; scores default to zero"
            );
        }
        Ok(metrics::compute(&record.normalized, self.lexicon))
    }

    /// Score one article, turning per-article failures into a null row.
    ///
    /// Errors that are not specific to this article are returned as-is.
    pub async fn score_row(&self, index: usize, input: &ArticleInput) -> Result<MetricRow> {
        match self.process_article(input).await {
            Ok(metrics) => {
                info!(
                    index,
                    id = %input.id,
                    fog_index = metrics.fog_index,
                    word_count = metrics.word_count,
                    "Scored article"
                );
                Ok(MetricRow::scored(input, metrics))
            }
            Err(e) if e.is_per_article() => {
                error!(index, id = %input.id, url = %input.url, error = %e, "Article failed; writing null row");
                Ok(MetricRow::null(input))
            }
            Err(e) => Err(e),
        }
    }

    /// Score every input row, sequentially and in order.
    #[instrument(level = "info", skip_all, fields(count = inputs.len()))]
    pub async fn run(&self, inputs: &[ArticleInput]) -> Result<Vec<MetricRow>> {
        let rows: Vec<MetricRow> = stream::iter(inputs.iter().enumerate())
            .then(|(index, input)| self.score_row(index, input))
            .try_collect()
            .await?;

        let failed = rows.iter().filter(|row| row.is_null()).count();
        info!(
            total = rows.len(),
            succeeded = rows.len() - failed,
            failed,
            "Finished scoring articles"
        );
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MetricsError;
    use crate::models::FetchedPage;
    use crate::normalize::RuleTokenizer;
    use std::collections::{HashMap, HashSet};
    use tempfile::tempdir;

    /// Serves canned pages; unknown URLs fail like a missing page would.
    #[derive(Debug, Default)]
    struct MockFetcher {
        pages: HashMap<String, FetchedPage>,
    }

    impl MockFetcher {
        fn with(mut self, url: &str, title: &str, text: &str) -> Self {
            self.pages.insert(
                url.to_string(),
                FetchedPage {
                    title: title.to_string(),
                    text: text.to_string(),
                },
            );
            self
        }
    }

    impl PageFetcher for MockFetcher {
        async fn fetch(&self, url: &str) -> Result<FetchedPage> {
            self.pages.get(url).cloned().ok_or_else(|| MetricsError::Status {
                url: url.to_string(),
                status: 404,
            })
        }
    }

    /// Always fails with an error that is not tied to one article.
    struct BrokenFetcher;

    impl PageFetcher for BrokenFetcher {
        async fn fetch(&self, _url: &str) -> Result<FetchedPage> {
            Err(MetricsError::Config("fetcher misconfigured".to_string()))
        }
    }

    fn lexicon() -> Lexicon {
        let set = |words: &[&str]| words.iter().map(|w| w.to_string()).collect::<HashSet<_>>();
        Lexicon {
            positive_words: set(&["happy"]),
            negative_words: set(&["sad"]),
            stop_words: set(&["the", "it", "was"]),
        }
    }

    fn input(id: &str, url: &str) -> ArticleInput {
        ArticleInput {
            id: id.to_string(),
            url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_end_to_end_single_article() {
        let dir = tempdir().unwrap();
        let texts = RawTextDir::new(dir.path());
        let fetcher = MockFetcher::default().with(
            "https://example.com/article",
            "",
            "The cat sat. It was happy.",
        );
        let lexicon = lexicon();
        let pipeline = Pipeline {
            fetcher: &fetcher,
            tokenizer: &RuleTokenizer,
            lexicon: &lexicon,
            texts: &texts,
        };
        let article = input("1", "https://example.com/article");

        let record = pipeline.fetch_record(&article).await.unwrap();
        assert_eq!(record.normalized.tokens.len(), 6);
        assert_eq!(record.normalized.sentences.len(), 2);

        let metrics = pipeline.process_article(&article).await.unwrap();
        assert!(metrics.word_count <= 6);
        assert_eq!(metrics.word_count, 3);
        assert!(metrics.polarity_score >= -1.0 && metrics.polarity_score <= 1.0);
        assert_eq!(metrics.positive_score, 1);

        let saved = std::fs::read_to_string(dir.path().join("1.txt")).unwrap();
        assert_eq!(saved, "The cat sat. It was happy.");
    }

    #[tokio::test]
    async fn test_run_keeps_order_and_null_rows() {
        let dir = tempdir().unwrap();
        let texts = RawTextDir::new(dir.path());
        let fetcher = MockFetcher::default()
            .with("https://example.com/a", "Good news", "We were happy. Nothing was sad.")
            .with("https://example.com/c", "Empty", "");
        let lexicon = lexicon();
        let pipeline = Pipeline {
            fetcher: &fetcher,
            tokenizer: &RuleTokenizer,
            lexicon: &lexicon,
            texts: &texts,
        };
        let inputs = vec![
            input("a", "https://example.com/a"),
            input("b", "https://example.com/missing"),
            input("c", "https://example.com/c"),
        ];

        let rows = pipeline.run(&inputs).await.unwrap();
        assert_eq!(rows.len(), inputs.len());
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert!(!rows[0].is_null());
        assert!(rows[1].is_null());
        assert!(!rows[2].is_null());
        assert_eq!(rows[0].metrics.unwrap().personal_pronouns, 1);
        assert!(!dir.path().join("b.txt").exists());
        assert_eq!(
            std::fs::read_to_string(dir.path().join("a.txt")).unwrap(),
            "Good news\nWe were happy. Nothing was sad."
        );
    }

    #[tokio::test]
    async fn test_run_propagates_fatal_errors() {
        let dir = tempdir().unwrap();
        let texts = RawTextDir::new(dir.path());
        let lexicon = lexicon();
        let pipeline = Pipeline {
            fetcher: &BrokenFetcher,
            tokenizer: &RuleTokenizer,
            lexicon: &lexicon,
            texts: &texts,
        };
        let result = pipeline.run(&[input("a", "https://example.com/a")]).await;
        assert!(matches!(result, Err(MetricsError::Config(_))));
    }

    #[tokio::test]
    async fn test_unwritable_text_dir_gives_null_row() {
        let dir = tempdir().unwrap();
        let texts = RawTextDir::new(dir.path().join("not_created"));
        let fetcher = MockFetcher::default().with("https://example.com/a", "T", "Body.");
        let lexicon = lexicon();
        let pipeline = Pipeline {
            fetcher: &fetcher,
            tokenizer: &RuleTokenizer,
            lexicon: &lexicon,
            texts: &texts,
        };
        let rows = pipeline.run(&[input("a", "https://example.com/a")]).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_null());
    }
}
