//! CSV report output.
//!
//! One header row followed by one row per article, columns in a fixed
//! order. Articles without metrics get `NaN` in every metric column so the
//! table still has one row per input URL.

use crate::error::{MetricsError, Result};
use crate::models::{ArticleMetrics, MetricRow, Report};
use ::csv::Writer;

/// Column headers, in output order.
pub const COLUMNS: [&str; 15] = [
    "URL_ID",
    "URL",
    "POSITIVE SCORE",
    "NEGATIVE SCORE",
    "POLARITY SCORE",
    "SUBJECTIVITY SCORE",
    "AVG SENTENCE LENGTH",
    "PERCENTAGE OF COMPLEX WORDS",
    "FOG INDEX",
    "AVG NUMBER OF WORDS PER SENTENCE",
    "COMPLEX WORD COUNT",
    "WORD COUNT",
    "SYLLABLE PER WORD",
    "PERSONAL PRONOUNS",
    "AVG WORD LENGTH",
];

const NULL_CELL: &str = "NaN";

fn metric_cells(m: &ArticleMetrics) -> [String; 13] {
    [
        m.positive_score.to_string(),
        m.negative_score.to_string(),
        m.polarity_score.to_string(),
        m.subjectivity_score.to_string(),
        m.avg_sentence_length.to_string(),
        m.pct_complex_words.to_string(),
        m.fog_index.to_string(),
        m.avg_words_per_sentence.to_string(),
        m.complex_word_count.to_string(),
        m.word_count.to_string(),
        m.syllables_per_word.to_string(),
        m.personal_pronouns.to_string(),
        m.avg_word_length.to_string(),
    ]
}

fn record(row: &MetricRow) -> Vec<String> {
    let mut cells = vec![row.id.clone(), row.url.clone()];
    match &row.metrics {
        Some(m) => cells.extend(metric_cells(m)),
        None => cells.extend(std::iter::repeat_n(NULL_CELL.to_string(), COLUMNS.len() - 2)),
    }
    cells
}

/// Render the whole report as CSV bytes.
pub fn render(report: &Report) -> Result<Vec<u8>> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(COLUMNS)?;
    for row in &report.articles {
        writer.write_record(record(row))?;
    }
    writer.flush()?;
    writer
        .into_inner()
        .map_err(|e| MetricsError::Io(e.into_error()))
}
