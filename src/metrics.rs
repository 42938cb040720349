//! Sentiment and readability scoring.
//!
//! All scores are closed-form arithmetic over a [`NormalizedText`]:
//!
//! | Score | Formula |
//! |-------|---------|
//! | positive / negative | distinct tokens found in the word list |
//! | polarity | `(pos - neg) / (pos + neg + ε)` |
//! | subjectivity | `(pos + neg) / (tokens + ε)` |
//! | avg sentence length | `tokens / sentences` |
//! | pct complex words | `complex tokens / tokens` |
//! | fog index | `0.4 * (avg sentence length + pct complex words)` |
//! | syllables per word | `syllables / words` (stop-words removed) |
//! | avg word length | `letters / words` (stop-words removed) |
//!
//! Every ratio with an empty denominator is 0 rather than NaN.

use crate::lexicon::Lexicon;
use crate::models::ArticleMetrics;
use crate::normalize::NormalizedText;
use crate::syllables;
use std::collections::HashSet;

/// Keeps polarity and subjectivity finite when their denominators are zero.
pub const EPSILON: f64 = 0.000001;

/// Weight of the Gunning fog formula.
pub const FOG_WEIGHT: f64 = 0.4;

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Number of distinct `tokens` present in `list`.
pub fn lexicon_score(tokens: &[String], list: &HashSet<String>) -> usize {
    tokens
        .iter()
        .filter(|token| list.contains(token.as_str()))
        .collect::<HashSet<_>>()
        .len()
}

pub fn polarity_score(positive: usize, negative: usize) -> f64 {
    (positive as f64 - negative as f64) / ((positive + negative) as f64 + EPSILON)
}

pub fn subjectivity_score(positive: usize, negative: usize, token_count: usize) -> f64 {
    (positive + negative) as f64 / (token_count as f64 + EPSILON)
}

pub fn fog_index(avg_sentence_length: f64, pct_complex_words: f64) -> f64 {
    FOG_WEIGHT * (avg_sentence_length + pct_complex_words)
}

/// Compute every score for one article.
pub fn compute(text: &NormalizedText, lexicon: &Lexicon) -> ArticleMetrics {
    let token_count = text.tokens.len();
    let sentence_count = text.sentences.len();
    let word_count = text.words.len();

    let positive_score = lexicon_score(&text.tokens, &lexicon.positive_words);
    let negative_score = lexicon_score(&text.tokens, &lexicon.negative_words);

    let avg_sentence_length = ratio(token_count, sentence_count);
    let complex_word_count = text
        .tokens
        .iter()
        .filter(|token| syllables::is_complex(token))
        .count();
    let pct_complex_words = ratio(complex_word_count, token_count);

    let syllable_total: usize = text.words.iter().map(|w| syllables::count(w)).sum();
    let letter_total: usize = text.words.iter().map(|w| w.chars().count()).sum();

    ArticleMetrics {
        positive_score,
        negative_score,
        polarity_score: polarity_score(positive_score, negative_score),
        subjectivity_score: subjectivity_score(positive_score, negative_score, token_count),
        avg_sentence_length,
        pct_complex_words,
        fog_index: fog_index(avg_sentence_length, pct_complex_words),
        avg_words_per_sentence: avg_sentence_length,
        complex_word_count,
        word_count,
        syllables_per_word: ratio(syllable_total, word_count),
        personal_pronouns: text.personal_pronouns,
        avg_word_length: ratio(letter_total, word_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{RuleTokenizer, normalize};

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn lexicon() -> Lexicon {
        Lexicon {
            positive_words: set(&["happy", "good", "beautiful"]),
            negative_words: set(&["sad", "terrible"]),
            stop_words: set(&["the", "it", "was", "a", "is"]),
        }
    }

    fn score(text: &str) -> ArticleMetrics {
        let lexicon = lexicon();
        let normalized = normalize(&RuleTokenizer, text, &lexicon.stop_words);
        compute(&normalized, &lexicon)
    }

    #[test]
    fn test_simple_article() {
        let m = score("The cat sat. It was happy.");
        assert_eq!(m.positive_score, 1);
        assert_eq!(m.negative_score, 0);
        assert!((m.avg_sentence_length - 3.0).abs() < 1e-9);
        assert_eq!(m.word_count, 3);
        assert_eq!(m.complex_word_count, 0);
        assert!((m.subjectivity_score - 1.0 / 6.0).abs() < 1e-6);
        assert!((m.avg_word_length - 11.0 / 3.0).abs() < 1e-9);
        assert!((m.syllables_per_word - 4.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_positive_score_counts_distinct_words() {
        let m = score("Happy happy happy. Good.");
        assert_eq!(m.positive_score, 2);
    }

    #[test]
    fn test_polarity_bounds() {
        assert!(polarity_score(0, 0).abs() < 1e-12);
        assert!(polarity_score(5, 0) <= 1.0 && polarity_score(5, 0) > 0.99);
        assert!(polarity_score(0, 5) >= -1.0 && polarity_score(0, 5) < -0.99);

        let m = score("A sad and terrible day. Nothing good.");
        assert!(m.polarity_score >= -1.0 && m.polarity_score <= 1.0);
        assert!(m.polarity_score < 0.0);
    }

    #[test]
    fn test_fog_index_formula() {
        let m = score("Beautiful readability is complicated. The cat sat on a mat today.");
        assert!(m.complex_word_count > 0);
        let expected = 0.4 * (m.avg_words_per_sentence + m.pct_complex_words);
        assert!((m.fog_index - expected).abs() < 1e-12);
    }

    #[test]
    fn test_zero_sentences_defaults() {
        let m = compute(&NormalizedText::default(), &lexicon());
        assert_eq!(m.avg_sentence_length, 0.0);
        assert_eq!(m.avg_words_per_sentence, 0.0);
        assert_eq!(m.pct_complex_words, 0.0);
        assert_eq!(m.fog_index, 0.0);
        assert_eq!(m.syllables_per_word, 0.0);
        assert_eq!(m.avg_word_length, 0.0);
        assert_eq!(m.subjectivity_score, 0.0);
        assert!(m.polarity_score.is_finite());
    }

    #[test]
    fn test_only_stop_words() {
        let m = score("The. It was.");
        assert_eq!(m.word_count, 0);
        assert_eq!(m.syllables_per_word, 0.0);
        assert!(m.avg_sentence_length > 0.0);
    }

    #[test]
    fn test_deterministic() {
        let text = "We were happy. The results, however, were terrible! I disagree.";
        assert_eq!(score(text), score(text));
    }
}
