//! Tokenization and text cleaning.
//!
//! Splitting raw text into words and sentences sits behind the [`Tokenizer`]
//! trait so a full NLP library can be dropped in. [`RuleTokenizer`] is the
//! built-in implementation: regex word splitting plus a sentence splitter
//! that knows about common abbreviations.
//!
//! [`normalize`] turns tokenizer output into the pieces the metrics need:
//! cleaned lowercase tokens, the same tokens minus stop-words, the sentences,
//! and a personal pronoun count.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Cleaned tokens that count as personal pronouns.
///
/// Matched before lowercasing so the country abbreviation "US" is not counted.
pub const PERSONAL_PRONOUNS: &[&str] = &["I", "we", "We", "my", "My", "ours", "Ours", "us", "Us"];

/// Abbreviations whose trailing period does not end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc", "ltd", "co", "corp",
    "no", "fig", "e.g", "i.e", "u.s", "u.k", "jan", "feb", "mar", "apr", "jun", "jul", "aug",
    "sep", "sept", "oct", "nov", "dec",
];

/// Contraction suffixes split off as their own tokens, checked in order.
const CLITIC_SUFFIXES: &[&str] = &[
    "n't", "n’t", "'m", "’m", "'re", "’re", "'ve", "’ve", "'ll", "’ll", "'d", "’d", "'s", "’s",
];

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+(?:['’]\w+)*|[^\w\s]").expect("word regex is valid"));

static SENTENCE_END_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[.!?]+["'”’)\]]*\s+"#).expect("sentence regex is valid"));

/// Raw tokenizer output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tokens {
    pub words: Vec<String>,
    pub sentences: Vec<String>,
}

/// Splits text into word tokens and sentences.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Tokens;
}

/// Regex-based tokenizer with abbreviation-aware sentence splitting.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleTokenizer;

impl RuleTokenizer {
    /// Word tokens, with punctuation marks and contraction suffixes as
    /// separate tokens ("we're" becomes "we" and "'re").
    pub fn words(&self, text: &str) -> Vec<String> {
        WORD_RE
            .find_iter(text)
            .flat_map(|m| split_clitics(m.as_str()))
            .map(str::to_string)
            .collect()
    }

    /// Sentences, trimmed, without empty entries.
    pub fn sentences(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for boundary in SENTENCE_END_RE.find_iter(text) {
            let candidate = &text[start..boundary.start()];
            let rest = &text[boundary.end()..];
            if ends_with_abbreviation(candidate) || starts_lowercase(rest) {
                continue;
            }
            push_sentence(&mut sentences, &text[start..boundary.end()]);
            start = boundary.end();
        }
        push_sentence(&mut sentences, &text[start..]);
        sentences
    }
}

impl Tokenizer for RuleTokenizer {
    fn tokenize(&self, text: &str) -> Tokens {
        Tokens {
            words: self.words(text),
            sentences: self.sentences(text),
        }
    }
}

fn strip_suffix_ignore_case<'t>(token: &'t str, suffix: &str) -> Option<&'t str> {
    let cut = token.len().checked_sub(suffix.len()).filter(|&cut| cut > 0)?;
    if token.is_char_boundary(cut) && token[cut..].eq_ignore_ascii_case(suffix) {
        Some(&token[..cut])
    } else {
        None
    }
}

/// Split trailing contraction suffixes off a word token.
fn split_clitics(token: &str) -> Vec<&str> {
    for suffix in CLITIC_SUFFIXES {
        if let Some(head) = strip_suffix_ignore_case(token, suffix) {
            let mut parts = split_clitics(head);
            parts.push(&token[head.len()..]);
            return parts;
        }
    }
    vec![token]
}

fn push_sentence(sentences: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if piece.chars().any(char::is_alphanumeric) {
        sentences.push(piece.to_string());
    }
}

fn ends_with_abbreviation(candidate: &str) -> bool {
    let last = candidate
        .split_whitespace()
        .next_back()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric());
    if last.is_empty() {
        return false;
    }
    // Single initials such as the "J" in "J. Smith".
    let mut chars = last.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_uppercase() {
            return true;
        }
    }
    ABBREVIATIONS.contains(&last.to_lowercase().as_str())
}

fn starts_lowercase(rest: &str) -> bool {
    rest.chars().next().is_some_and(char::is_lowercase)
}

/// Tokens and sentences prepared for scoring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedText {
    /// Cleaned lowercase tokens, stop-words included.
    pub tokens: Vec<String>,
    /// `tokens` with stop-words removed, in order.
    pub words: Vec<String>,
    pub sentences: Vec<String>,
    pub personal_pronouns: usize,
}

/// Strip everything but ASCII letters from a token.
pub fn clean_token(token: &str) -> String {
    token.chars().filter(char::is_ascii_alphabetic).collect()
}

/// Clean tokenizer output and remove stop-words.
///
/// Personal pronouns are counted on the cleaned token before lowercasing.
pub fn normalize<T: Tokenizer + ?Sized>(
    tokenizer: &T,
    text: &str,
    stop_words: &HashSet<String>,
) -> NormalizedText {
    let Tokens { words, sentences } = tokenizer.tokenize(text);

    let mut personal_pronouns = 0;
    let tokens: Vec<String> = words
        .iter()
        .filter_map(|raw| {
            let cleaned = clean_token(raw);
            if cleaned.is_empty() {
                return None;
            }
            if PERSONAL_PRONOUNS.contains(&cleaned.as_str()) {
                personal_pronouns += 1;
            }
            Some(cleaned.to_lowercase())
        })
        .collect();

    let words = tokens
        .iter()
        .filter(|token| !stop_words.contains(token.as_str()))
        .cloned()
        .collect();

    NormalizedText {
        tokens,
        words,
        sentences,
        personal_pronouns,
    }
}
