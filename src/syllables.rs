//! Spelling-based syllable counting.
//!
//! English has no exact spelling-to-syllable rule, so this is a heuristic:
//! count vowel groups, then correct for the usual silent endings.
//!
//! 1. Keep ASCII letters only and lowercase them. Nothing left counts as 0.
//! 2. Words of three letters or fewer are one syllable.
//! 3. Count maximal runs of `a e i o u y`.
//! 4. `-ed` is silent after a consonant other than `t` or `d` ("jumped" vs
//!    "wanted" vs "studied").
//! 5. `-es` is silent after a consonant that is not a sibilant ("makes" vs
//!    "boxes" vs "companies").
//! 6. A trailing `e` is silent unless the word ends in `-le` ("cake" vs "table").
//! 7. Every non-empty word has at least one syllable.

const VOWELS: &[u8] = b"aeiouy";

fn is_vowel(b: u8) -> bool {
    VOWELS.contains(&b)
}

/// Count the syllables in `word`.
///
/// ```ignore
/// assert_eq!(count("readability"), 5);
/// assert_eq!(count("jumped"), 1);
/// ```
pub fn count(word: &str) -> usize {
    let letters: Vec<u8> = word
        .bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| b.to_ascii_lowercase())
        .collect();

    if letters.is_empty() {
        return 0;
    }
    if letters.len() <= 3 {
        return 1;
    }

    let mut groups = 0usize;
    let mut in_vowel_run = false;
    for &b in &letters {
        let vowel = is_vowel(b);
        if vowel && !in_vowel_run {
            groups += 1;
        }
        in_vowel_run = vowel;
    }

    let n = letters.len();
    let last = letters[n - 1];
    let penult = letters[n - 2];
    let before = letters[n - 3];

    // An `e` that shares a vowel group with the letter before it ("-ies",
    // "-eed") is already counted once and is never silent.
    let silent = match (penult, last) {
        (b'e', b'd') => !is_vowel(before) && !matches!(before, b't' | b'd'),
        (b'e', b's') => {
            !is_vowel(before) && !matches!(before, b's' | b'x' | b'z' | b'c' | b'g' | b'h')
        }
        (b'l', b'e') => false,
        (_, b'e') => !is_vowel(penult),
        _ => false,
    };

    if silent {
        groups = groups.saturating_sub(1);
    }
    groups.max(1)
}

/// Whether `word` counts as complex (more than two syllables).
pub fn is_complex(word: &str) -> bool {
    count(word) > 2
}
