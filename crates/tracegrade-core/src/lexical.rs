//! Spoken and typed word matching.
//!
//! Two checks are kept deliberately separate: [`is_word_match`] for a single
//! recognized word, which is lenient because recognizers add filler words
//! and near-miss spellings, and [`is_token_sequence_match`] for words built
//! from syllable tiles, which is exact.

use crate::config::LexicalConfig;
use crate::token::normalize_token;

/// Default closeness a response must exceed to count as a near miss.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.75;

/// Levenshtein distance between `a` and `b`, counted in `char`s.
///
/// Uses a single rolling row sized by the shorter string.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, lc) in long.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let substitution = diagonal + usize::from(lc != sc);
            let insertion = row[j] + 1;
            let deletion = row[j + 1] + 1;
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(insertion).min(deletion);
        }
    }
    row[short.len()]
}

/// Closeness of two already-normalized tokens in `[0, 1]`.
fn closeness(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count()).max(1);
    let distance = edit_distance(a, b);
    max_len.saturating_sub(distance) as f64 / max_len as f64
}

/// Edit-distance closeness of `spoken` to `target` after normalization.
///
/// `1.0` means identical; this is the ratio [`is_word_match`] compares
/// against its threshold.
pub fn word_similarity(spoken: &str, target: &str) -> f64 {
    closeness(&normalize_token(spoken), &normalize_token(target))
}

/// Whether a recognized or typed word is an acceptable answer for `target`.
pub fn is_word_match(spoken: &str, target: &str) -> bool {
    is_word_match_with(spoken, target, &LexicalConfig::default())
}

/// [`is_word_match`] with a configurable closeness threshold.
///
/// Accepts when the normalized forms are equal, when either contains the
/// other, or when their closeness is strictly above the threshold. An empty
/// normalized side is contained in any word, so it always matches.
pub fn is_word_match_with(spoken: &str, target: &str, config: &LexicalConfig) -> bool {
    let spoken = normalize_token(spoken);
    let target = normalize_token(target);

    if spoken == target {
        return true;
    }
    if spoken.contains(&target) || target.contains(&spoken) {
        return true;
    }
    closeness(&spoken, &target) > config.similarity_threshold
}

/// Whether the syllables a learner picked spell the expected word.
///
/// Passes when the joined selection equals `full_target`, or when each
/// selected syllable equals the expected one at the same position.
pub fn is_token_sequence_match<S, E>(selected: &[S], expected: &[E], full_target: &str) -> bool
where
    S: AsRef<str>,
    E: AsRef<str>,
{
    let joined: String = selected.iter().map(|s| s.as_ref()).collect();
    if normalize_token(&joined) == normalize_token(full_target) {
        return true;
    }

    selected.len() == expected.len()
        && selected
            .iter()
            .zip(expected)
            .all(|(s, e)| normalize_token(s.as_ref()) == normalize_token(e.as_ref()))
}
