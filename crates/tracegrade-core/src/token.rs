//! Text canonicalization applied before any word comparison.

/// Characters dropped from tokens: space, hyphen, en dash, em dash.
const SEPARATORS: [char; 4] = [' ', '-', '\u{2013}', '\u{2014}'];

/// Canonicalize `text` so formatting differences never cause a mismatch.
///
/// "Sun-set", "sun set" and "SUNSET" all become "sunset".
pub fn normalize_token(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !SEPARATORS.contains(c))
        .collect();
    stripped.trim().to_string()
}
