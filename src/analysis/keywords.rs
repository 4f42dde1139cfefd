//! Text normalization and keyword extraction.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximal runs of letters or digits; everything else is a separator.
/// Covers CJK as well as latin alphanumerics.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}\p{N}]+").unwrap());

/// Extracts a comparable keyword set from free text.
///
/// Lower-cases, strips punctuation while preserving CJK and alphanumeric
/// runes, splits on the resulting boundaries, discards tokens of one
/// character or less, and de-duplicates. Empty or whitespace-only input
/// yields an empty set.
pub fn extract_keywords(text: &str) -> HashSet<String> {
    let lowered = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .filter(|token| token.chars().count() > 1)
        .collect()
}
