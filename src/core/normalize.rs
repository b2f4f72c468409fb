//! Text canonicalization for guess/solution comparison
//!
//! Every equality check between a guess and a solution goes through [`normalize`]:
//! lowercase, canonical decomposition, combining marks removed. Word length is
//! always measured in grapheme clusters, never in bytes or code points.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;
use unicode_segmentation::UnicodeSegmentation;

/// Lowercase `text` and strip diacritics
///
/// Idempotent: `normalize(&normalize(w)) == normalize(w)`.
///
/// # Examples
/// ```
/// use letrix::core::normalize;
///
/// assert_eq!(normalize("AÇÃO"), "acao");
/// assert_eq!(normalize("maçã"), "maca");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Lowercase `text` without touching diacritics
#[must_use]
pub fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Split `text` into lowercase user-perceived characters
///
/// A letter carrying a diacritic counts as one tile even when it is stored
/// as a base letter plus combining marks.
#[must_use]
pub fn grapheme_split(text: &str) -> Vec<String> {
    text.to_lowercase()
        .graphemes(true)
        .map(str::to_string)
        .collect()
}

/// Canonical word length: number of grapheme clusters
#[must_use]
pub fn grapheme_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// `true` when both words are equal after normalization
#[must_use]
pub fn same_word(left: &str, right: &str) -> bool {
    normalize(left) == normalize(right)
}
