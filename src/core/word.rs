//! Normalized puzzle word
//!
//! A Word stores a normalized word together with its grapheme tiles.

use super::normalize::{grapheme_split, normalize};
use std::fmt;
use thiserror::Error;

/// A normalized word split into tiles
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<String>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Word must not be empty")]
    Empty,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from any casing/accenting of its text
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains non-alphabetic characters.
    ///
    /// # Examples
    /// ```
    /// use letrix::core::Word;
    ///
    /// let word = Word::new("NAÇÃO").unwrap();
    /// assert_eq!(word.text(), "nacao");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = normalize(text.as_ref().trim());

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(char::is_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = grapheme_split(&text);
        Ok(Self { text, letters })
    }

    /// Create a Word and require an exact tile count
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` when the tile count differs from `length`,
    /// or any error from [`Word::new`].
    pub fn with_length(text: impl AsRef<str>, length: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual: word.len(),
            });
        }
        Ok(word)
    }

    /// Normalized text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// One entry per tile
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[String] {
        &self.letters
    }

    /// Number of tiles
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check if the word contains a specific letter
    #[must_use]
    pub fn has_letter(&self, letter: &str) -> bool {
        self.letters.iter().any(|l| l == letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_normalizes() {
        let word = Word::new("Nível").unwrap();
        assert_eq!(word.text(), "nivel");
        assert_eq!(word.letters(), &["n", "i", "v", "e", "l"]);
    }

    #[test]
    fn word_creation_rejects_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cr ne"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_with_length_checks_tiles() {
        assert!(Word::with_length("nação", 5).is_ok());
        assert_eq!(
            Word::with_length("casa", 5),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 4
            })
        );
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("termo").unwrap();
        assert!(word.has_letter("t"));
        assert!(!word.has_letter("z"));
    }

    #[test]
    fn word_display() {
        let word = Word::new("AÇÃO").unwrap();
        assert_eq!(format!("{word}"), "acao");
    }
}
