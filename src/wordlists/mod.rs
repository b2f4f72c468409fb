//! Dictionaries for guess validation and puzzle selection
//!
//! The [`Dictionary`] trait is the seam the puzzle selector and the session
//! shell talk to. [`WordList`] is the in-memory implementation backed by the
//! embedded lists or a TSV file.

mod embedded;
pub mod loader;

pub use embedded::{EN_WORDS, EN_WORDS_COUNT, PT_WORDS, PT_WORDS_COUNT};

use crate::core::{Language, grapheme_len, normalize};
use rustc_hash::FxHashMap;

/// One dictionary word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub normalized: String,
    pub display: String,
    pub is_solution: bool,
    pub definition: Option<String>,
}

impl DictionaryEntry {
    #[must_use]
    pub fn new(display: &str, is_solution: bool, definition: Option<&str>) -> Self {
        Self {
            normalized: normalize(display),
            display: display.to_string(),
            is_solution,
            definition: definition
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        grapheme_len(&self.normalized)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

/// Word lookups needed by the puzzle engine
pub trait Dictionary {
    /// Whether `normalized_word` is a known word of the given language and length
    fn word_exists(&self, normalized_word: &str, language: Language, word_length: usize) -> bool;

    /// Solution-eligible words of the given language and length, ordered by normalized form
    fn eligible_solution_words(&self, language: Language, word_length: usize)
    -> Vec<DictionaryEntry>;

    /// Definition attached to a word, if any
    fn definition_for(&self, normalized_word: &str, language: Language) -> Option<String>;
}

/// In-memory dictionary
#[derive(Debug, Clone, Default)]
pub struct WordList {
    entries: FxHashMap<Language, Vec<DictionaryEntry>>,
    index: FxHashMap<(Language, String), usize>,
}

impl WordList {
    /// Empty dictionary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dictionary built from the lists compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use letrix::core::Language;
    /// use letrix::wordlists::{Dictionary, WordList};
    ///
    /// let words = WordList::embedded();
    /// assert!(words.word_exists("termo", Language::Pt, 5));
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        let mut list = Self::new();
        list.extend(Language::Pt, loader::entries_from_slice(PT_WORDS));
        list.extend(Language::En, loader::entries_from_slice(EN_WORDS));
        list
    }

    /// Add entries for a language; a later entry for the same normalized word replaces the earlier one
    pub fn extend(&mut self, language: Language, entries: impl IntoIterator<Item = DictionaryEntry>) {
        for entry in entries {
            if entry.is_empty() {
                continue;
            }
            let list = self.entries.entry(language).or_default();
            let key = (language, entry.normalized.clone());
            if let Some(&position) = self.index.get(&key) {
                list[position] = entry;
            } else {
                self.index.insert(key, list.len());
                list.push(entry);
            }
        }
    }

    /// Number of words for a language
    #[must_use]
    pub fn count(&self, language: Language) -> usize {
        self.entries.get(&language).map_or(0, Vec::len)
    }

    fn lookup(&self, normalized_word: &str, language: Language) -> Option<&DictionaryEntry> {
        let position = self
            .index
            .get(&(language, normalize(normalized_word)))
            .copied()?;
        self.entries.get(&language)?.get(position)
    }
}

impl Dictionary for WordList {
    fn word_exists(&self, normalized_word: &str, language: Language, word_length: usize) -> bool {
        self.lookup(normalized_word, language)
            .is_some_and(|entry| entry.len() == word_length)
    }

    fn eligible_solution_words(
        &self,
        language: Language,
        word_length: usize,
    ) -> Vec<DictionaryEntry> {
        let mut eligible: Vec<DictionaryEntry> = self
            .entries
            .get(&language)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|entry| entry.is_solution && entry.len() == word_length)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        eligible.sort_by(|a, b| a.normalized.cmp(&b.normalized));
        eligible
    }

    fn definition_for(&self, normalized_word: &str, language: Language) -> Option<String> {
        self.lookup(normalized_word, language)?.definition.clone()
    }
}
