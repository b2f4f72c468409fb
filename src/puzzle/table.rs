//! Precomputed daily puzzle table
//!
//! A fast path for the selector: rows keyed by (date, language, mode) giving
//! the solution for each board. Rows are only trusted when the whole entry
//! passes [`validate_rows`].

use crate::core::{GameMode, Language, grapheme_len, normalize};
use chrono::NaiveDate;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// The solution for one board on one date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRow {
    pub board_index: usize,
    #[serde(rename = "solution_normalized")]
    pub normalized: String,
    #[serde(rename = "solution_display")]
    pub display: String,
}

/// Source of precomputed puzzle rows
pub trait PuzzleTable {
    /// All rows stored for the key, in any order; empty when none
    fn rows(&self, date: NaiveDate, language: Language, mode: GameMode) -> Vec<PuzzleRow>;
}

/// A stored table record as written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRecord {
    pub puzzle_date: NaiveDate,
    pub language: Language,
    pub mode: u8,
    #[serde(flatten)]
    pub row: PuzzleRow,
}

/// Puzzle table held in memory, loadable from a JSON array of [`PuzzleRecord`]
#[derive(Debug, Clone, Default)]
pub struct JsonPuzzleTable {
    rows: FxHashMap<(NaiveDate, Language, u8), Vec<PuzzleRow>>,
}

impl JsonPuzzleTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = PuzzleRecord>) -> Self {
        let mut table = Self::new();
        for record in records {
            table.insert(record);
        }
        table
    }

    pub fn insert(&mut self, record: PuzzleRecord) {
        self.rows
            .entry((record.puzzle_date, record.language, record.mode))
            .or_default()
            .push(record.row);
    }

    /// Load a table from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read or is not a JSON array of records.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let records: Vec<PuzzleRecord> = serde_json::from_str(&content)?;
        Ok(Self::from_records(records))
    }

    /// Write the table as a JSON array of records
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let content = serde_json::to_string_pretty(&self.records())?;
        fs::write(path, content)
    }

    /// All records, sorted by date, language, mode and board
    #[must_use]
    pub fn records(&self) -> Vec<PuzzleRecord> {
        let mut records: Vec<PuzzleRecord> = self
            .rows
            .iter()
            .flat_map(|(&(puzzle_date, language, mode), rows)| {
                rows.iter().map(move |row| PuzzleRecord {
                    puzzle_date,
                    language,
                    mode,
                    row: row.clone(),
                })
            })
            .collect();
        records.sort_by(|a, b| {
            (a.puzzle_date, a.language.code(), a.mode, a.row.board_index).cmp(&(
                b.puzzle_date,
                b.language.code(),
                b.mode,
                b.row.board_index,
            ))
        });
        records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl PuzzleTable for JsonPuzzleTable {
    fn rows(&self, date: NaiveDate, language: Language, mode: GameMode) -> Vec<PuzzleRow> {
        self.rows
            .get(&(date, language, mode.id()))
            .cloned()
            .unwrap_or_default()
    }
}

/// Validate a complete table entry for a mode
///
/// Returns the rows sorted by board index with normalized words, or `None`
/// if any row breaks an invariant: wrong row count, board index out of range
/// or repeated, wrong word length, or a word used on two boards. A bad row
/// discards the whole entry.
#[must_use]
pub fn validate_rows(rows: &[PuzzleRow], boards: usize, word_length: usize) -> Option<Vec<PuzzleRow>> {
    if rows.len() != boards {
        return None;
    }

    let mut seen_boards = FxHashSet::default();
    let mut seen_words = FxHashSet::default();
    let mut valid = Vec::with_capacity(rows.len());

    for row in rows {
        let normalized = normalize(row.normalized.trim());
        if row.board_index >= boards
            || !seen_boards.insert(row.board_index)
            || grapheme_len(&normalized) != word_length
            || !normalized.chars().all(char::is_alphabetic)
            || !seen_words.insert(normalized.clone())
        {
            return None;
        }
        let display = if row.display.trim().is_empty() {
            normalized.clone()
        } else {
            row.display.trim().to_string()
        };
        valid.push(PuzzleRow {
            board_index: row.board_index,
            normalized,
            display,
        });
    }

    valid.sort_by_key(|row| row.board_index);
    Some(valid)
}
