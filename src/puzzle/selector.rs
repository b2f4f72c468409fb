//! Deterministic daily puzzle selection
//!
//! Every player must get the same words for a (date, mode, language). The
//! selector first tries the precomputed [`PuzzleTable`]; when no complete,
//! valid entry exists it derives the words from the dictionary with a
//! 32-bit FNV-1a seed per board.

use super::calendar::{day_index, iso_date};
use super::solution::SolutionSet;
use super::table::{PuzzleRow, PuzzleTable, validate_rows};
use crate::core::{GameMode, Language};
use crate::wordlists::{Dictionary, DictionaryEntry};
use chrono::NaiveDate;
use log::{debug, warn};
use rustc_hash::FxHashSet;
use thiserror::Error;

const FNV_OFFSET: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// Why the hash path could not produce a puzzle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("need {needed} eligible words, dictionary has {available}")]
    InsufficientWords { needed: usize, available: usize },
}

/// 32-bit FNV-1a over raw bytes
#[must_use]
pub fn fnv1a32(bytes: &[u8]) -> u32 {
    let mut hash = FNV_OFFSET;
    for &b in bytes {
        hash = (hash ^ u32::from(b)).wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Seed for one board: `fnv1a32("{isoDate}:{language}:{modeId}:{board}")`
#[must_use]
pub fn board_seed(date: NaiveDate, language: Language, mode: GameMode, board: usize) -> u32 {
    let key = format!("{}:{}:{}:{board}", iso_date(date), language.code(), mode.id());
    fnv1a32(key.as_bytes())
}

/// Map seeds to distinct slots in `0..total` with forward linear probing
///
/// # Errors
///
/// Returns `SelectionError::InsufficientWords` when there are fewer slots than seeds.
pub fn assign_offsets(seeds: &[u32], total: usize) -> Result<Vec<usize>, SelectionError> {
    if total == 0 || total < seeds.len() {
        return Err(SelectionError::InsufficientWords {
            needed: seeds.len(),
            available: total,
        });
    }

    let mut used = FxHashSet::default();
    let mut offsets = Vec::with_capacity(seeds.len());

    for &seed in seeds {
        let mut offset = seed as usize % total;
        let mut attempts = 0;
        while used.contains(&offset) {
            attempts += 1;
            if attempts >= total {
                return Err(SelectionError::InsufficientWords {
                    needed: seeds.len(),
                    available: total,
                });
            }
            offset = (offset + 1) % total;
        }
        used.insert(offset);
        offsets.push(offset);
    }

    Ok(offsets)
}

/// Chooses the solution words for a date
pub struct PuzzleSelector<'a, D: Dictionary + ?Sized> {
    dictionary: &'a D,
    table: Option<&'a dyn PuzzleTable>,
}

impl<'a, D: Dictionary + ?Sized> PuzzleSelector<'a, D> {
    /// Selector that always derives words from the dictionary
    pub const fn new(dictionary: &'a D) -> Self {
        Self {
            dictionary,
            table: None,
        }
    }

    /// Use a precomputed table as the fast path
    #[must_use]
    pub fn with_table(mut self, table: &'a dyn PuzzleTable) -> Self {
        self.table = Some(table);
        self
    }

    /// Solution set for (date, mode, language)
    ///
    /// Returns an empty set (see [`SolutionSet::is_available`]) when no
    /// puzzle can be generated.
    pub fn select(&self, date: NaiveDate, mode: GameMode, language: Language) -> SolutionSet {
        let rows = match self.table_rows(date, mode, language) {
            Some(rows) => rows,
            None => match self.dictionary_rows(date, mode, language) {
                Ok(rows) => rows,
                Err(e) => {
                    warn!("no {language}/{mode} puzzle for {date}: {e}");
                    return SolutionSet::unavailable(date, mode, language);
                }
            },
        };

        let definitions = rows
            .iter()
            .map(|row| self.dictionary.definition_for(&row.normalized, language))
            .collect();

        SolutionSet {
            words: rows.iter().map(|row| row.normalized.clone()).collect(),
            display: rows.into_iter().map(|row| row.display).collect(),
            definitions,
            date,
            day_index: day_index(date),
            language,
            mode,
        }
    }

    fn table_rows(&self, date: NaiveDate, mode: GameMode, language: Language) -> Option<Vec<PuzzleRow>> {
        let table = self.table?;
        let rows = table.rows(date, language, mode);
        if rows.is_empty() {
            return None;
        }

        let config = mode.config();
        let valid = validate_rows(&rows, config.boards, config.word_length);
        if valid.is_none() {
            warn!(
                "discarding malformed puzzle table entry for {date} {language}/{mode} ({} rows)",
                rows.len()
            );
        } else {
            debug!("puzzle for {date} {language}/{mode} served from table");
        }
        valid
    }

    fn dictionary_rows(
        &self,
        date: NaiveDate,
        mode: GameMode,
        language: Language,
    ) -> Result<Vec<PuzzleRow>, SelectionError> {
        let config = mode.config();
        let mut eligible: Vec<DictionaryEntry> = self
            .dictionary
            .eligible_solution_words(language, config.word_length);
        eligible.sort_by(|a, b| a.normalized.cmp(&b.normalized));
        eligible.dedup_by(|a, b| a.normalized == b.normalized);

        let seeds: Vec<u32> = (0..config.boards)
            .map(|board| board_seed(date, language, mode, board))
            .collect();
        let offsets = assign_offsets(&seeds, eligible.len())?;

        debug!(
            "puzzle for {date} {language}/{mode} derived from {} eligible words",
            eligible.len()
        );

        Ok(offsets
            .into_iter()
            .enumerate()
            .map(|(board_index, offset)| {
                let entry = &eligible[offset];
                PuzzleRow {
                    board_index,
                    normalized: entry.normalized.clone(),
                    display: entry.display.clone(),
                }
            })
            .collect())
    }
}
