//! The canonical answer set for one round

use super::calendar;
use crate::core::{GameMode, Language, grapheme_len, normalize};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The answer(s) for one round
///
/// `words` holds one normalized word per board; `display` and `definitions`
/// are aligned with it. An empty `words` list means no puzzle is available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionSet {
    pub words: Vec<String>,
    pub display: Vec<String>,
    pub definitions: Vec<Option<String>>,
    pub date: NaiveDate,
    pub day_index: u32,
    pub language: Language,
    pub mode: GameMode,
}

impl SolutionSet {
    /// Empty set signalling "puzzle unavailable" for a date
    #[must_use]
    pub fn unavailable(date: NaiveDate, mode: GameMode, language: Language) -> Self {
        Self {
            words: Vec::new(),
            display: Vec::new(),
            definitions: Vec::new(),
            date,
            day_index: calendar::day_index(date),
            language,
            mode,
        }
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        !self.words.is_empty()
    }

    #[must_use]
    pub fn boards(&self) -> usize {
        self.words.len()
    }

    /// Tile count of the first board's word, 0 when unavailable
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.words.first().map_or(0, |w| grapheme_len(w))
    }

    /// Date of the next puzzle
    #[must_use]
    pub fn tomorrow(&self) -> NaiveDate {
        calendar::next_date(self.date)
    }

    /// Display form for a board, falling back to the normalized word
    #[must_use]
    pub fn display_for(&self, board: usize) -> Option<&str> {
        self.display
            .get(board)
            .or_else(|| self.words.get(board))
            .map(String::as_str)
    }

    #[must_use]
    pub fn definition_for(&self, board: usize) -> Option<&str> {
        self.definitions.get(board)?.as_deref()
    }

    /// Whether every board's word appears in `tries`
    #[must_use]
    pub fn is_solved_by<S: AsRef<str>>(&self, tries: &[S]) -> bool {
        has_solved_all_boards(&self.words, tries)
    }

    /// Keep only words of the mode's length, capped at its board count
    #[must_use]
    pub fn sanitized(self) -> Self {
        let config = self.mode.config();
        let mut words = Vec::new();
        let mut display = Vec::new();
        let mut definitions = Vec::new();

        for (index, word) in self.words.iter().enumerate() {
            let normalized = normalize(word);
            if grapheme_len(&normalized) != config.word_length {
                continue;
            }
            display.push(
                self.display
                    .get(index)
                    .cloned()
                    .unwrap_or_else(|| normalized.clone()),
            );
            definitions.push(self.definitions.get(index).cloned().flatten());
            words.push(normalized);
            if words.len() == config.boards {
                break;
            }
        }

        Self {
            words,
            display,
            definitions,
            ..self
        }
    }
}

/// Whether every solution appears (normalized) in `tries`
#[must_use]
pub fn has_solved_all_boards<S: AsRef<str>, T: AsRef<str>>(solutions: &[S], tries: &[T]) -> bool {
    let tries: Vec<String> = tries.iter().map(|t| normalize(t.as_ref())).collect();
    solutions
        .iter()
        .all(|solution| tries.contains(&normalize(solution.as_ref())))
}

/// Index of the try that solved `solution`, if any
#[must_use]
pub fn solved_at<S: AsRef<str>>(solution: &str, tries: &[S]) -> Option<usize> {
    if solution.is_empty() {
        return None;
    }
    let solution = normalize(solution);
    tries.iter().position(|t| normalize(t.as_ref()) == solution)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> SolutionSet {
        let date = NaiveDate::from_ymd_opt(2026, 2, 26).unwrap();
        SolutionSet {
            words: words.iter().map(|w| (*w).to_string()).collect(),
            display: words.iter().map(|w| (*w).to_string()).collect(),
            definitions: vec![None; words.len()],
            date,
            day_index: calendar::day_index(date),
            language: Language::Pt,
            mode: GameMode::Duo,
        }
    }

    #[test]
    fn solved_only_when_every_board_is_in_tries() {
        let solutions = set(&["casa", "lago"]);
        assert!(!solutions.is_solved_by(&["casa"]));
        assert!(solutions.is_solved_by(&["casa", "teste", "lago"]));
        assert!(solutions.is_solved_by(&["LAGO", "Casa"]));
    }

    #[test]
    fn solved_at_finds_first_matching_try() {
        assert_eq!(solved_at("lago", &["casa", "lago"]), Some(1));
        assert_eq!(solved_at("lago", &["casa"]), None);
        assert_eq!(solved_at("", &[""]), None);
    }

    #[test]
    fn unavailable_has_no_words() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let empty = SolutionSet::unavailable(date, GameMode::Term, Language::En);
        assert!(!empty.is_available());
        assert_eq!(empty.day_index, 2);
        assert_eq!(empty.word_length(), 0);
    }

    #[test]
    fn sanitized_drops_wrong_length_and_extra_boards() {
        let mut solutions = set(&["casa", "termo", "NAÇÃO", "mundo"]);
        solutions.display[2] = "nação".to_string();
        let clean = solutions.sanitized();

        assert_eq!(clean.words, vec!["termo", "nacao"]);
        assert_eq!(clean.display, vec!["termo", "nação"]);
        assert_eq!(clean.definitions.len(), 2);
    }

    #[test]
    fn display_falls_back_to_word() {
        let mut solutions = set(&["termo"]);
        solutions.display.clear();
        assert_eq!(solutions.display_for(0), Some("termo"));
        assert_eq!(solutions.display_for(1), None);
    }
}
