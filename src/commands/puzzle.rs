//! Look up the solution sets for a date

use crate::core::{GameMode, Language};
use crate::puzzle::{PuzzleSelector, SolutionSet};
use crate::wordlists::Dictionary;
use chrono::NaiveDate;

/// Solution sets for the given modes on one date, in mode order
///
/// Unavailable puzzles are kept as empty sets so the caller can report them.
pub fn solutions_for_date<D: Dictionary + ?Sized>(
    selector: &PuzzleSelector<'_, D>,
    date: NaiveDate,
    language: Language,
    modes: &[GameMode],
) -> Vec<SolutionSet> {
    modes
        .iter()
        .map(|&mode| selector.select(date, mode, language))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordList;

    #[test]
    fn one_set_per_mode() {
        let words = WordList::embedded();
        let selector = PuzzleSelector::new(&words);
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        let sets = solutions_for_date(&selector, date, Language::Pt, &GameMode::ALL);
        assert_eq!(sets.len(), GameMode::ALL.len());
        for (set, mode) in sets.iter().zip(GameMode::ALL) {
            assert_eq!(set.mode, mode);
            assert_eq!(set.date, date);
        }
    }

    #[test]
    fn same_inputs_same_words() {
        let words = WordList::embedded();
        let selector = PuzzleSelector::new(&words);
        let date = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();

        let first = solutions_for_date(&selector, date, Language::Pt, &[GameMode::Four]);
        let second = solutions_for_date(&selector, date, Language::Pt, &[GameMode::Four]);
        assert_eq!(first, second);
    }
}
