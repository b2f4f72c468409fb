//! Per-board row state derived from the try list
//!
//! Nothing here is stored: whether a board is solved, and which rows it
//! still shows, is recomputed from the shared tries every time.

use crate::core::{grapheme_split, same_word};

/// How a row of one board is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStatus {
    /// The row holds the board's solution
    Done,
    /// Nothing to show yet, or the board was solved above
    Blank,
    /// The row being typed
    Guessing,
    /// A confirmed, non-winning guess
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardRowState {
    /// Row at which the board was solved
    pub guessed_index: Option<usize>,
    pub is_board_solved: bool,
    pub is_guessed_row: bool,
    pub is_current_row: bool,
    pub is_locked_after_solved: bool,
    pub is_interactive_current_row: bool,
    pub status: RowStatus,
}

/// First try that matches the board's solution
#[must_use]
pub fn board_guessed_index<S: AsRef<str>>(tries: &[S], solution: &str) -> Option<usize> {
    if solution.is_empty() {
        return None;
    }
    tries.iter().position(|t| same_word(t.as_ref(), solution))
}

/// Derive how `row` of a board is shown
#[must_use]
pub fn board_row_state<S: AsRef<str>>(
    row: usize,
    current_row: usize,
    solution: &str,
    tries: &[S],
) -> BoardRowState {
    let guessed_index = board_guessed_index(tries, solution);
    let is_board_solved = guessed_index.is_some();
    let is_guessed_row = guessed_index == Some(row);
    let is_current_row = row == current_row;
    let is_locked_after_solved = guessed_index.is_some_and(|solved| row > solved);
    let is_interactive_current_row = is_current_row && !is_guessed_row && !is_board_solved;

    let status = if is_guessed_row {
        RowStatus::Done
    } else if is_locked_after_solved {
        RowStatus::Blank
    } else if is_current_row {
        RowStatus::Guessing
    } else if current_row < row {
        RowStatus::Blank
    } else {
        RowStatus::Complete
    };

    BoardRowState {
        guessed_index,
        is_board_solved,
        is_guessed_row,
        is_current_row,
        is_locked_after_solved,
        is_interactive_current_row,
        status,
    }
}

/// Letters to draw in a row
///
/// Solved boards stop showing anything below the solving row. The current
/// row shows the in-progress guess until a confirmed try exists for it.
#[must_use]
pub fn resolve_displayed_row_letters(
    state: &BoardRowState,
    row: usize,
    current_letters: &[String],
    saved_try: Option<&str>,
) -> Vec<String> {
    let saved: Vec<String> = saved_try.map(grapheme_split).unwrap_or_default();

    if let Some(solved) = state.guessed_index {
        return if row <= solved { saved } else { Vec::new() };
    }

    if state.is_current_row && saved.is_empty() {
        return current_letters.to_vec();
    }

    saved
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIES: [&str; 3] = ["carta", "termo", "mundo"];

    #[test]
    fn solved_board_locks_rows_below() {
        let at_solution = board_row_state(1, 3, "termo", &TRIES);
        assert_eq!(at_solution.status, RowStatus::Done);
        assert!(at_solution.is_board_solved);

        let below = board_row_state(2, 3, "termo", &TRIES);
        assert_eq!(below.status, RowStatus::Blank);
        assert!(below.is_locked_after_solved);

        let above = board_row_state(0, 3, "termo", &TRIES);
        assert_eq!(above.status, RowStatus::Complete);
    }

    #[test]
    fn unsolved_board_rows() {
        assert_eq!(board_row_state(0, 3, "livro", &TRIES).status, RowStatus::Complete);

        let current = board_row_state(3, 3, "livro", &TRIES);
        assert_eq!(current.status, RowStatus::Guessing);
        assert!(current.is_interactive_current_row);

        assert_eq!(board_row_state(5, 3, "livro", &TRIES).status, RowStatus::Blank);
    }

    #[test]
    fn solved_board_is_not_interactive() {
        let state = board_row_state(3, 3, "carta", &TRIES);
        assert!(!state.is_interactive_current_row);
        assert_eq!(state.status, RowStatus::Blank);
    }

    #[test]
    fn guessed_index_ignores_accents() {
        assert_eq!(board_guessed_index(&["nacao"], "nação"), Some(0));
        assert_eq!(board_guessed_index(&["nacao"], ""), None);
    }

    #[test]
    fn displayed_letters() {
        let typing = vec!["l".to_string(), "i".to_string()];

        let current = board_row_state(3, 3, "livro", &TRIES);
        assert_eq!(resolve_displayed_row_letters(&current, 3, &typing, None), typing);

        let past = board_row_state(1, 3, "livro", &TRIES);
        assert_eq!(
            resolve_displayed_row_letters(&past, 1, &typing, Some("termo")),
            vec!["t", "e", "r", "m", "o"]
        );

        let locked = board_row_state(3, 3, "carta", &TRIES);
        assert!(resolve_displayed_row_letters(&locked, 3, &typing, None).is_empty());
    }
}
