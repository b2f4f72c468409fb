//! Tile-by-tile editing of the current guess

use crate::core::lowercase;

/// Lifecycle of the row being typed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GuessStatus {
    #[default]
    Initial,
    Done,
    Failed,
    Complete,
}

/// The unconfirmed guess in the current row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Guess {
    pub row: usize,
    pub word: String,
    /// One entry per tile; empty strings are blank tiles
    pub letters: Vec<String>,
    pub status: GuessStatus,
    pub guessed_row: Option<usize>,
}

impl Guess {
    /// Blank guess for `row`
    #[must_use]
    pub fn empty(row: usize) -> Self {
        Self {
            row,
            ..Self::default()
        }
    }

    /// Whether every one of `length` tiles holds a letter
    #[must_use]
    pub fn is_filled(&self, length: usize) -> bool {
        self.letters.len() >= length && self.letters[..length].iter().all(|l| !l.is_empty())
    }

    fn padded_letters(&self, length: usize) -> Vec<String> {
        (0..length)
            .map(|i| self.letters.get(i).cloned().unwrap_or_default())
            .collect()
    }
}

/// New guess and cursor position after an edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessUpdate {
    pub guess: Guess,
    pub next_tile: usize,
}

/// Everything typing a letter depends on
#[derive(Debug, Clone, Copy)]
pub struct TypingContext<'a> {
    pub word_length: usize,
    pub max_attempts: usize,
    pub locked: bool,
    pub confirmed: usize,
    pub current_guess: &'a Guess,
    pub current_row: usize,
    pub selected_tile: usize,
}

/// Place `value` into the selected tile
///
/// The tile index is clamped to the row. The cursor moves to the next empty
/// tile after the one written, or stays put when there is none. Returns
/// `None` when input is locked or the attempt budget is spent.
#[must_use]
pub fn compute_typing_update(value: &str, ctx: &TypingContext<'_>) -> Option<GuessUpdate> {
    if ctx.confirmed >= ctx.max_attempts || ctx.locked || ctx.word_length == 0 {
        return None;
    }

    let target = ctx.selected_tile.min(ctx.word_length - 1);
    let mut letters = ctx.current_guess.padded_letters(ctx.word_length);
    letters[target] = lowercase(value);

    let next_tile = letters
        .iter()
        .enumerate()
        .find(|(i, letter)| *i > target && letter.is_empty())
        .map_or(target, |(i, _)| i);

    Some(GuessUpdate {
        guess: Guess {
            row: ctx.current_row,
            word: letters.concat(),
            letters,
            ..ctx.current_guess.clone()
        },
        next_tile,
    })
}

/// Clear a tile
///
/// Clears the selected tile if it holds a letter, otherwise the nearest
/// filled tile to its left, otherwise the last filled tile. The cursor lands
/// on the cleared tile.
#[must_use]
pub fn compute_delete_update(current_guess: &Guess, selected_tile: usize, word_length: usize) -> Option<GuessUpdate> {
    if word_length == 0 {
        return None;
    }

    let mut letters = current_guess.padded_letters(word_length);
    if letters.iter().all(String::is_empty) {
        return Some(GuessUpdate {
            guess: current_guess.clone(),
            next_tile: 0,
        });
    }

    let start = selected_tile.min(word_length - 1);
    let target = (0..=start)
        .rev()
        .find(|&i| !letters[i].is_empty())
        .or_else(|| letters.iter().rposition(|l| !l.is_empty()))
        .unwrap_or(0);

    letters[target].clear();

    Some(GuessUpdate {
        guess: Guess {
            word: letters.concat(),
            letters,
            ..current_guess.clone()
        },
        next_tile: target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guess(letters: &[&str]) -> Guess {
        Guess {
            row: 0,
            word: letters.concat(),
            letters: letters.iter().map(|l| (*l).to_string()).collect(),
            status: GuessStatus::Initial,
            guessed_row: None,
        }
    }

    fn typing(current_guess: &Guess, selected_tile: usize) -> TypingContext<'_> {
        TypingContext {
            word_length: 5,
            max_attempts: 6,
            locked: false,
            confirmed: 0,
            current_guess,
            current_row: 2,
            selected_tile,
        }
    }

    #[test]
    fn typing_moves_to_next_empty_tile() {
        let current = guess(&["t", "", "", "", ""]);
        let update = compute_typing_update("E", &typing(&current, 1)).unwrap();

        assert_eq!(update.guess.letters, vec!["t", "e", "", "", ""]);
        assert_eq!(update.guess.word, "te");
        assert_eq!(update.guess.row, 2);
        assert_eq!(update.next_tile, 2);
    }

    #[test]
    fn typing_skips_filled_tiles() {
        let current = guess(&["", "e", "r", "", "o"]);
        let update = compute_typing_update("t", &typing(&current, 0)).unwrap();
        assert_eq!(update.next_tile, 3);
    }

    #[test]
    fn typing_into_last_empty_tile_keeps_cursor() {
        let current = guess(&["t", "e", "r", "m", ""]);
        let update = compute_typing_update("o", &typing(&current, 4)).unwrap();
        assert_eq!(update.guess.word, "termo");
        assert_eq!(update.next_tile, 4);
    }

    #[test]
    fn typing_clamps_selected_tile() {
        let current = Guess::empty(0);
        let update = compute_typing_update("a", &typing(&current, 9)).unwrap();
        assert_eq!(update.guess.letters, vec!["", "", "", "", "a"]);
        assert_eq!(update.next_tile, 4);
    }

    #[test]
    fn typing_refused_when_locked_or_spent() {
        let current = Guess::empty(0);
        let mut ctx = typing(&current, 0);
        ctx.locked = true;
        assert!(compute_typing_update("a", &ctx).is_none());

        let mut ctx = typing(&current, 0);
        ctx.confirmed = 6;
        assert!(compute_typing_update("a", &ctx).is_none());
    }

    #[test]
    fn delete_clears_selected_tile() {
        let update = compute_delete_update(&guess(&["t", "e", "r", "", ""]), 1, 5).unwrap();
        assert_eq!(update.guess.letters, vec!["t", "", "r", "", ""]);
        assert_eq!(update.next_tile, 1);
    }

    #[test]
    fn delete_walks_left_from_empty_tile() {
        let update = compute_delete_update(&guess(&["t", "e", "r", "", ""]), 4, 5).unwrap();
        assert_eq!(update.guess.word, "te");
        assert_eq!(update.next_tile, 2);
    }

    #[test]
    fn delete_falls_back_to_last_filled_tile() {
        let update = compute_delete_update(&guess(&["", "", "", "m", "o"]), 1, 5).unwrap();
        assert_eq!(update.guess.letters, vec!["", "", "", "m", ""]);
        assert_eq!(update.next_tile, 4);
    }

    #[test]
    fn delete_on_empty_row_resets_cursor() {
        let current = Guess::empty(3);
        let update = compute_delete_update(&current, 3, 5).unwrap();
        assert_eq!(update.guess, current);
        assert_eq!(update.next_tile, 0);
        assert!(compute_delete_update(&current, 0, 0).is_none());
    }

    #[test]
    fn filled_guess_detection() {
        assert!(guess(&["t", "e", "r", "m", "o"]).is_filled(5));
        assert!(!guess(&["t", "e", "", "m", "o"]).is_filled(5));
        assert!(!Guess::empty(0).is_filled(5));
    }
}
