//! Keyboard shading and key handling

use crate::core::{Status, lowercase};
use rustc_hash::FxHashMap;

/// Per-letter statuses for one board, as from [`crate::core::compute_keyboard_statuses`]
pub type BoardKeyStatuses = FxHashMap<String, Status>;

/// How one letter key should be shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardLetterState {
    /// Single shade for single-board modes
    pub status: Option<Status>,
    /// One shade per board in multi-board modes
    pub segments: Option<Vec<Option<Status>>>,
    pub disabled: bool,
}

/// Combine per-board statuses into the state of one key
///
/// In multi-board modes a key is only disabled when it is absent on every
/// board in `active_boards` (the still-unsolved ones; all boards when
/// empty). In single-board mode it is disabled once known absent.
#[must_use]
pub fn resolve_keyboard_letter_state(
    key: &str,
    boards: &[BoardKeyStatuses],
    active_boards: &[BoardKeyStatuses],
    disabled: bool,
    multi_board: bool,
) -> KeyboardLetterState {
    let key = lowercase(key);
    let segments: Vec<Option<Status>> = boards.iter().map(|b| b.get(&key).copied()).collect();
    let relevant = if active_boards.is_empty() { boards } else { active_boards };

    let best = segments.iter().copied().flatten().max();
    let all_absent = !relevant.is_empty()
        && relevant
            .iter()
            .all(|b| b.get(&key) == Some(&Status::Absent));
    let should_disable = if multi_board {
        all_absent
    } else {
        best == Some(Status::Absent)
    };

    KeyboardLetterState {
        status: if multi_board || should_disable { None } else { best },
        segments: multi_board.then_some(segments),
        disabled: disabled || should_disable,
    }
}

/// A physical key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    Left,
    Right,
    Char(char),
}

/// What a key press asks the session to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyboardAction {
    Noop,
    Enter,
    Delete,
    Move(usize),
    Type(char),
}

/// Map a key press to an action
///
/// Arrow moves are clamped to the row. Only A–Z letters type; accented
/// letters are matched through normalization instead.
#[must_use]
pub fn resolve_keyboard_action(key: Key, disabled: bool, word_length: usize, selected_tile: usize) -> KeyboardAction {
    if disabled {
        return KeyboardAction::Noop;
    }

    let max_index = word_length.saturating_sub(1);
    match key {
        Key::Enter => KeyboardAction::Enter,
        Key::Backspace => KeyboardAction::Delete,
        Key::Left => KeyboardAction::Move(selected_tile.saturating_sub(1).min(max_index)),
        Key::Right => KeyboardAction::Move((selected_tile + 1).min(max_index)),
        Key::Char(c) if c.is_ascii_alphabetic() => KeyboardAction::Type(c.to_ascii_uppercase()),
        Key::Char(_) => KeyboardAction::Noop,
    }
}
