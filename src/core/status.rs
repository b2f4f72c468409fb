//! Guess feedback calculation
//!
//! Per-tile feedback for one guess against one solution, and the folded
//! per-letter feedback used to shade keyboard keys.

use super::normalize::{grapheme_split, normalize};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feedback for one tile or one keyboard letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Letter not in the word (or every occurrence already claimed)
    Absent,
    /// Letter in the word, wrong position
    Present,
    /// Letter in the correct position
    Correct,
}

impl Status {
    /// Emoji square used in share text
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}

/// Calculate per-tile statuses for `guess_letters` against `solution`
///
/// Duplicate letters are handled with a two-pass claim:
/// 1. Exact position matches are marked correct and claim their solution slot
/// 2. Remaining tiles claim the first unclaimed slot holding the same letter, left to right
///
/// Letters are normalized before comparison. Tiles past the end of the
/// solution are absent.
///
/// # Examples
/// ```
/// use letrix::core::{Status, compute_guess_statuses};
///
/// let statuses = compute_guess_statuses(&["e", "e", "r", "i", "e"], "ELITE");
/// assert_eq!(
///     statuses,
///     vec![Status::Correct, Status::Absent, Status::Absent, Status::Present, Status::Correct]
/// );
/// ```
#[must_use]
pub fn compute_guess_statuses<S: AsRef<str>>(guess_letters: &[S], solution: &str) -> Vec<Status> {
    let solution = grapheme_split(&normalize(solution));
    let guess: Vec<String> = guess_letters.iter().map(|l| normalize(l.as_ref())).collect();

    let mut taken = vec![false; solution.len()];
    let mut statuses: Vec<Option<Status>> = vec![None; guess.len()];

    // First pass: exact matches
    for (i, letter) in guess.iter().enumerate() {
        if solution.get(i) == Some(letter) {
            statuses[i] = Some(Status::Correct);
            taken[i] = true;
        }
    }

    // Second pass: claim the first untaken occurrence
    for (i, letter) in guess.iter().enumerate() {
        if statuses[i].is_some() {
            continue;
        }

        let claim = solution
            .iter()
            .enumerate()
            .position(|(j, candidate)| candidate == letter && !taken[j]);

        statuses[i] = Some(match claim {
            Some(j) => {
                taken[j] = true;
                Status::Present
            }
            None => Status::Absent,
        });
    }

    statuses
        .into_iter()
        .map(|s| s.unwrap_or(Status::Absent))
        .collect()
}

/// Fold every confirmed guess into one status per letter
///
/// A letter only ever moves up: absent → present → correct. A later
/// `present` never downgrades an earlier `correct`.
#[must_use]
pub fn compute_keyboard_statuses<S: AsRef<str>>(
    confirmed_guesses: &[S],
    solution: &str,
) -> FxHashMap<String, Status> {
    let mut statuses: FxHashMap<String, Status> = FxHashMap::default();

    for guess in confirmed_guesses {
        let letters = grapheme_split(&normalize(guess.as_ref()));
        for (letter, status) in letters
            .iter()
            .zip(compute_guess_statuses(&letters, solution))
        {
            statuses
                .entry(letter.clone())
                .and_modify(|current| *current = (*current).max(status))
                .or_insert(status);
        }
    }

    statuses
}

/// Render statuses as an emoji row, e.g. "🟩🟨⬜⬜🟩"
#[must_use]
pub fn statuses_to_emoji(statuses: &[Status]) -> String {
    statuses.iter().map(|s| s.emoji()).collect()
}
