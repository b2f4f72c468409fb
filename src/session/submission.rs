//! Guess submission
//!
//! Computes what confirming the current try would do. Validation of the
//! guess itself (length, dictionary membership, hard mode) happens before
//! this is called and is reported with [`GuessRejection`].

use crate::core::grapheme_len;
use crate::puzzle::has_solved_all_boards;
use thiserror::Error;

/// Why a guess was refused before submission
///
/// Every rejection is recoverable: input is re-enabled and no state changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessRejection {
    #[error("words must have {expected} letters")]
    TooShort { expected: usize },

    #[error("not in the word list")]
    NotAWord,

    #[error("hard mode: {0}")]
    HardModeViolation(String),
}

/// Result of submitting one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Confirmed tries with the new guess appended
    pub next_tries: Vec<String>,
    /// Every board is solved by `next_tries`
    pub won_now: bool,
    /// The guess may be recorded at all
    pub can_bank: bool,
    /// This was the last allowed attempt and it did not win
    pub reached_limit: bool,
    /// Tries before this one; the histogram bucket for a win
    pub attempts_used: usize,
}

/// Compute the outcome of confirming `current_try`
///
/// # Examples
/// ```
/// use letrix::session::submit_guess;
///
/// let solutions = vec!["casa".to_string(), "lago".to_string()];
/// let result = submit_guess("lago", 4, &["casa".to_string()], &solutions, 7, false);
/// assert!(result.won_now);
/// assert_eq!(result.attempts_used, 1);
/// ```
#[must_use]
pub fn submit_guess(
    current_try: &str,
    solution_length: usize,
    confirmed_tries: &[String],
    solutions: &[String],
    max_attempts: usize,
    already_won: bool,
) -> Submission {
    let mut next_tries = confirmed_tries.to_vec();
    next_tries.push(current_try.to_string());

    let won_now = has_solved_all_boards(solutions, &next_tries);
    let can_bank = grapheme_len(current_try) == solution_length
        && confirmed_tries.len() < max_attempts
        && !already_won;
    let reached_limit = !won_now && confirmed_tries.len() + 1 == max_attempts;

    Submission {
        next_tries,
        won_now,
        can_bank,
        reached_limit,
        attempts_used: confirmed_tries.len(),
    }
}
