//! Persisted round state
//!
//! One [`RoundSessionState`] per board. Every board of a round carries the
//! same try list and day-index; only the solution fields differ.

use crate::core::{grapheme_len, normalize};
use crate::puzzle::{SolutionSet, has_solved_all_boards};
use chrono::{Duration, NaiveDate};
use log::warn;
use serde::{Deserialize, Serialize};

/// Snapshot of one board in a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSessionState {
    /// Day-index of the round
    pub curday: u32,
    #[serde(default)]
    pub cur_row: usize,
    #[serde(default)]
    pub cur_try: String,
    #[serde(default)]
    pub invalids: Vec<String>,
    pub tries: Vec<String>,
    pub solution: String,
    #[serde(default)]
    pub display_solution: Option<String>,
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub game_over: bool,
    #[serde(default)]
    pub won: bool,
}

/// Progress of a round at the moment it is saved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundProgress {
    pub tries: Vec<String>,
    pub current_try: String,
    pub row: usize,
    pub invalids: Vec<String>,
    pub won: bool,
}

fn board_state(solutions: &SolutionSet, index: usize, solution: &str) -> RoundSessionState {
    RoundSessionState {
        curday: solutions.day_index,
        cur_row: 0,
        cur_try: String::new(),
        invalids: Vec::new(),
        tries: Vec::new(),
        solution: solution.to_string(),
        display_solution: Some(
            solutions
                .display_for(index)
                .unwrap_or(solution)
                .to_string(),
        ),
        definition: solutions.definition_for(index).map(str::to_string),
        game_over: false,
        won: false,
    }
}

/// Zeroed state for every board of a fresh round
#[must_use]
pub fn build_empty_state(solutions: &SolutionSet) -> Vec<RoundSessionState> {
    solutions
        .words
        .iter()
        .enumerate()
        .map(|(index, solution)| board_state(solutions, index, solution))
        .collect()
}

/// State for every board after a confirmed submission
///
/// Unlimited rounds are never marked over or won here; they end by
/// advancing to the next round instead.
#[must_use]
pub fn build_snapshot(
    solutions: &SolutionSet,
    progress: &RoundProgress,
    is_unlimited: bool,
    max_attempts: usize,
) -> Vec<RoundSessionState> {
    let game_over = !is_unlimited && !progress.won && progress.tries.len() >= max_attempts;
    let won = !is_unlimited && progress.won;

    solutions
        .words
        .iter()
        .enumerate()
        .map(|(index, solution)| RoundSessionState {
            cur_row: progress.row,
            cur_try: progress.current_try.clone(),
            invalids: progress.invalids.clone(),
            tries: progress.tries.clone(),
            game_over,
            won,
            ..board_state(solutions, index, solution)
        })
        .collect()
}

/// Whether saved boards agree with each other
///
/// A well-formed round has a non-empty solution on every board and one
/// shared try list.
#[must_use]
pub fn is_well_formed(saved: &[RoundSessionState]) -> bool {
    let Some(first) = saved.first() else {
        return true;
    };
    saved
        .iter()
        .all(|state| !state.solution.trim().is_empty() && state.tries == first.tries)
}

/// Decode a saved round, treating anything malformed as absent
#[must_use]
pub fn parse_saved_state(json: &str) -> Option<Vec<RoundSessionState>> {
    match serde_json::from_str::<Vec<RoundSessionState>>(json) {
        Ok(saved) if is_well_formed(&saved) => Some(saved),
        Ok(_) => {
            warn!("ignoring saved round with inconsistent boards");
            None
        }
        Err(e) => {
            warn!("ignoring unreadable saved round: {e}");
            None
        }
    }
}

fn shift_date(date: NaiveDate, delta: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(delta)).unwrap_or(date)
}

/// Restore an unlimited round's solution from saved state
///
/// Unlimited play may lag behind the calendar, so the saved solution and
/// day-index win over the date-derived ones. Falls back to `fallback` when
/// nothing usable was saved.
#[must_use]
pub fn hydrate_unlimited_solution(fallback: &SolutionSet, saved: &[RoundSessionState]) -> SolutionSet {
    let boards: Vec<(usize, String)> = saved
        .iter()
        .enumerate()
        .map(|(index, state)| (index, normalize(state.solution.trim())))
        .filter(|(_, word)| !word.is_empty())
        .collect();

    if boards.is_empty() {
        return fallback.clone();
    }

    let display = boards
        .iter()
        .map(|(index, word)| {
            saved[*index]
                .display_solution
                .clone()
                .unwrap_or_else(|| word.clone())
        })
        .collect();
    let definitions = boards
        .iter()
        .map(|(index, _)| {
            saved[*index]
                .definition
                .clone()
                .or_else(|| fallback.definitions.get(*index).cloned().flatten())
        })
        .collect();

    let restored_index = saved.first().map_or(fallback.day_index, |s| s.curday);
    let delta = i64::from(restored_index) - i64::from(fallback.day_index);

    SolutionSet {
        words: boards.into_iter().map(|(_, word)| word).collect(),
        display,
        definitions,
        date: shift_date(fallback.date, delta),
        day_index: restored_index,
        ..fallback.clone()
    }
}

/// Restore a daily round's solution from saved state
///
/// Only same-day state with the mode's board count and word length is
/// accepted.
#[must_use]
pub fn hydrate_standard_solution(
    fallback: &SolutionSet,
    saved: &[RoundSessionState],
) -> Option<SolutionSet> {
    let config = fallback.mode.config();
    if saved.is_empty() || saved.len() != config.boards {
        return None;
    }
    if saved.iter().any(|state| state.curday != fallback.day_index) {
        return None;
    }

    let words: Vec<String> = saved
        .iter()
        .map(|state| normalize(state.solution.trim()))
        .filter(|word| grapheme_len(word) == config.word_length)
        .collect();
    if words.len() != config.boards {
        return None;
    }

    Some(SolutionSet {
        display: saved
            .iter()
            .zip(&words)
            .map(|(state, word)| state.display_solution.clone().unwrap_or_else(|| word.clone()))
            .collect(),
        definitions: saved.iter().map(|state| state.definition.clone()).collect(),
        words,
        ..fallback.clone()
    })
}

/// How an unlimited round resumes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlimitedBootstrap {
    pub has_saved_state: bool,
    pub restored: SolutionSet,
    pub saved_tries: Vec<String>,
    /// The saved round is already solved; play the next one
    pub should_advance: bool,
}

/// Decide how an unlimited round resumes from saved state
#[must_use]
pub fn resolve_unlimited_bootstrap(base: &SolutionSet, saved: &[RoundSessionState]) -> UnlimitedBootstrap {
    let has_saved_state = !saved.is_empty();
    let restored = if has_saved_state {
        hydrate_unlimited_solution(base, saved)
    } else {
        base.clone()
    };
    let saved_tries = saved.first().map(|s| s.tries.clone()).unwrap_or_default();
    let should_advance = has_saved_state && has_solved_all_boards(&restored.words, &saved_tries);

    UnlimitedBootstrap {
        has_saved_state,
        restored,
        saved_tries,
        should_advance,
    }
}
