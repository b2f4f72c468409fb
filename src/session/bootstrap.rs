//! Session start: reconcile saved state with the canonical puzzle
//!
//! ```text
//! Uninitialized → Loading → {Fresh, Resumed, Advancing, Mismatched, Unavailable} → Hydrated
//! ```
//!
//! A run checks its [`Liveness`] flag after every collaborator call and
//! returns `None` once cancelled, so a stale load is never applied.

use super::state::{
    RoundProgress, RoundSessionState, build_empty_state, build_snapshot, is_well_formed,
    resolve_unlimited_bootstrap,
};
use crate::core::{GameMode, Language, normalize};
use crate::puzzle::{PuzzleSelector, SolutionSet, has_solved_all_boards, next_date};
use crate::storage::{Persistence, ScopeKey};
use crate::wordlists::Dictionary;
use chrono::NaiveDate;
use log::{debug, warn};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Phases of one bootstrap run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapPhase {
    Uninitialized,
    Loading,
    /// Nothing saved; start the canonical round
    Fresh,
    /// Saved state matches; continue it
    Resumed,
    /// Saved unlimited round is solved; start the next one
    Advancing,
    /// Saved state belongs to another puzzle; it is ignored, not overwritten
    Mismatched,
    /// No puzzle could be generated
    Unavailable,
    Hydrated,
}

impl fmt::Display for BootstrapPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Uninitialized => "uninitialized",
            Self::Loading => "loading",
            Self::Fresh => "fresh",
            Self::Resumed => "resumed",
            Self::Advancing => "advancing",
            Self::Mismatched => "mismatched",
            Self::Unavailable => "unavailable",
            Self::Hydrated => "hydrated",
        };
        f.write_str(name)
    }
}

/// Shared cancellation flag for an in-flight bootstrap
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Mark every clone of this flag as stale
    pub fn cancel(&self) {
        self.0.store(false, Ordering::Release);
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// What a bootstrap run decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapOutcome {
    /// Fresh, Resumed, Advancing, Mismatched or Unavailable
    pub decision: BootstrapPhase,
    pub solutions: SolutionSet,
    /// State to show; for Advancing it is the new round's empty state and
    /// should be persisted by the caller
    pub state: Vec<RoundSessionState>,
    pub tries: Vec<String>,
    pub invalids: Vec<String>,
    pub current_try: String,
    pub won: bool,
    pub game_over: bool,
}

impl BootstrapOutcome {
    fn empty(decision: BootstrapPhase, solutions: SolutionSet) -> Self {
        Self {
            decision,
            state: build_empty_state(&solutions),
            solutions,
            tries: Vec::new(),
            invalids: Vec::new(),
            current_try: String::new(),
            won: false,
            game_over: false,
        }
    }

    fn resumed(solutions: SolutionSet, saved: &[RoundSessionState], is_unlimited: bool) -> Self {
        let first = saved.first();
        let tries = first.map(|s| s.tries.clone()).unwrap_or_default();
        let max_attempts = solutions.mode.config().max_attempts;
        let won = has_solved_all_boards(&solutions.words, &tries);
        let game_over = !is_unlimited && !won && tries.len() >= max_attempts;

        let progress = RoundProgress {
            row: tries.len(),
            current_try: first.map(|s| s.cur_try.clone()).unwrap_or_default(),
            invalids: first.map(|s| s.invalids.clone()).unwrap_or_default(),
            tries,
            won,
        };

        Self {
            decision: BootstrapPhase::Resumed,
            state: build_snapshot(&solutions, &progress, is_unlimited, max_attempts),
            solutions,
            tries: progress.tries,
            invalids: progress.invalids,
            current_try: progress.current_try,
            won,
            game_over,
        }
    }
}

/// Whether saved daily state belongs to the canonical puzzle
///
/// Board count, every board's solution and every board's day-index must
/// all agree.
#[must_use]
pub fn matches_canonical(saved: &[RoundSessionState], canonical: &SolutionSet) -> bool {
    saved.len() == canonical.words.len()
        && saved
            .iter()
            .zip(&canonical.words)
            .all(|(state, word)| normalize(state.solution.trim()) == *word && state.curday == canonical.day_index)
}

/// Runs the bootstrap state machine for one (date, mode, language)
#[derive(Debug)]
pub struct BootstrapReconciler {
    liveness: Liveness,
    phase: BootstrapPhase,
}

impl BootstrapReconciler {
    #[must_use]
    pub const fn new(liveness: Liveness) -> Self {
        Self {
            liveness,
            phase: BootstrapPhase::Uninitialized,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> BootstrapPhase {
        self.phase
    }

    fn enter(&mut self, phase: BootstrapPhase) {
        debug!("bootstrap {} -> {phase}", self.phase);
        self.phase = phase;
    }

    fn finish(&mut self, outcome: BootstrapOutcome) -> Option<BootstrapOutcome> {
        self.enter(outcome.decision);
        self.enter(BootstrapPhase::Hydrated);
        Some(outcome)
    }

    fn load_saved<P: Persistence + ?Sized>(store: &P, key: &ScopeKey) -> Vec<RoundSessionState> {
        match store.load_state(key) {
            Ok(Some(saved)) if is_well_formed(&saved) => saved,
            Ok(Some(_)) => {
                warn!("ignoring saved round for {key} with inconsistent boards");
                Vec::new()
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("ignoring saved round for {key}: {e}");
                Vec::new()
            }
        }
    }

    /// Reconcile saved state for the round on `date`
    ///
    /// Returns `None` if the run was cancelled.
    pub fn run<D, P>(
        &mut self,
        selector: &PuzzleSelector<'_, D>,
        store: &P,
        date: NaiveDate,
        mode: GameMode,
        language: Language,
    ) -> Option<BootstrapOutcome>
    where
        D: Dictionary + ?Sized,
        P: Persistence + ?Sized,
    {
        self.enter(BootstrapPhase::Loading);

        let canonical = selector.select(date, mode, language);
        if !self.liveness.is_alive() {
            return None;
        }

        let key = ScopeKey::round(language, mode, date);
        let saved = Self::load_saved(store, &key);
        if !self.liveness.is_alive() {
            return None;
        }

        if saved.is_empty() {
            let decision = if canonical.is_available() {
                BootstrapPhase::Fresh
            } else {
                BootstrapPhase::Unavailable
            };
            return self.finish(BootstrapOutcome::empty(decision, canonical));
        }

        if !mode.is_unlimited() {
            if !canonical.is_available() {
                return self.finish(BootstrapOutcome::empty(BootstrapPhase::Unavailable, canonical));
            }
            if !matches_canonical(&saved, &canonical) {
                warn!("saved round for {key} does not match the puzzle of {date}");
                return self.finish(BootstrapOutcome::empty(BootstrapPhase::Mismatched, canonical));
            }
            return self.finish(BootstrapOutcome::resumed(canonical, &saved, false));
        }

        let unlimited = resolve_unlimited_bootstrap(&canonical, &saved);
        if unlimited.should_advance {
            let next = selector.select(next_date(unlimited.restored.date), mode, language);
            if !self.liveness.is_alive() {
                return None;
            }
            let decision = if next.is_available() {
                BootstrapPhase::Advancing
            } else {
                BootstrapPhase::Unavailable
            };
            return self.finish(BootstrapOutcome::empty(decision, next));
        }

        self.finish(BootstrapOutcome::resumed(unlimited.restored, &saved, true))
    }
}
