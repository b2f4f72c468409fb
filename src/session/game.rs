//! Mutable game session
//!
//! Owns the state of the round being played and drives the pure engine:
//! bootstrap, editing, validation, submission, persistence and stats.

use super::bootstrap::{BootstrapPhase, BootstrapReconciler, Liveness};
use super::input::{Guess, TypingContext, compute_delete_update, compute_typing_update};
use super::keyboard::{
    BoardKeyStatuses, Key, KeyboardAction, KeyboardLetterState, resolve_keyboard_action,
    resolve_keyboard_letter_state,
};
use super::state::{RoundProgress, RoundSessionState, build_empty_state, build_snapshot};
use super::submission::{GuessRejection, submit_guess};
use crate::core::{
    GameMode, Language, compute_keyboard_statuses, grapheme_len, grapheme_split, normalize,
};
use crate::puzzle::{PuzzleSelector, PuzzleTable, SolutionSet, next_date, solved_at};
use crate::stats::{Stats, normalize_stats, record_completed_round};
use crate::storage::{Persistence, ScopeKey};
use crate::wordlists::Dictionary;
use chrono::NaiveDate;
use log::{debug, info, warn};

/// Hard-mode check for a guess
///
/// Returns a message naming the first revealed hint the guess ignores.
pub trait RevealRule {
    fn first_unused_reveal(&self, guess: &str, tries: &[String], solutions: &[String]) -> Option<String>;
}

/// Hard mode without enforcement: every guess is accepted
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllReveals;

impl RevealRule for AcceptAllReveals {
    fn first_unused_reveal(&self, _guess: &str, _tries: &[String], _solutions: &[String]) -> Option<String> {
        None
    }
}

/// Result of a confirmed guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    /// The round goes on
    Continue,
    /// Every board solved; `solutions` is the round that just ended
    Won {
        attempts_used: usize,
        solutions: SolutionSet,
    },
    /// Attempt budget spent; never raised in unlimited mode
    Lost { solutions: SolutionSet },
}

pub struct GameSession<'a, D: Dictionary + ?Sized, P: Persistence + ?Sized> {
    dictionary: &'a D,
    selector: PuzzleSelector<'a, D>,
    store: &'a P,
    mode: GameMode,
    language: Language,
    date: NaiveDate,
    hard_mode: bool,
    reveal_rule: Box<dyn RevealRule + 'a>,
    liveness: Liveness,
    decision: BootstrapPhase,
    solutions: SolutionSet,
    tries: Vec<String>,
    invalids: Vec<String>,
    current: Guess,
    selected_tile: usize,
    won: bool,
    game_over: bool,
    stats: Stats,
}

impl<'a, D: Dictionary + ?Sized, P: Persistence + ?Sized> GameSession<'a, D, P> {
    pub fn new(dictionary: &'a D, store: &'a P, mode: GameMode, language: Language, date: NaiveDate) -> Self {
        Self {
            dictionary,
            selector: PuzzleSelector::new(dictionary),
            store,
            mode,
            language,
            date,
            hard_mode: false,
            reveal_rule: Box::new(AcceptAllReveals),
            liveness: Liveness::new(),
            decision: BootstrapPhase::Uninitialized,
            solutions: SolutionSet::unavailable(date, mode, language),
            tries: Vec::new(),
            invalids: Vec::new(),
            current: Guess::empty(0),
            selected_tile: 0,
            won: false,
            game_over: false,
            stats: Stats::new(mode.config().max_attempts),
        }
    }

    #[must_use]
    pub fn with_table(mut self, table: &'a dyn PuzzleTable) -> Self {
        self.selector = PuzzleSelector::new(self.dictionary).with_table(table);
        self
    }

    #[must_use]
    pub const fn with_hard_mode(mut self, hard_mode: bool) -> Self {
        self.hard_mode = hard_mode;
        self
    }

    #[must_use]
    pub fn with_reveal_rule(mut self, rule: Box<dyn RevealRule + 'a>) -> Self {
        self.reveal_rule = rule;
        self
    }

    /// Flag that lets another thread cancel a bootstrap in progress
    #[must_use]
    pub fn liveness(&self) -> Liveness {
        self.liveness.clone()
    }

    /// Load the round for the session's date
    ///
    /// Returns the bootstrap decision, or `None` when the run was cancelled
    /// through [`GameSession::liveness`]; a cancelled run changes nothing.
    pub fn bootstrap(&mut self) -> Option<BootstrapPhase> {
        let mut reconciler = BootstrapReconciler::new(self.liveness.clone());
        let outcome = reconciler.run(&self.selector, self.store, self.date, self.mode, self.language)?;
        info!(
            "{} {} round for {}: {}",
            self.language, self.mode, self.date, outcome.decision
        );

        self.decision = outcome.decision;
        self.solutions = outcome.solutions;
        self.tries = outcome.tries;
        self.invalids = outcome.invalids;
        self.won = outcome.won;
        self.game_over = outcome.game_over;
        self.reset_guess();
        if !outcome.current_try.is_empty() {
            self.enter_word(&outcome.current_try);
        }

        if outcome.decision == BootstrapPhase::Advancing {
            self.persist_state(&outcome.state);
        }

        let key = ScopeKey::stats(self.language, self.mode);
        let stored = match self.store.load_stats(&key) {
            Ok(stats) => stats,
            Err(e) => {
                warn!("could not load stats for {key}: {e}");
                None
            }
        };
        self.stats = normalize_stats(stored, self.max_attempts());

        Some(outcome.decision)
    }

    /// Abandon the current unlimited round without touching stats
    pub fn advance_round(&mut self) {
        let next = self
            .selector
            .select(next_date(self.solutions.date), self.mode, self.language);
        debug!("advancing {} to day {}", self.mode, next.day_index);

        self.decision = if next.is_available() {
            BootstrapPhase::Advancing
        } else {
            BootstrapPhase::Unavailable
        };
        self.persist_state(&build_empty_state(&next));
        self.solutions = next;
        self.tries.clear();
        self.invalids.clear();
        self.won = false;
        self.game_over = false;
        self.reset_guess();
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub const fn decision(&self) -> BootstrapPhase {
        self.decision
    }

    #[must_use]
    pub const fn solutions(&self) -> &SolutionSet {
        &self.solutions
    }

    #[must_use]
    pub fn tries(&self) -> &[String] {
        &self.tries
    }

    #[must_use]
    pub fn invalids(&self) -> &[String] {
        &self.invalids
    }

    #[must_use]
    pub const fn current_guess(&self) -> &Guess {
        &self.current
    }

    #[must_use]
    pub const fn selected_tile(&self) -> usize {
        self.selected_tile
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub const fn stats(&self) -> &Stats {
        &self.stats
    }

    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.mode.config().max_attempts
    }

    /// Attempts left, `None` when play is unlimited
    #[must_use]
    pub fn remaining_attempts(&self) -> Option<usize> {
        (!self.mode.is_unlimited()).then(|| self.max_attempts().saturating_sub(self.tries.len()))
    }

    /// Whether input is refused
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.won || self.game_over || !self.solutions.is_available()
    }

    /// Row at which each board was solved
    #[must_use]
    pub fn solved_rows(&self) -> Vec<Option<usize>> {
        self.solutions
            .words
            .iter()
            .map(|word| solved_at(word, &self.tries))
            .collect()
    }

    /// Keyboard statuses for every board
    #[must_use]
    pub fn keyboard_statuses(&self) -> Vec<BoardKeyStatuses> {
        self.solutions
            .words
            .iter()
            .map(|word| compute_keyboard_statuses(&self.tries, word))
            .collect()
    }

    /// Shading for one letter key across all boards
    #[must_use]
    pub fn keyboard_letter_state(&self, letter: &str) -> KeyboardLetterState {
        let boards = self.keyboard_statuses();
        let active: Vec<BoardKeyStatuses> = boards
            .iter()
            .zip(self.solved_rows())
            .filter(|(_, solved)| solved.is_none())
            .map(|(statuses, _)| statuses.clone())
            .collect();
        resolve_keyboard_letter_state(letter, &boards, &active, self.is_locked(), self.mode.is_multi_board())
    }

    fn reset_guess(&mut self) {
        self.current = Guess::empty(self.tries.len());
        self.selected_tile = 0;
    }

    /// Type one letter into the selected tile
    pub fn type_letter(&mut self, value: &str) {
        let ctx = TypingContext {
            word_length: self.solutions.word_length(),
            max_attempts: if self.mode.is_unlimited() {
                usize::MAX
            } else {
                self.max_attempts()
            },
            locked: self.is_locked(),
            confirmed: self.tries.len(),
            current_guess: &self.current,
            current_row: self.tries.len(),
            selected_tile: self.selected_tile,
        };
        if let Some(update) = compute_typing_update(value, &ctx) {
            self.current = update.guess;
            self.selected_tile = update.next_tile;
        }
    }

    /// Clear a tile of the current guess
    pub fn delete_letter(&mut self) {
        if self.is_locked() {
            return;
        }
        if let Some(update) = compute_delete_update(&self.current, self.selected_tile, self.solutions.word_length()) {
            self.current = update.guess;
            self.selected_tile = update.next_tile;
        }
    }

    /// Replace the current guess with a whole word
    ///
    /// A word longer than the row is kept as typed so that submitting it is
    /// rejected rather than cut down to a different word.
    pub fn enter_word(&mut self, word: &str) {
        if self.is_locked() {
            return;
        }
        self.reset_guess();
        let letters = grapheme_split(word.trim());
        let length = self.solutions.word_length();
        if letters.len() > length {
            self.current.word = letters.concat();
            self.current.letters = letters;
            self.selected_tile = length.saturating_sub(1);
            return;
        }
        for letter in letters {
            self.type_letter(&letter);
        }
    }

    /// Apply a key press
    ///
    /// # Errors
    ///
    /// Returns the rejection when Enter confirms an invalid guess.
    pub fn handle_key(&mut self, key: Key) -> Result<Option<RoundEvent>, GuessRejection> {
        let action = resolve_keyboard_action(
            key,
            self.is_locked(),
            self.solutions.word_length(),
            self.selected_tile,
        );
        match action {
            KeyboardAction::Noop => Ok(None),
            KeyboardAction::Enter => self.submit().map(Some),
            KeyboardAction::Delete => {
                self.delete_letter();
                Ok(None)
            }
            KeyboardAction::Move(tile) => {
                self.selected_tile = tile;
                Ok(None)
            }
            KeyboardAction::Type(c) => {
                self.type_letter(&c.to_string());
                Ok(None)
            }
        }
    }

    fn validate(&self, word: &str, length: usize) -> Result<(), GuessRejection> {
        if grapheme_len(word) != length || !self.current.is_filled(length) {
            return Err(GuessRejection::TooShort { expected: length });
        }
        if !self.dictionary.word_exists(word, self.language, length) {
            return Err(GuessRejection::NotAWord);
        }
        if self.hard_mode
            && let Some(hint) = self
                .reveal_rule
                .first_unused_reveal(word, &self.tries, &self.solutions.words)
        {
            return Err(GuessRejection::HardModeViolation(hint));
        }
        Ok(())
    }

    /// Confirm the current guess
    ///
    /// # Errors
    ///
    /// Returns a [`GuessRejection`] for a short, unknown or hard-mode-breaking
    /// guess. Rejections leave tries, stats and stored state untouched.
    pub fn submit(&mut self) -> Result<RoundEvent, GuessRejection> {
        if self.is_locked() {
            return Ok(RoundEvent::Continue);
        }

        let length = self.solutions.word_length();
        let word = normalize(&self.current.word);
        if let Err(rejection) = self.validate(&word, length) {
            if rejection == GuessRejection::NotAWord {
                self.invalids.push(word);
            }
            debug!("guess rejected: {rejection}");
            return Err(rejection);
        }

        let is_unlimited = self.mode.is_unlimited();
        let max_attempts = self.max_attempts();
        let submission = submit_guess(
            &word,
            length,
            &self.tries,
            &self.solutions.words,
            if is_unlimited { usize::MAX } else { max_attempts },
            self.won,
        );
        if !submission.can_bank {
            return Ok(RoundEvent::Continue);
        }

        let reached_limit =
            !is_unlimited && !submission.won_now && submission.next_tries.len() >= max_attempts;
        self.tries = submission.next_tries;
        self.won = submission.won_now;
        self.game_over = reached_limit;

        let progress = RoundProgress {
            tries: self.tries.clone(),
            current_try: String::new(),
            row: self.tries.len(),
            invalids: self.invalids.clone(),
            won: self.won,
        };
        self.persist_state(&build_snapshot(&self.solutions, &progress, is_unlimited, max_attempts));
        self.invalids.clear();
        self.reset_guess();

        let event = if self.won {
            self.record_round(submission.attempts_used, is_unlimited);
            RoundEvent::Won {
                attempts_used: submission.attempts_used,
                solutions: self.solutions.clone(),
            }
        } else if reached_limit {
            self.record_round(submission.attempts_used + 1, false);
            RoundEvent::Lost {
                solutions: self.solutions.clone(),
            }
        } else {
            RoundEvent::Continue
        };

        if is_unlimited && event != RoundEvent::Continue {
            self.advance_round();
        }
        Ok(event)
    }

    fn record_round(&mut self, attempts_used: usize, is_unlimited: bool) {
        self.stats = record_completed_round(&self.stats, attempts_used, self.max_attempts(), is_unlimited);
        let key = ScopeKey::stats(self.language, self.mode);
        if let Err(e) = self.store.save_stats(&key, &self.stats) {
            warn!("could not save stats for {key}: {e}");
        }
    }

    fn persist_state(&self, state: &[RoundSessionState]) {
        let key = ScopeKey::round(self.language, self.mode, self.date);
        if let Err(e) = self.store.save_state(&key, state) {
            warn!("round for {key} is unsaved: {e}");
        }
    }
}
