//! Round session: submission, persisted state, bootstrap and input handling
//!
//! Everything except [`GameSession`] is a pure function over explicit state.

mod board;
mod bootstrap;
mod game;
mod input;
mod keyboard;
mod state;
mod submission;

pub use board::{BoardRowState, RowStatus, board_guessed_index, board_row_state, resolve_displayed_row_letters};
pub use bootstrap::{BootstrapOutcome, BootstrapPhase, BootstrapReconciler, Liveness, matches_canonical};
pub use game::{AcceptAllReveals, GameSession, RevealRule, RoundEvent};
pub use input::{Guess, GuessStatus, GuessUpdate, TypingContext, compute_delete_update, compute_typing_update};
pub use keyboard::{
    BoardKeyStatuses, Key, KeyboardAction, KeyboardLetterState, resolve_keyboard_action,
    resolve_keyboard_letter_state,
};
pub use state::{
    RoundProgress, RoundSessionState, UnlimitedBootstrap, build_empty_state, build_snapshot,
    hydrate_standard_solution, hydrate_unlimited_solution, is_well_formed,
    parse_saved_state, resolve_unlimited_bootstrap,
};
pub use submission::{GuessRejection, Submission, submit_guess};
