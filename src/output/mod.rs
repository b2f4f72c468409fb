//! Terminal output formatting
//!
//! Display utilities for the game screen, command results and share text.

pub mod display;
pub mod formatters;
pub mod messages;

pub use display::{print_board, print_keyboard, print_solution_set, print_stats, print_status_report};
pub use formatters::share_text;
pub use messages::{game_over_message, rejection_message, winner_message};
