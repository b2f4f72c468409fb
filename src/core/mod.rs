//! Core domain types for the puzzle
//!
//! Pure types and functions with no I/O: text normalization, tile feedback,
//! modes and languages.

mod language;
mod mode;
mod normalize;
mod status;
mod word;

pub use language::{Language, LanguageError};
pub use mode::{GameMode, ModeConfig, ModeError};
pub use normalize::{grapheme_len, grapheme_split, lowercase, normalize, same_word};
pub use status::{Status, compute_guess_statuses, compute_keyboard_statuses, statuses_to_emoji};
pub use word::{Word, WordError};
