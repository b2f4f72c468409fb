//! Persistence of round state and stats
//!
//! Everything is keyed by a [`ScopeKey`]. Daily rounds are scoped to their
//! date; unlimited rounds and stats are scoped to (language, mode) so they
//! carry across days.

mod fallback;
mod file;
mod memory;

pub use fallback::FallbackStore;
pub use file::FileStore;
pub use memory::MemoryStore;

use crate::core::{GameMode, Language};
use crate::puzzle::calendar::iso_date;
use crate::session::RoundSessionState;
use crate::stats::Stats;
use chrono::NaiveDate;
use std::fmt;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("stored data is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Composite key identifying what a stored record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeKey {
    pub language: Language,
    pub mode: GameMode,
    pub date: Option<NaiveDate>,
}

impl ScopeKey {
    /// Key for a round's state
    ///
    /// Unlimited mode ignores the date so an unfinished round survives
    /// past midnight.
    #[must_use]
    pub fn round(language: Language, mode: GameMode, date: NaiveDate) -> Self {
        Self {
            language,
            mode,
            date: (!mode.is_unlimited()).then_some(date),
        }
    }

    /// Key for a mode's cumulative stats
    #[must_use]
    pub const fn stats(language: Language, mode: GameMode) -> Self {
        Self {
            language,
            mode,
            date: None,
        }
    }
}

impl fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date {
            Some(date) => write!(f, "{}:{}:{}", self.language, self.mode, iso_date(date)),
            None => write!(f, "{}:{}", self.language, self.mode),
        }
    }
}

/// Key-value persistence for rounds and stats
///
/// `Ok(None)` means nothing is stored under the key.
pub trait Persistence {
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored record is malformed.
    fn load_state(&self, key: &ScopeKey) -> Result<Option<Vec<RoundSessionState>>, StorageError>;

    /// # Errors
    ///
    /// Returns an error if the backend cannot write the record.
    fn save_state(&self, key: &ScopeKey, state: &[RoundSessionState]) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored record is malformed.
    fn load_stats(&self, key: &ScopeKey) -> Result<Option<Stats>, StorageError>;

    /// # Errors
    ///
    /// Returns an error if the backend cannot write the record.
    fn save_stats(&self, key: &ScopeKey, stats: &Stats) -> Result<(), StorageError>;
}

impl<P: Persistence + ?Sized> Persistence for &P {
    fn load_state(&self, key: &ScopeKey) -> Result<Option<Vec<RoundSessionState>>, StorageError> {
        (**self).load_state(key)
    }

    fn save_state(&self, key: &ScopeKey, state: &[RoundSessionState]) -> Result<(), StorageError> {
        (**self).save_state(key, state)
    }

    fn load_stats(&self, key: &ScopeKey) -> Result<Option<Stats>, StorageError> {
        (**self).load_stats(key)
    }

    fn save_stats(&self, key: &ScopeKey, stats: &Stats) -> Result<(), StorageError> {
        (**self).save_stats(key, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_keys_include_the_date() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 26).unwrap();
        assert_eq!(
            ScopeKey::round(Language::Pt, GameMode::Duo, date).to_string(),
            "pt:duo:2026-02-26"
        );
    }

    #[test]
    fn unlimited_round_shares_the_stats_key() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 26).unwrap();
        let round = ScopeKey::round(Language::En, GameMode::Infinite, date);
        assert_eq!(round.to_string(), "en:infinite");
        assert_eq!(round, ScopeKey::stats(Language::En, GameMode::Infinite));
    }
}
