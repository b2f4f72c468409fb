//! Read cumulative stats for a mode

use crate::core::{GameMode, Language};
use crate::stats::{Stats, normalize_stats};
use crate::storage::{Persistence, ScopeKey, StorageError};

/// Stats stored for (language, mode), padded for display
///
/// A mode that was never played yields zeroed stats.
///
/// # Errors
///
/// Returns the store's error if the stats cannot be read.
pub fn load_stats<P: Persistence + ?Sized>(
    store: &P,
    language: Language,
    mode: GameMode,
) -> Result<Stats, StorageError> {
    let stored = store.load_stats(&ScopeKey::stats(language, mode))?;
    Ok(normalize_stats(stored, mode.config().max_attempts))
}
