//! Past puzzle dates

use crate::puzzle::calendar::{date_for_index, day_index, is_valid_game_date};
use chrono::NaiveDate;
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArchiveError {
    #[error("no puzzle was published on {0}")]
    InvalidDate(NaiveDate),
}

/// A random game date between the epoch and `today`, inclusive
#[must_use]
pub fn random_archive_date(today: NaiveDate) -> NaiveDate {
    random_archive_date_with(&mut rand::rng(), today)
}

/// [`random_archive_date`] with an explicit random source
pub fn random_archive_date_with<R: Rng>(rng: &mut R, today: NaiveDate) -> NaiveDate {
    date_for_index(rng.random_range(0..=day_index(today)))
}

/// Check that `date` can be played from the archive
///
/// # Errors
///
/// Returns `ArchiveError::InvalidDate` for dates before the epoch or after `today`.
pub fn archive_date(date: NaiveDate, today: NaiveDate) -> Result<NaiveDate, ArchiveError> {
    if is_valid_game_date(date, today) {
        Ok(date)
    } else {
        Err(ArchiveError::InvalidDate(date))
    }
}
