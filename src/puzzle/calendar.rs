//! Puzzle calendar: epoch, day-index and game dates

use chrono::{Days, Local, NaiveDate};

/// Day 0 of the puzzle calendar (1 January 2024)
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2024, 1, 1) {
    Some(date) => date,
    None => panic!("invalid epoch date"),
};

/// Length of one puzzle period in days
pub const PERIOD_DAYS: u64 = 1;

/// Today's local calendar date
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Number of whole periods between the epoch and `date`
///
/// The epoch itself is day 0. Dates before the epoch clamp to 0.
#[must_use]
pub fn day_index(date: NaiveDate) -> u32 {
    let days = (date - EPOCH).num_days();
    if days <= 0 {
        return 0;
    }
    u32::try_from(days.unsigned_abs() / PERIOD_DAYS).unwrap_or(u32::MAX)
}

/// Calendar date of a day-index
#[must_use]
pub fn date_for_index(index: u32) -> NaiveDate {
    EPOCH
        .checked_add_days(Days::new(u64::from(index) * PERIOD_DAYS))
        .unwrap_or(NaiveDate::MAX)
}

/// Start of the period containing `date`
#[must_use]
pub fn last_game_date(date: NaiveDate) -> NaiveDate {
    if date < EPOCH {
        return date;
    }
    date_for_index(day_index(date))
}

/// First date of the period after `date`
#[must_use]
pub fn next_date(date: NaiveDate) -> NaiveDate {
    last_game_date(date)
        .checked_add_days(Days::new(PERIOD_DAYS))
        .unwrap_or(NaiveDate::MAX)
}

/// Whether `date` has (or had) a puzzle as of `today`
#[must_use]
pub fn is_valid_game_date(date: NaiveDate, today: NaiveDate) -> bool {
    if date < EPOCH || date > today {
        return false;
    }
    (date - EPOCH).num_days().unsigned_abs() % PERIOD_DAYS == 0
}

/// `YYYY-MM-DD`
#[must_use]
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_is_day_zero() {
        assert_eq!(day_index(EPOCH), 0);
        assert_eq!(day_index(date(2024, 1, 2)), 1);
        assert_eq!(day_index(date(2025, 1, 1)), 366);
    }

    #[test]
    fn dates_before_epoch_clamp() {
        assert_eq!(day_index(date(2023, 12, 31)), 0);
    }

    #[test]
    fn day_index_is_strictly_increasing() {
        let mut current = EPOCH;
        let mut previous = day_index(current);
        for _ in 0..100 {
            current = next_date(current);
            let index = day_index(current);
            assert_eq!(index, previous + 1);
            previous = index;
        }
    }

    #[test]
    fn date_for_index_round_trips() {
        for index in [0, 1, 59, 365, 1000] {
            assert_eq!(day_index(date_for_index(index)), index);
        }
        assert_eq!(date_for_index(31), date(2024, 2, 1));
    }

    #[test]
    fn next_date_advances_one_day() {
        assert_eq!(next_date(date(2024, 2, 28)), date(2024, 2, 29));
        assert_eq!(next_date(date(2024, 12, 31)), date(2025, 1, 1));
    }

    #[test]
    fn valid_game_dates() {
        let today = date(2026, 3, 1);
        assert!(is_valid_game_date(EPOCH, today));
        assert!(is_valid_game_date(today, today));
        assert!(!is_valid_game_date(date(2026, 3, 2), today));
        assert!(!is_valid_game_date(date(2023, 6, 1), today));
    }

    #[test]
    fn iso_format() {
        assert_eq!(iso_date(date(2026, 2, 6)), "2026-02-06");
    }
}
