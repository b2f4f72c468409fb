//! Cumulative per-mode statistics
//!
//! Stats are a monotone fold: [`record_completed_round`] is applied exactly
//! once per finished round and never decrements anything.

use serde::{Deserialize, Serialize};

/// Minimum histogram length regardless of mode
const MIN_HISTOGRAM_LEN: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    /// Wins indexed by number of failed tries before the winning one
    #[serde(rename = "histo")]
    pub histogram: Vec<u32>,
    #[serde(rename = "curstreak")]
    pub current_streak: u32,
    #[serde(rename = "maxstreak")]
    pub max_streak: u32,
    #[serde(rename = "perfectWins")]
    pub perfect_wins: u32,
    #[serde(rename = "currentPerfectStreak")]
    pub current_perfect_streak: u32,
    #[serde(rename = "bestPerfectStreak")]
    pub best_perfect_streak: u32,
    pub games: u32,
    pub wins: u32,
    pub failed: u32,
}

impl Stats {
    /// Fresh stats with a histogram sized for the mode
    #[must_use]
    pub fn new(max_attempts: usize) -> Self {
        normalize_stats(None, max_attempts)
    }

    /// Percentage of games won, rounded
    #[must_use]
    pub fn success_rate(&self) -> u32 {
        let games = self.games.max(1);
        let won = self.games.saturating_sub(self.failed);
        ((100.0 * f64::from(won)) / f64::from(games)).round() as u32
    }
}

/// Fill in a possibly partial stats record
///
/// The histogram is padded with zeros to `max(max_attempts, 6)` entries and
/// never truncated.
#[must_use]
pub fn normalize_stats(stats: Option<Stats>, max_attempts: usize) -> Stats {
    let mut stats = stats.unwrap_or_default();
    let len = max_attempts.max(MIN_HISTOGRAM_LEN);
    if stats.histogram.len() < len {
        stats.histogram.resize(len, 0);
    }
    stats
}

/// Fold one finished round into `stats`
///
/// `attempts_used` counts failed tries before the winning one, so a
/// first-try win records 0. Outside unlimited mode, `attempts_used >=
/// max_attempts` is a loss.
#[must_use]
pub fn record_completed_round(
    stats: &Stats,
    attempts_used: usize,
    max_attempts: usize,
    is_unlimited_mode: bool,
) -> Stats {
    let mut stats = normalize_stats(Some(stats.clone()), max_attempts);
    let is_failure = !is_unlimited_mode && attempts_used >= max_attempts;
    let is_perfect_win = !is_failure && attempts_used == 0;

    stats.games += 1;

    if is_failure {
        stats.failed += 1;
        stats.current_streak = 0;
        stats.current_perfect_streak = 0;
        return stats;
    }

    if attempts_used >= stats.histogram.len() {
        stats.histogram.resize(attempts_used + 1, 0);
    }
    stats.histogram[attempts_used] += 1;
    stats.wins += 1;
    stats.current_streak += 1;
    stats.max_streak = stats.max_streak.max(stats.current_streak);

    if is_perfect_win {
        stats.perfect_wins += 1;
        stats.current_perfect_streak += 1;
        stats.best_perfect_streak = stats.best_perfect_streak.max(stats.current_perfect_streak);
    } else {
        stats.current_perfect_streak = 0;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_wins_and_streak_reset() {
        let initial = normalize_stats(None, 6);

        let after_perfect = record_completed_round(&initial, 0, 6, false);
        assert_eq!(after_perfect.games, 1);
        assert_eq!(after_perfect.wins, 1);
        assert_eq!(after_perfect.perfect_wins, 1);
        assert_eq!(after_perfect.current_perfect_streak, 1);
        assert_eq!(after_perfect.best_perfect_streak, 1);
        assert_eq!(after_perfect.histogram[0], 1);

        let after_regular = record_completed_round(&after_perfect, 2, 6, false);
        assert_eq!(after_regular.games, 2);
        assert_eq!(after_regular.wins, 2);
        assert_eq!(after_regular.perfect_wins, 1);
        assert_eq!(after_regular.current_perfect_streak, 0);
        assert_eq!(after_regular.best_perfect_streak, 1);
        assert_eq!(after_regular.max_streak, 2);

        let after_failure = record_completed_round(&after_regular, 6, 6, false);
        assert_eq!(after_failure.games, 3);
        assert_eq!(after_failure.failed, 1);
        assert_eq!(after_failure.current_streak, 0);
        assert_eq!(after_failure.current_perfect_streak, 0);
        assert_eq!(after_failure.max_streak, 2);
        assert_eq!(after_failure.histogram.iter().sum::<u32>(), 2);
    }

    #[test]
    fn unlimited_mode_grows_histogram() {
        let initial = normalize_stats(None, 6);
        let result = record_completed_round(&initial, 22, 6, true);

        assert_eq!(result.games, 1);
        assert_eq!(result.wins, 1);
        assert_eq!(result.failed, 0);
        assert_eq!(result.histogram.len(), 23);
        assert_eq!(result.histogram[22], 1);
    }

    #[test]
    fn counts_commute_but_streaks_do_not() {
        let initial = Stats::new(6);

        let loss_then_win =
            record_completed_round(&record_completed_round(&initial, 6, 6, false), 1, 6, false);
        let win_then_loss =
            record_completed_round(&record_completed_round(&initial, 1, 6, false), 6, 6, false);

        assert_eq!(loss_then_win.games, win_then_loss.games);
        assert_eq!(loss_then_win.wins, win_then_loss.wins);
        assert_eq!(loss_then_win.failed, win_then_loss.failed);
        assert_eq!(loss_then_win.histogram, win_then_loss.histogram);

        assert_eq!(loss_then_win.current_streak, 1);
        assert_eq!(win_then_loss.current_streak, 0);
    }

    #[test]
    fn normalize_pads_histogram() {
        assert_eq!(normalize_stats(None, 9).histogram.len(), 9);
        assert_eq!(normalize_stats(None, 4).histogram.len(), 6);

        let partial = Stats {
            histogram: vec![1, 2],
            games: 3,
            ..Stats::default()
        };
        let padded = normalize_stats(Some(partial), 7);
        assert_eq!(padded.histogram, vec![1, 2, 0, 0, 0, 0, 0]);
        assert_eq!(padded.games, 3);
    }

    #[test]
    fn deserializes_partial_records() {
        let stats: Stats = serde_json::from_str(r#"{"games":4,"failed":1,"histo":[1,1,1]}"#).unwrap();
        assert_eq!(stats.games, 4);
        assert_eq!(stats.wins, 0);
        assert_eq!(stats.success_rate(), 75);

        let json = serde_json::to_string(&Stats::new(6)).unwrap();
        assert!(json.contains("\"curstreak\":0"));
        assert!(json.contains("\"perfectWins\":0"));
    }

    #[test]
    fn success_rate_with_no_games() {
        assert_eq!(Stats::default().success_rate(), 0);
    }
}
