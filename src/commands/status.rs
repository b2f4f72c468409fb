//! Score one guess against a word

use crate::core::{Status, Word, WordError, compute_guess_statuses, statuses_to_emoji};

/// Per-tile result of scoring a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub guess: Word,
    pub solution: Word,
    pub statuses: Vec<Status>,
}

impl StatusReport {
    #[must_use]
    pub fn emoji(&self) -> String {
        statuses_to_emoji(&self.statuses)
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.statuses.iter().all(|s| *s == Status::Correct)
    }
}

/// Score `guess` against `solution`
///
/// Both words are normalized first, so accents and case do not matter.
///
/// # Errors
///
/// Returns `WordError` if either word is invalid or their lengths differ.
pub fn score_guess(guess: &str, solution: &str) -> Result<StatusReport, WordError> {
    let solution = Word::new(solution)?;
    let guess = Word::with_length(guess, solution.len())?;
    let statuses = compute_guess_statuses(guess.letters(), solution.text());

    Ok(StatusReport {
        guess,
        solution,
        statuses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_letters_are_not_over_counted() {
        let report = score_guess("EERIE", "ELITE").unwrap();
        assert_eq!(
            report.statuses,
            vec![
                Status::Correct,
                Status::Absent,
                Status::Absent,
                Status::Present,
                Status::Correct
            ]
        );
        assert!(!report.is_solved());
    }

    #[test]
    fn accents_are_ignored() {
        let report = score_guess("NAÇÃO", "nacao").unwrap();
        assert!(report.is_solved());
        assert_eq!(report.emoji(), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn length_mismatch_is_an_error() {
        assert_eq!(
            score_guess("casas", "casa"),
            Err(WordError::InvalidLength {
                expected: 4,
                actual: 5
            })
        );
    }
}
