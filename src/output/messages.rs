//! Localized player-facing messages

use crate::core::Language;
use crate::session::GuessRejection;

/// Message shown after a win, graded by how many attempts were left over
#[must_use]
pub fn winner_message(language: Language, remaining: usize) -> &'static str {
    match (language, remaining) {
        (Language::Pt, 0) => "Ufa!",
        (Language::Pt, 1) => "Genial",
        (Language::Pt, 2) => "Impressionante",
        (Language::Pt, 3) => "Extraordinário",
        (Language::Pt, 4) => "Fantástico",
        (Language::Pt, _) => "Fenomenal",
        (Language::En, 0) => "Phew!",
        (Language::En, 1) => "Genius",
        (Language::En, 2) => "Impressive",
        (Language::En, 3) => "Extraordinary",
        (Language::En, 4) => "Fantastic",
        (Language::En, _) => "Phenomenal",
    }
}

/// Message revealing the solutions after a loss
#[must_use]
pub fn game_over_message<S: AsRef<str>>(language: Language, words: &[S]) -> String {
    let label = match (language, words.len()) {
        (Language::Pt, 1) => "Palavra",
        (Language::Pt, _) => "Palavras",
        (Language::En, 1) => "Word",
        (Language::En, _) => "Words",
    };
    let joined: Vec<String> = words.iter().map(|w| w.as_ref().to_uppercase()).collect();
    format!("{label}: {}", joined.join(", "))
}

/// Reason a guess was not accepted, in the player's language
#[must_use]
pub fn rejection_message(language: Language, rejection: &GuessRejection) -> String {
    match language {
        Language::En => rejection.to_string(),
        Language::Pt => match rejection {
            GuessRejection::TooShort { expected } => format!("só palavras com {expected} letras"),
            GuessRejection::NotAWord => "essa palavra não é aceita".to_string(),
            GuessRejection::HardModeViolation(detail) => format!("modo difícil: {detail}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winner_messages_by_remaining_attempts() {
        assert_eq!(winner_message(Language::Pt, 0), "Ufa!");
        assert_eq!(winner_message(Language::Pt, 3), "Extraordinário");
        assert_eq!(winner_message(Language::Pt, 9), "Fenomenal");
        assert_eq!(winner_message(Language::En, 1), "Genius");
    }

    #[test]
    fn game_over_lists_every_board() {
        assert_eq!(game_over_message(Language::Pt, &["termo"]), "Palavra: TERMO");
        assert_eq!(
            game_over_message(Language::Pt, &["termo", "mundo"]),
            "Palavras: TERMO, MUNDO"
        );
        assert_eq!(game_over_message(Language::En, &["crane", "slate"]), "Words: CRANE, SLATE");
    }

    #[test]
    fn rejections_are_localized() {
        let short = GuessRejection::TooShort { expected: 5 };
        assert_eq!(rejection_message(Language::Pt, &short), "só palavras com 5 letras");
        assert_eq!(rejection_message(Language::En, &short), "words must have 5 letters");
        assert_eq!(
            rejection_message(Language::Pt, &GuessRejection::NotAWord),
            "essa palavra não é aceita"
        );
    }
}
