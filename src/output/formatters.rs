//! Formatting utilities for terminal output

use crate::core::{Status, compute_guess_statuses, grapheme_split, statuses_to_emoji};
use crate::puzzle::{SolutionSet, solved_at};
use colored::{ColoredString, Colorize};

/// Square shown for rows of a board that was already solved
const LOCKED_SQUARE: char = '⬛';

/// Color one tile by its status
#[must_use]
pub fn colored_tile(letter: &str, status: Option<Status>) -> ColoredString {
    let letter = if letter.is_empty() { " " } else { letter };
    let text = format!(" {} ", letter.to_uppercase());
    match status {
        Some(Status::Correct) => text.black().on_green().bold(),
        Some(Status::Present) => text.black().on_yellow().bold(),
        Some(Status::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// Render a confirmed try against one board's solution
#[must_use]
pub fn format_try(word: &str, solution: &str) -> String {
    let letters = grapheme_split(word);
    let statuses = compute_guess_statuses(&letters, solution);
    letters
        .iter()
        .zip(statuses)
        .map(|(letter, status)| colored_tile(letter, Some(status)).to_string())
        .collect()
}

/// Render the row being typed
#[must_use]
pub fn format_pending(letters: &[String], length: usize) -> String {
    (0..length)
        .map(|i| {
            let letter = letters.get(i).map_or("_", |l| if l.is_empty() { "_" } else { l });
            colored_tile(letter, None).to_string()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Score shown in the share header: `3/6`, `X/6`, or the try count in unlimited play
#[must_use]
pub fn share_score(tries: usize, max_attempts: usize, won: bool, unlimited: bool) -> String {
    if unlimited {
        tries.to_string()
    } else if won {
        format!("{tries}/{max_attempts}")
    } else {
        format!("X/{max_attempts}")
    }
}

/// Emoji grid for sharing a finished round
///
/// One line per try with the boards side by side. A board shows locked
/// squares on every row after the one that solved it.
#[must_use]
pub fn share_text(solutions: &SolutionSet, tries: &[String], won: bool) -> String {
    let config = solutions.mode.config();
    let mut lines = vec![format!(
        "Letrix {} #{} {}",
        solutions.mode,
        solutions.day_index,
        share_score(tries.len(), config.max_attempts, won, config.unlimited)
    )];

    let solved: Vec<Option<usize>> = solutions
        .words
        .iter()
        .map(|word| solved_at(word, tries))
        .collect();
    let locked_row: String = std::iter::repeat_n(LOCKED_SQUARE, solutions.word_length()).collect();

    for (row, guess) in tries.iter().enumerate() {
        let cells: Vec<String> = solutions
            .words
            .iter()
            .zip(&solved)
            .map(|(word, solved_row)| match solved_row {
                Some(at) if row > *at => locked_row.clone(),
                _ => statuses_to_emoji(&compute_guess_statuses(&grapheme_split(guess), word)),
            })
            .collect();
        lines.push(cells.join(" "));
    }

    lines.join("\n")
}
