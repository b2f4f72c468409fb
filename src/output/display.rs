//! Display functions for game screens and command results

use super::formatters::{create_progress_bar, format_pending, format_try};
use crate::commands::StatusReport;
use crate::core::{GameMode, Status};
use crate::puzzle::SolutionSet;
use crate::session::{GameSession, RowStatus, board_row_state, resolve_displayed_row_letters};
use crate::stats::Stats;
use crate::storage::Persistence;
use crate::wordlists::Dictionary;
use colored::Colorize;

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Print every board side by side, one line per row
pub fn print_board<D: Dictionary + ?Sized, P: Persistence + ?Sized>(session: &GameSession<'_, D, P>) {
    let solutions = session.solutions();
    let tries = session.tries();
    let length = solutions.word_length();
    let current_row = tries.len();
    let rows = if session.mode().is_unlimited() {
        current_row + 1
    } else {
        session.max_attempts()
    };
    let blank = " ".repeat(length * 3);

    println!();
    for row in 0..rows {
        let cells: Vec<String> = solutions
            .words
            .iter()
            .map(|word| {
                let state = board_row_state(row, current_row, word, tries);
                let letters = resolve_displayed_row_letters(
                    &state,
                    row,
                    &session.current_guess().letters,
                    tries.get(row).map(String::as_str),
                );
                match state.status {
                    RowStatus::Done | RowStatus::Complete => format_try(&letters.concat(), word),
                    RowStatus::Guessing if !session.is_locked() => format_pending(&letters, length),
                    RowStatus::Guessing | RowStatus::Blank => blank.clone(),
                }
            })
            .collect();
        println!("  {}", cells.join("   "));
    }
    println!();
}

/// Print the keyboard shaded by what is known about each letter
pub fn print_keyboard<D: Dictionary + ?Sized, P: Persistence + ?Sized>(session: &GameSession<'_, D, P>) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .map(|c| {
                let letter = c.to_string();
                let state = session.keyboard_letter_state(&letter);
                let shade = state
                    .status
                    .or_else(|| state.segments.as_ref().and_then(|s| s.iter().flatten().max().copied()));
                let key = letter.to_uppercase();
                if state.disabled && !session.is_locked() {
                    return key.bright_black().dimmed().to_string();
                }
                match shade {
                    Some(Status::Correct) => key.green().bold().to_string(),
                    Some(Status::Present) => key.yellow().bold().to_string(),
                    Some(Status::Absent) => key.bright_black().to_string(),
                    None => key.white().to_string(),
                }
            })
            .collect();
        println!("  {}{}", " ".repeat(indent), keys.join(" "));
    }
}

/// Print cumulative stats with the win histogram
pub fn print_stats(stats: &Stats, mode: GameMode) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} {} ", "STATISTICS:".bright_cyan().bold(), mode.to_string().bright_yellow().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("   Games:          {}", stats.games);
    println!("   Wins:           {}", stats.wins);
    println!(
        "   Success rate:   {}",
        format!("{}%", stats.success_rate()).bright_yellow().bold()
    );
    println!("   Current streak: {}", stats.current_streak);
    println!("   Best streak:    {}", stats.max_streak);
    println!(
        "   Perfect wins:   {} (streak {}, best {})",
        stats.perfect_wins, stats.current_perfect_streak, stats.best_perfect_streak
    );

    let max = stats.histogram.iter().copied().max().unwrap_or(0);
    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (failed_tries, &count) in stats.histogram.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(max), 30);
        println!("   {:>2}: {} {count}", failed_tries + 1, bar.green());
    }
    if stats.failed > 0 {
        println!("    X: {}", stats.failed.to_string().red());
    }
}

/// Print one solution set with display forms and definitions
pub fn print_solution_set(set: &SolutionSet) {
    let header = format!("{} {} #{} ({})", set.language, set.mode, set.day_index, set.date);
    if !set.is_available() {
        println!("{} {}", header.bright_cyan(), "unavailable".red());
        return;
    }

    println!("{}", header.bright_cyan().bold());
    for board in 0..set.boards() {
        let display = set.display_for(board).unwrap_or_default();
        match set.definition_for(board) {
            Some(definition) => println!(
                "   {}. {} {}",
                board + 1,
                display.to_uppercase().bright_yellow().bold(),
                format!("- {definition}").bright_black()
            ),
            None => println!("   {}. {}", board + 1, display.to_uppercase().bright_yellow().bold()),
        }
    }
}

/// Print a scored guess
pub fn print_status_report(report: &StatusReport) {
    println!(
        "\n  {}  {}",
        format_try(report.guess.text(), report.solution.text()),
        report.emoji()
    );
    if report.is_solved() {
        println!("  {}", "✅ Solved!".green().bold());
    }
}
