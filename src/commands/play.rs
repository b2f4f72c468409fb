//! Line-based game loop
//!
//! Plays one round (or, in unlimited mode, round after round) of a
//! [`GameSession`] on the terminal.

use crate::output::{
    game_over_message, print_board, print_keyboard, print_stats, rejection_message, share_text,
    winner_message,
};
use crate::session::{GameSession, RoundEvent};
use crate::storage::Persistence;
use crate::wordlists::Dictionary;
use colored::Colorize;
use std::io::{self, Write};

/// Run the interactive game loop
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<D: Dictionary + ?Sized, P: Persistence + ?Sized>(
    session: &mut GameSession<'_, D, P>,
) -> io::Result<()> {
    let Some(phase) = session.bootstrap() else {
        return Ok(());
    };

    let mode = session.mode();
    let language = session.language();
    let solutions = session.solutions();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!(
        "║  {:<60}║",
        format!("Letrix {mode} #{} ({language})", solutions.day_index)
    );
    println!("╚══════════════════════════════════════════════════════════════╝");

    if !solutions.is_available() {
        println!("\n❌ No puzzle available for {}", solutions.date);
        return Ok(());
    }

    println!("\n{} boards, {} letters, {}", solutions.boards(), solutions.word_length(), phase);
    println!("Commands: 'quit' to exit, 'stats' for statistics");
    if mode.is_unlimited() {
        println!("          'skip' to give up on this word");
    }

    if session.is_won() || session.is_game_over() {
        print_board(session);
        print_finished(session);
        return Ok(());
    }

    loop {
        print_board(session);
        print_keyboard(session);
        if let Some(remaining) = session.remaining_attempts() {
            println!("\n  {remaining} attempts left");
        }

        let Some(input) = get_user_input("Guess")? else {
            return Ok(());
        };
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "stats" => {
                print_stats(session.stats(), mode);
                continue;
            }
            "skip" if mode.is_unlimited() => {
                println!(
                    "\n{}",
                    game_over_message(language, &session.solutions().display).yellow()
                );
                session.advance_round();
                continue;
            }
            "" => continue,
            _ => {}
        }

        session.enter_word(&input);
        match session.submit() {
            Ok(RoundEvent::Continue) => {}
            Ok(RoundEvent::Won {
                attempts_used,
                solutions,
            }) => {
                let remaining = mode.config().max_attempts.saturating_sub(attempts_used);
                println!(
                    "\n🎉 {}",
                    winner_message(language, remaining).bright_green().bold()
                );
                if mode.is_unlimited() {
                    println!("   {}", solutions.display.join(", ").to_uppercase());
                    continue;
                }
                print_board(session);
                print_finished(session);
                return Ok(());
            }
            Ok(RoundEvent::Lost { .. }) => {
                print_board(session);
                print_finished(session);
                return Ok(());
            }
            Err(rejection) => {
                println!("\n❌ {}", rejection_message(language, &rejection));
                session.enter_word("");
            }
        }
    }
}

fn print_finished<D: Dictionary + ?Sized, P: Persistence + ?Sized>(session: &GameSession<'_, D, P>) {
    let solutions = session.solutions();
    if session.is_game_over() {
        println!("{}", game_over_message(session.language(), &solutions.display).red());
    }
    for board in 0..solutions.boards() {
        if let Some(definition) = solutions.definition_for(board) {
            println!(
                "  {}: {}",
                solutions.display_for(board).unwrap_or_default().to_uppercase().bold(),
                definition
            );
        }
    }
    println!("\n{}\n", share_text(solutions, session.tries(), session.is_won()));
    println!("Next puzzle on {}", solutions.tomorrow());
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
