//! Precompute a puzzle table for a range of dates
//!
//! Runs the selector for every (date, language, mode) in parallel and
//! collects the results into a [`JsonPuzzleTable`] the selector can later use
//! as its fast path.

use crate::core::{GameMode, Language};
use crate::puzzle::{JsonPuzzleTable, PuzzleRecord, PuzzleRow, PuzzleSelector, SolutionSet};
use crate::wordlists::Dictionary;
use chrono::{Days, NaiveDate};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// What to precompute
#[derive(Debug, Clone)]
pub struct PrecomputeConfig {
    pub start: NaiveDate,
    pub days: u32,
    pub languages: Vec<Language>,
    pub modes: Vec<GameMode>,
    pub show_progress: bool,
}

/// Outcome of a precompute run
#[derive(Debug)]
pub struct PrecomputeSummary {
    pub puzzles: usize,
    pub rows: usize,
    pub unavailable: Vec<(NaiveDate, Language, GameMode)>,
    pub duration: Duration,
}

fn records_for(set: &SolutionSet) -> Vec<PuzzleRecord> {
    set.words
        .iter()
        .zip(&set.display)
        .enumerate()
        .map(|(board_index, (normalized, display))| PuzzleRecord {
            puzzle_date: set.date,
            language: set.language,
            mode: set.mode.id(),
            row: PuzzleRow {
                board_index,
                normalized: normalized.clone(),
                display: display.clone(),
            },
        })
        .collect()
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░");
    pb.set_style(style);
    pb
}

/// Build the puzzle table for every configured date, language and mode
pub fn run_precompute<D: Dictionary + Sync + ?Sized>(
    dictionary: &D,
    config: &PrecomputeConfig,
) -> (JsonPuzzleTable, PrecomputeSummary) {
    let jobs: Vec<(NaiveDate, Language, GameMode)> = (0..config.days)
        .filter_map(|offset| config.start.checked_add_days(Days::new(u64::from(offset))))
        .flat_map(|date| {
            config.languages.iter().flat_map(move |&language| {
                config.modes.iter().map(move |&mode| (date, language, mode))
            })
        })
        .collect();

    let pb = progress_bar(jobs.len(), config.show_progress);
    pb.set_message(format!("{} puzzles", jobs.len()));
    let start = Instant::now();

    let sets: Vec<SolutionSet> = jobs
        .par_iter()
        .map(|&(date, language, mode)| {
            let set = PuzzleSelector::new(dictionary).select(date, mode, language);
            pb.inc(1);
            set
        })
        .collect();

    pb.finish_with_message("Complete!");

    let unavailable = sets
        .iter()
        .filter(|set| !set.is_available())
        .map(|set| (set.date, set.language, set.mode))
        .collect();
    let table = JsonPuzzleTable::from_records(sets.iter().flat_map(records_for));

    let summary = PrecomputeSummary {
        puzzles: sets.len(),
        rows: table.len(),
        unavailable,
        duration: start.elapsed(),
    };
    (table, summary)
}

/// Print a precompute summary
pub fn print_precompute_summary(summary: &PrecomputeSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PUZZLE TABLE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("   Puzzles:      {}", summary.puzzles);
    println!("   Rows:         {}", summary.rows.to_string().bright_yellow());
    println!("   Time taken:   {:.2}s", summary.duration.as_secs_f64());

    if summary.unavailable.is_empty() {
        println!("   {}", "Every puzzle available".green());
    } else {
        println!(
            "   {}",
            format!("{} unavailable:", summary.unavailable.len()).red()
        );
        for (date, language, mode) in summary.unavailable.iter().take(10) {
            println!("     {date} {language} {mode}");
        }
    }
}
