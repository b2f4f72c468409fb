//! Letrix - CLI
//!
//! Daily word puzzles on one to four boards, played in the terminal.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use letrix::{
    commands::{
        PrecomputeConfig, archive_date, load_stats, print_precompute_summary, random_archive_date,
        run_play, run_precompute, score_guess, solutions_for_date,
    },
    core::{GameMode, Language},
    output::{print_solution_set, print_stats, print_status_report},
    puzzle::{JsonPuzzleTable, PuzzleSelector, PuzzleTable, calendar},
    session::GameSession,
    storage::{FallbackStore, FileStore, Persistence},
    wordlists::{WordList, loader::load_from_file},
};
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "letrix",
    about = "Daily word puzzles with one to four boards",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle language: pt or en (default from LANG)
    #[arg(short, long, global = true)]
    language: Option<Language>,

    /// Directory holding saved rounds and stats
    #[arg(long, global = true, env = "LETRIX_HOME", default_value = ".letrix")]
    data_dir: PathBuf,

    /// Directory of a shared store to sync rounds with; the data dir stays the fallback
    #[arg(long, global = true, env = "LETRIX_SYNC_DIR")]
    sync_dir: Option<PathBuf>,

    /// Puzzle date (YYYY-MM-DD, default today)
    #[arg(short, long, global = true)]
    date: Option<NaiveDate>,

    /// Precomputed puzzle table (JSON)
    #[arg(long, global = true, env = "LETRIX_PUZZLES")]
    puzzles: Option<PathBuf>,

    /// Extra dictionary words for the selected language (TSV)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Hard mode: revealed hints must be used
    #[arg(long, global = true)]
    hard: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a round (default)
    Play {
        /// Mode: term, duo, trio, four, deca, infinite (or 1-6)
        #[arg(short, long, default_value = "term")]
        mode: GameMode,
    },

    /// Play a past puzzle, random unless a date is given
    Archive {
        #[arg(short, long, default_value = "term")]
        mode: GameMode,

        /// Puzzle date to replay
        day: Option<NaiveDate>,
    },

    /// Show the solution sets for the date
    Puzzle {
        /// Only this mode
        #[arg(short, long)]
        mode: Option<GameMode>,
    },

    /// Score a guess against a word
    Status { guess: String, solution: String },

    /// Show cumulative stats
    Stats {
        /// Only this mode
        #[arg(short, long)]
        mode: Option<GameMode>,
    },

    /// Build a puzzle table for a range of dates
    Precompute {
        /// Number of days starting at --date
        #[arg(short = 'n', long, default_value = "30")]
        days: u32,

        /// Output file
        #[arg(short, long, default_value = "puzzles.json")]
        out: PathBuf,
    },
}

fn load_dictionary(language: Language, extra: Option<&Path>) -> Result<WordList> {
    let mut words = WordList::embedded();
    if let Some(path) = extra {
        let entries = load_from_file(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?;
        info!("loaded {} extra {language} words from {}", entries.len(), path.display());
        words.extend(language, entries);
    }
    Ok(words)
}

fn load_table(path: Option<&Path>) -> Result<Option<JsonPuzzleTable>> {
    path.map(|p| {
        JsonPuzzleTable::load(p).with_context(|| format!("failed to read puzzle table {}", p.display()))
    })
    .transpose()
}

fn open_store(data_dir: &Path, sync_dir: Option<&Path>) -> Box<dyn Persistence> {
    let local = FileStore::new(data_dir);
    match sync_dir {
        Some(dir) => Box::new(FallbackStore::new(FileStore::new(dir), local)),
        None => Box::new(local),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let language = cli
        .language
        .unwrap_or_else(|| Language::resolve_from_locale(std::env::var("LANG").ok().as_deref()));
    let today = calendar::today();
    let date = cli.date.unwrap_or(today);

    let words = load_dictionary(language, cli.words.as_deref())?;
    let table = load_table(cli.puzzles.as_deref())?;
    let table_ref: Option<&dyn PuzzleTable> = table.as_ref().map(|t| t as &dyn PuzzleTable);

    let command = cli.command.unwrap_or(Commands::Play {
        mode: GameMode::Term,
    });

    match command {
        Commands::Play { mode } => {
            let store = open_store(&cli.data_dir, cli.sync_dir.as_deref());
            play_command(&words, store.as_ref(), table_ref, mode, language, date, cli.hard)
        }
        Commands::Archive { mode, day } => {
            let day = match day {
                Some(day) => archive_date(day, today)?,
                None => random_archive_date(today),
            };
            let store = open_store(&cli.data_dir, cli.sync_dir.as_deref());
            play_command(&words, store.as_ref(), table_ref, mode, language, day, cli.hard)
        }
        Commands::Puzzle { mode } => {
            let mut selector = PuzzleSelector::new(&words);
            if let Some(table) = table_ref {
                selector = selector.with_table(table);
            }
            let modes = mode.map_or_else(|| GameMode::ALL.to_vec(), |m| vec![m]);
            for set in solutions_for_date(&selector, date, language, &modes) {
                print_solution_set(&set);
            }
            Ok(())
        }
        Commands::Status { guess, solution } => {
            let report = score_guess(&guess, &solution)?;
            print_status_report(&report);
            Ok(())
        }
        Commands::Stats { mode } => {
            let store = open_store(&cli.data_dir, cli.sync_dir.as_deref());
            let modes = mode.map_or_else(|| GameMode::ALL.to_vec(), |m| vec![m]);
            for mode in modes {
                let stats = load_stats(store.as_ref(), language, mode)
                    .with_context(|| format!("failed to read {language} {mode} stats"))?;
                print_stats(&stats, mode);
            }
            Ok(())
        }
        Commands::Precompute { days, out } => {
            if days == 0 {
                bail!("--days must be at least 1");
            }
            let config = PrecomputeConfig {
                start: date,
                days,
                languages: cli.language.map_or_else(|| vec![Language::Pt, Language::En], |l| vec![l]),
                modes: GameMode::ALL.to_vec(),
                show_progress: true,
            };
            let (table, summary) = run_precompute(&words, &config);
            print_precompute_summary(&summary);
            table
                .save(&out)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("\nWrote {}", out.display());
            Ok(())
        }
    }
}

fn play_command(
    words: &WordList,
    store: &dyn Persistence,
    table: Option<&dyn PuzzleTable>,
    mode: GameMode,
    language: Language,
    date: NaiveDate,
    hard: bool,
) -> Result<()> {
    let mut session = GameSession::new(words, store, mode, language, date).with_hard_mode(hard);
    if let Some(table) = table {
        session = session.with_table(table);
    }
    run_play(&mut session).context("game loop failed")
}
