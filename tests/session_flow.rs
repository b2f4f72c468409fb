//! End-to-end rounds: bootstrap, submit, persist and resume through real stores

use chrono::NaiveDate;
use letrix::core::{GameMode, Language};
use letrix::puzzle::{JsonPuzzleTable, PuzzleRecord, PuzzleRow};
use letrix::session::{BootstrapPhase, GameSession, RoundEvent, RoundSessionState};
use letrix::stats::Stats;
use letrix::storage::{
    FallbackStore, FileStore, MemoryStore, Persistence, ScopeKey, StorageError,
};
use letrix::wordlists::WordList;
use std::fs;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, 15).unwrap()
}

fn table(mode: GameMode, words: &[&str]) -> JsonPuzzleTable {
    JsonPuzzleTable::from_records(words.iter().enumerate().map(|(board_index, word)| PuzzleRecord {
        puzzle_date: date(),
        language: Language::Pt,
        mode: mode.id(),
        row: PuzzleRow {
            board_index,
            normalized: (*word).to_string(),
            display: (*word).to_string(),
        },
    }))
}

/// A remote store that is never reachable
struct Offline;

impl Persistence for Offline {
    fn load_state(&self, _key: &ScopeKey) -> Result<Option<Vec<RoundSessionState>>, StorageError> {
        Err(StorageError::Unavailable("offline".to_string()))
    }

    fn save_state(&self, _key: &ScopeKey, _state: &[RoundSessionState]) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("offline".to_string()))
    }

    fn load_stats(&self, _key: &ScopeKey) -> Result<Option<Stats>, StorageError> {
        Err(StorageError::Unavailable("offline".to_string()))
    }

    fn save_stats(&self, _key: &ScopeKey, _stats: &Stats) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("offline".to_string()))
    }
}

#[test]
fn daily_round_resumes_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let words = WordList::embedded();
    let puzzles = table(GameMode::Trio, &["carta", "mundo", "livro"]);

    {
        let store = FileStore::new(dir.path());
        let mut session = GameSession::new(&words, &store, GameMode::Trio, Language::Pt, date())
            .with_table(&puzzles);
        assert_eq!(session.bootstrap(), Some(BootstrapPhase::Fresh));

        session.enter_word("termo");
        assert_eq!(session.submit(), Ok(RoundEvent::Continue));
        session.enter_word("mundo");
        assert_eq!(session.submit(), Ok(RoundEvent::Continue));
    }

    let store = FileStore::new(dir.path());
    let key = ScopeKey::round(Language::Pt, GameMode::Trio, date());
    assert!(store.path_for(&key).exists());

    let mut session =
        GameSession::new(&words, &store, GameMode::Trio, Language::Pt, date()).with_table(&puzzles);
    assert_eq!(session.bootstrap(), Some(BootstrapPhase::Resumed));
    assert_eq!(session.tries(), ["termo", "mundo"]);
    assert_eq!(session.solved_rows(), vec![None, Some(1), None]);

    session.enter_word("carta");
    assert_eq!(session.submit(), Ok(RoundEvent::Continue));
    session.enter_word("livro");
    let event = session.submit().unwrap();
    assert!(matches!(event, RoundEvent::Won { attempts_used: 3, .. }));

    // resuming a finished round shows it as won and keeps the stats single-counted
    let mut again =
        GameSession::new(&words, &store, GameMode::Trio, Language::Pt, date()).with_table(&puzzles);
    assert_eq!(again.bootstrap(), Some(BootstrapPhase::Resumed));
    assert!(again.is_won());
    assert!(again.is_locked());
    assert_eq!(again.stats().games, 1);
    assert_eq!(again.stats().wins, 1);
    assert_eq!(again.stats().histogram[3], 1);
}

#[test]
fn daily_loss_is_game_over_after_restart() {
    let store = MemoryStore::new();
    let words = WordList::embedded();
    let puzzles = table(GameMode::Term, &["carta"]);

    {
        let mut session = GameSession::new(&words, &store, GameMode::Term, Language::Pt, date())
            .with_table(&puzzles);
        session.bootstrap();
        let guesses = ["termo", "mundo", "perto", "raios", "teste", "sagaz"];
        for (i, guess) in guesses.iter().enumerate() {
            session.enter_word(guess);
            let event = session.submit().unwrap();
            if i + 1 < guesses.len() {
                assert_eq!(event, RoundEvent::Continue);
            } else {
                assert!(matches!(event, RoundEvent::Lost { .. }));
            }
        }
        assert_eq!(session.remaining_attempts(), Some(0));
    }

    let mut session =
        GameSession::new(&words, &store, GameMode::Term, Language::Pt, date()).with_table(&puzzles);
    session.bootstrap();
    assert!(session.is_game_over());
    assert!(!session.is_won());
    assert_eq!(session.stats().failed, 1);
    assert_eq!(session.stats().current_streak, 0);
    assert_eq!(session.stats().success_rate(), 0);
}

#[test]
fn offline_primary_keeps_playing_locally() {
    let dir = tempfile::tempdir().unwrap();
    let store = FallbackStore::new(Offline, FileStore::new(dir.path()));
    let words = WordList::embedded();
    let puzzles = table(GameMode::Term, &["carta"]);

    let mut session =
        GameSession::new(&words, &store, GameMode::Term, Language::Pt, date()).with_table(&puzzles);
    assert_eq!(session.bootstrap(), Some(BootstrapPhase::Fresh));
    session.enter_word("carta");
    assert!(matches!(session.submit(), Ok(RoundEvent::Won { attempts_used: 0, .. })));

    let local = store.local();
    let saved = local
        .load_state(&ScopeKey::round(Language::Pt, GameMode::Term, date()))
        .unwrap()
        .unwrap();
    assert_eq!(saved[0].tries, ["carta"]);
    assert!(saved[0].won);

    let stats = local
        .load_stats(&ScopeKey::stats(Language::Pt, GameMode::Term))
        .unwrap()
        .unwrap();
    assert_eq!(stats.perfect_wins, 1);
}

#[test]
fn corrupt_file_starts_a_fresh_round() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());
    let key = ScopeKey::round(Language::Pt, GameMode::Duo, date());
    fs::write(store.path_for(&key), "{\"state\": [{\"tries\": 3").unwrap();

    let words = WordList::embedded();
    let puzzles = table(GameMode::Duo, &["carta", "mundo"]);
    let mut session =
        GameSession::new(&words, &store, GameMode::Duo, Language::Pt, date()).with_table(&puzzles);
    assert_eq!(session.bootstrap(), Some(BootstrapPhase::Fresh));
    assert!(session.tries().is_empty());

    // the next confirmed guess replaces the unreadable document
    session.enter_word("termo");
    assert_eq!(session.submit(), Ok(RoundEvent::Continue));
    let saved = store.load_state(&key).unwrap().unwrap();
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[1].tries, ["termo"]);
}

#[test]
fn unlimited_round_advances_and_survives_restart() {
    let store = MemoryStore::new();
    let words = WordList::embedded();
    let puzzles = table(GameMode::Infinite, &["livro"]);

    let next = {
        let mut session = GameSession::new(&words, &store, GameMode::Infinite, Language::Pt, date())
            .with_table(&puzzles);
        assert_eq!(session.bootstrap(), Some(BootstrapPhase::Fresh));
        assert_eq!(session.remaining_attempts(), None);

        session.enter_word("termo");
        assert_eq!(session.submit(), Ok(RoundEvent::Continue));
        session.enter_word("livro");
        let event = session.submit().unwrap();
        assert!(matches!(event, RoundEvent::Won { attempts_used: 1, .. }));

        assert_eq!(session.decision(), BootstrapPhase::Advancing);
        assert!(session.tries().is_empty());
        assert!(!session.is_locked());
        session.solutions().clone()
    };
    assert_eq!(next.date, date().succ_opt().unwrap());

    let mut session =
        GameSession::new(&words, &store, GameMode::Infinite, Language::Pt, date()).with_table(&puzzles);
    assert_eq!(session.bootstrap(), Some(BootstrapPhase::Resumed));
    assert_eq!(session.solutions().words, next.words);
    assert_eq!(session.solutions().date, next.date);
    assert!(session.tries().is_empty());
    assert_eq!(session.stats().wins, 1);
    assert_eq!(session.stats().histogram[1], 1);
}
