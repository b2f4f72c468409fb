//! Letrix
//!
//! A daily word puzzle engine: one shared list of guesses played against one
//! to four hidden words, with deterministic per-date puzzles, resumable
//! rounds and cumulative stats.
//!
//! # Quick Start
//!
//! ```rust
//! use letrix::core::{GameMode, Language};
//! use letrix::session::GameSession;
//! use letrix::storage::MemoryStore;
//! use letrix::wordlists::WordList;
//! use chrono::NaiveDate;
//!
//! let words = WordList::embedded();
//! let store = MemoryStore::new();
//! let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//!
//! let mut session = GameSession::new(&words, &store, GameMode::Duo, Language::Pt, date);
//! session.bootstrap();
//! assert_eq!(session.solutions().boards(), 2);
//! ```

// Core domain types
pub mod core;

// Daily puzzle selection
pub mod puzzle;

// Round state, submission and bootstrap
pub mod session;

// Cumulative statistics
pub mod stats;

// Persistence backends
pub mod storage;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
