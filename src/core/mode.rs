//! Game modes and their static rule table

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A named ruleset fixing board count, word length and attempt budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Term,
    Duo,
    Trio,
    Four,
    Deca,
    Infinite,
}

/// Static rules for a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeConfig {
    pub mode: GameMode,
    pub id: u8,
    pub name: &'static str,
    pub boards: usize,
    pub word_length: usize,
    pub max_attempts: usize,
    pub unlimited: bool,
}

static MODE_CONFIGS: [ModeConfig; 6] = [
    ModeConfig {
        mode: GameMode::Term,
        id: 1,
        name: "term",
        boards: 1,
        word_length: 5,
        max_attempts: 6,
        unlimited: false,
    },
    ModeConfig {
        mode: GameMode::Duo,
        id: 2,
        name: "duo",
        boards: 2,
        word_length: 5,
        max_attempts: 7,
        unlimited: false,
    },
    ModeConfig {
        mode: GameMode::Trio,
        id: 3,
        name: "trio",
        boards: 3,
        word_length: 5,
        max_attempts: 8,
        unlimited: false,
    },
    ModeConfig {
        mode: GameMode::Four,
        id: 4,
        name: "four",
        boards: 4,
        word_length: 5,
        max_attempts: 9,
        unlimited: false,
    },
    ModeConfig {
        mode: GameMode::Deca,
        id: 5,
        name: "deca",
        boards: 1,
        word_length: 10,
        max_attempts: 8,
        unlimited: false,
    },
    ModeConfig {
        mode: GameMode::Infinite,
        id: 6,
        name: "infinite",
        boards: 1,
        word_length: 5,
        max_attempts: 8,
        unlimited: true,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown game mode: {0}")]
pub struct ModeError(pub String);

impl GameMode {
    pub const ALL: [Self; 6] = [
        Self::Term,
        Self::Duo,
        Self::Trio,
        Self::Four,
        Self::Deca,
        Self::Infinite,
    ];

    /// Rules for this mode
    #[must_use]
    pub fn config(self) -> &'static ModeConfig {
        &MODE_CONFIGS[self as usize]
    }

    /// Numeric id (1-6), used in puzzle seeds and puzzle tables
    #[must_use]
    pub fn id(self) -> u8 {
        self.config().id
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.config().name
    }

    #[must_use]
    pub fn is_unlimited(self) -> bool {
        self.config().unlimited
    }

    #[must_use]
    pub fn is_multi_board(self) -> bool {
        self.config().boards > 1
    }

    /// Look up a mode by numeric id
    #[must_use]
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.id() == id)
    }
}

impl FromStr for GameMode {
    type Err = ModeError;

    /// Accepts either the numeric id or the canonical name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<u8>() {
            return Self::from_id(id).ok_or_else(|| ModeError(s.to_string()));
        }
        let lowered = trimmed.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.name() == lowered)
            .ok_or_else(|| ModeError(s.to_string()))
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_table_matches_modes() {
        for mode in GameMode::ALL {
            assert_eq!(mode.config().mode, mode);
        }
        assert_eq!(GameMode::Duo.config().boards, 2);
        assert_eq!(GameMode::Duo.config().max_attempts, 7);
        assert_eq!(GameMode::Deca.config().word_length, 10);
        assert!(GameMode::Infinite.is_unlimited());
        assert!(!GameMode::Term.is_unlimited());
    }

    #[test]
    fn parse_by_id_and_name() {
        assert_eq!("1".parse::<GameMode>(), Ok(GameMode::Term));
        assert_eq!("four".parse::<GameMode>(), Ok(GameMode::Four));
        assert_eq!(" Infinite ".parse::<GameMode>(), Ok(GameMode::Infinite));
        assert!("7".parse::<GameMode>().is_err());
        assert!("quinteto".parse::<GameMode>().is_err());
    }

    #[test]
    fn multi_board_modes() {
        assert!(GameMode::Trio.is_multi_board());
        assert!(!GameMode::Deca.is_multi_board());
    }
}
