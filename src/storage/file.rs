//! Directory-backed store
//!
//! One JSON document per scope key, holding a `state` and a `stats` member.
//! Unlimited rounds share their key with the mode's stats, so both live in
//! the same document.

use super::{Persistence, ScopeKey, StorageError};
use crate::session::RoundSessionState;
use crate::stats::Stats;
use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const STATE_FIELD: &str = "state";
const STATS_FIELD: &str = "stats";

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at `dir`; the directory is created on first write
    #[must_use]
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding the document for `key`
    #[must_use]
    pub fn path_for(&self, key: &ScopeKey) -> PathBuf {
        let name = key.to_string().replace(':', "_");
        self.dir.join(format!("{name}.json"))
    }

    fn read_document(&self, key: &ScopeKey) -> Result<Option<Map<String, Value>>, StorageError> {
        let path = self.path_for(key);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn read_field<T: DeserializeOwned>(&self, key: &ScopeKey, field: &str) -> Result<Option<T>, StorageError> {
        let Some(mut document) = self.read_document(key)? else {
            return Ok(None);
        };
        match document.remove(field) {
            Some(Value::Null) | None => Ok(None),
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
        }
    }

    fn write_field<T: Serialize + ?Sized>(
        &self,
        key: &ScopeKey,
        field: &str,
        value: &T,
    ) -> Result<(), StorageError> {
        let mut document = match self.read_document(key) {
            Ok(document) => document.unwrap_or_default(),
            Err(StorageError::Json(e)) => {
                warn!("replacing unreadable document for {key}: {e}");
                Map::new()
            }
            Err(e) => return Err(e),
        };
        document.insert(field.to_string(), serde_json::to_value(value)?);

        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(&document)?)?;
        fs::rename(&tmp, &path)?;
        debug!("wrote {field} for {key} to {}", path.display());
        Ok(())
    }
}

impl Persistence for FileStore {
    fn load_state(&self, key: &ScopeKey) -> Result<Option<Vec<RoundSessionState>>, StorageError> {
        self.read_field(key, STATE_FIELD)
    }

    fn save_state(&self, key: &ScopeKey, state: &[RoundSessionState]) -> Result<(), StorageError> {
        self.write_field(key, STATE_FIELD, state)
    }

    fn load_stats(&self, key: &ScopeKey) -> Result<Option<Stats>, StorageError> {
        self.read_field(key, STATS_FIELD)
    }

    fn save_stats(&self, key: &ScopeKey, stats: &Stats) -> Result<(), StorageError> {
        self.write_field(key, STATS_FIELD, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameMode, Language};
    use chrono::NaiveDate;

    fn board(solution: &str) -> RoundSessionState {
        RoundSessionState {
            curday: 5,
            cur_row: 1,
            cur_try: String::new(),
            invalids: Vec::new(),
            tries: vec!["termo".to_string()],
            solution: solution.to_string(),
            display_solution: None,
            definition: None,
            game_over: false,
            won: false,
        }
    }

    #[test]
    fn missing_directory_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));
        let key = ScopeKey::stats(Language::Pt, GameMode::Term);
        assert!(store.load_state(&key).unwrap().is_none());
        assert!(store.load_stats(&key).unwrap().is_none());
    }

    #[test]
    fn state_and_stats_share_one_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        let key = ScopeKey::stats(Language::Pt, GameMode::Infinite);

        store.save_state(&key, &[board("mundo")]).unwrap();
        store.save_stats(&key, &Stats::new(8)).unwrap();

        assert_eq!(store.load_state(&key).unwrap(), Some(vec![board("mundo")]));
        assert_eq!(store.load_stats(&key).unwrap(), Some(Stats::new(8)));

        let content = fs::read_to_string(store.path_for(&key)).unwrap();
        assert!(content.contains("\"state\""));
        assert!(content.contains("\"stats\""));
        assert!(store.path_for(&key).ends_with("pt_infinite.json"));
    }

    #[test]
    fn daily_rounds_use_separate_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        let day = NaiveDate::from_ymd_opt(2026, 2, 26).unwrap();
        let today = ScopeKey::round(Language::En, GameMode::Term, day);
        let tomorrow = ScopeKey::round(Language::En, GameMode::Term, day.succ_opt().unwrap());

        store.save_state(&today, &[board("crane")]).unwrap();
        assert!(store.load_state(&tomorrow).unwrap().is_none());
    }

    #[test]
    fn corrupt_document_is_reported_then_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        let key = ScopeKey::stats(Language::Pt, GameMode::Duo);
        fs::write(store.path_for(&key), "{not json").unwrap();

        assert!(matches!(store.load_state(&key), Err(StorageError::Json(_))));

        store.save_stats(&key, &Stats::new(7)).unwrap();
        assert_eq!(store.load_stats(&key).unwrap(), Some(Stats::new(7)));
        assert!(store.load_state(&key).unwrap().is_none());
    }
}
