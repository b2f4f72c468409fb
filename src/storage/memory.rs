//! In-memory store holding raw JSON per key

use super::{Persistence, ScopeKey, StorageError};
use crate::session::RoundSessionState;
use crate::stats::Stats;
use rustc_hash::FxHashMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;

/// Browser-storage style key-value store
///
/// Values are kept as JSON text so corrupt records can be injected with
/// [`MemoryStore::set_raw`] and are decoded on every read.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<FxHashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state_key(key: &ScopeKey) -> String {
        format!("state:{key}")
    }

    fn stats_key(key: &ScopeKey) -> String {
        format!("stats:{key}")
    }

    /// Raw stored text for a round, if any
    #[must_use]
    pub fn raw_state(&self, key: &ScopeKey) -> Option<String> {
        self.values.borrow().get(&Self::state_key(key)).cloned()
    }

    /// Overwrite a round's stored text
    pub fn set_raw(&self, key: &ScopeKey, json: &str) {
        self.values
            .borrow_mut()
            .insert(Self::state_key(key), json.to_string());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        self.values
            .borrow()
            .get(key)
            .map(|json| serde_json::from_str(json))
            .transpose()
            .map_err(StorageError::from)
    }

    fn write<T: Serialize + ?Sized>(&self, key: String, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)?;
        self.values.borrow_mut().insert(key, json);
        Ok(())
    }
}

impl Persistence for MemoryStore {
    fn load_state(&self, key: &ScopeKey) -> Result<Option<Vec<RoundSessionState>>, StorageError> {
        self.read(&Self::state_key(key))
    }

    fn save_state(&self, key: &ScopeKey, state: &[RoundSessionState]) -> Result<(), StorageError> {
        self.write(Self::state_key(key), state)
    }

    fn load_stats(&self, key: &ScopeKey) -> Result<Option<Stats>, StorageError> {
        self.read(&Self::stats_key(key))
    }

    fn save_stats(&self, key: &ScopeKey, stats: &Stats) -> Result<(), StorageError> {
        self.write(Self::stats_key(key), stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameMode, Language};

    fn key() -> ScopeKey {
        ScopeKey::stats(Language::Pt, GameMode::Term)
    }

    #[test]
    fn missing_keys_load_as_none() {
        let store = MemoryStore::new();
        assert!(store.load_state(&key()).unwrap().is_none());
        assert!(store.load_stats(&key()).unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn state_and_stats_are_kept_apart() {
        let store = MemoryStore::new();
        let stats = Stats::new(6);
        store.save_stats(&key(), &stats).unwrap();
        store.save_state(&key(), &[]).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.load_stats(&key()).unwrap(), Some(stats));
        assert_eq!(store.load_state(&key()).unwrap(), Some(Vec::new()));
    }

    #[test]
    fn corrupt_json_is_an_error() {
        let store = MemoryStore::new();
        store.set_raw(&key(), "{broken");
        assert!(matches!(store.load_state(&key()), Err(StorageError::Json(_))));
        assert_eq!(store.raw_state(&key()).as_deref(), Some("{broken"));
    }
}
