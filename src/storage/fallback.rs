//! Primary store with a local fallback
//!
//! Every write lands in the local store; the primary is best effort. A
//! failing primary never blocks play, it only means the round is unsynced.

use super::{Persistence, ScopeKey, StorageError};
use crate::session::RoundSessionState;
use crate::stats::Stats;
use log::warn;

#[derive(Debug)]
pub struct FallbackStore<P, L> {
    primary: P,
    local: L,
}

impl<P: Persistence, L: Persistence> FallbackStore<P, L> {
    pub const fn new(primary: P, local: L) -> Self {
        Self { primary, local }
    }

    pub const fn primary(&self) -> &P {
        &self.primary
    }

    pub const fn local(&self) -> &L {
        &self.local
    }

    fn load<T>(
        &self,
        key: &ScopeKey,
        what: &str,
        load: impl Fn(&dyn Persistence, &ScopeKey) -> Result<Option<T>, StorageError>,
    ) -> Result<Option<T>, StorageError> {
        match load(&self.primary, key) {
            Ok(Some(value)) => return Ok(Some(value)),
            Ok(None) => {}
            Err(e) => warn!("primary {what} load for {key} failed, using local copy: {e}"),
        }
        load(&self.local, key)
    }

    fn save(
        &self,
        key: &ScopeKey,
        what: &str,
        save: impl Fn(&dyn Persistence) -> Result<(), StorageError>,
    ) -> Result<(), StorageError> {
        save(&self.local)?;
        if let Err(e) = save(&self.primary) {
            warn!("primary {what} save for {key} failed, kept locally: {e}");
        }
        Ok(())
    }
}

impl<P: Persistence, L: Persistence> Persistence for FallbackStore<P, L> {
    fn load_state(&self, key: &ScopeKey) -> Result<Option<Vec<RoundSessionState>>, StorageError> {
        self.load(key, "state", |store, key| store.load_state(key))
    }

    fn save_state(&self, key: &ScopeKey, state: &[RoundSessionState]) -> Result<(), StorageError> {
        self.save(key, "state", |store| store.save_state(key, state))
    }

    fn load_stats(&self, key: &ScopeKey) -> Result<Option<Stats>, StorageError> {
        self.load(key, "stats", |store, key| store.load_stats(key))
    }

    fn save_stats(&self, key: &ScopeKey, stats: &Stats) -> Result<(), StorageError> {
        self.save(key, "stats", |store| store.save_stats(key, stats))
    }
}
