// CLASSIFICATION: COMMUNITY
// Filename: records.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-17

//! Persistence adapter for the gNB list.

use log::warn;

use super::{KeyValueStore, StorageResult};
use crate::model::GnbRecord;

/// Key the console has always used for its gNB snapshot.
pub const DEFAULT_STORAGE_KEY: &str = "gnbList";

/// Loads and saves the full gNB list under one key.
#[derive(Debug)]
pub struct RecordStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> RecordStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Read the stored list. Missing, unreadable or malformed data yields an
    /// empty list.
    pub fn load(&self) -> Vec<GnbRecord> {
        let raw = match self.store.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("reading {:?} failed, starting empty: {}", self.key, e);
                return Vec::new();
            }
        };
        if raw.trim().is_empty() {
            return Vec::new();
        }
        match serde_json::from_str::<Option<Vec<GnbRecord>>>(&raw) {
            Ok(list) => list.unwrap_or_default(),
            Err(e) => {
                warn!("stored {:?} is not a gNB list, starting empty: {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Overwrite the stored value with the complete list.
    pub fn save(&mut self, records: &[GnbRecord]) -> StorageResult<()> {
        let data = serde_json::to_string(records)?;
        self.store.set_item(&self.key, &data)
    }
}
