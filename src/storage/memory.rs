// CLASSIFICATION: COMMUNITY
// Filename: memory.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-17

//! In-process store, used by tests and ephemeral consoles.

use std::collections::HashMap;

use super::{KeyValueStore, StorageError, StorageResult};

/// Map-backed store with an optional byte quota.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
    quota: Option<usize>,
    disabled: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject writes that would push the total of keys and values past `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self { quota: Some(bytes), ..Self::default() }
    }

    /// A store whose every call fails, as when the browser blocks storage.
    pub fn disabled() -> Self {
        Self { disabled: true, ..Self::default() }
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    fn check_enabled(&self) -> StorageResult<()> {
        if self.disabled {
            return Err(StorageError::Unavailable("storage disabled".into()));
        }
        Ok(())
    }

    fn usage_without(&self, key: &str) -> usize {
        self.items
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        self.check_enabled()?;
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.check_enabled()?;
        if let Some(quota) = self.quota {
            let needed = self.usage_without(key) + key.len() + value.len();
            if needed > quota {
                return Err(StorageError::QuotaExceeded { needed, quota });
            }
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> StorageResult<()> {
        self.check_enabled()?;
        self.items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get_item("k").unwrap(), None);
        store.set_item("k", "v").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v"));
        store.remove_item("k").unwrap();
        assert_eq!(store.get_item("k").unwrap(), None);
    }

    #[test]
    fn quota_counts_replaced_value_once() {
        let mut store = MemoryStore::with_quota(8);
        store.set_item("k", "1234567").unwrap();
        store.set_item("k", "7654321").unwrap();
        let err = store.set_item("k", "12345678").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { needed: 9, quota: 8 }));
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("7654321"));
    }

    #[test]
    fn disabled_store_fails_every_call() {
        let mut store = MemoryStore::disabled();
        assert!(matches!(store.get_item("k"), Err(StorageError::Unavailable(_))));
        assert!(matches!(store.set_item("k", "v"), Err(StorageError::Unavailable(_))));
        store.set_disabled(false);
        store.set_item("k", "v").unwrap();
    }
}
