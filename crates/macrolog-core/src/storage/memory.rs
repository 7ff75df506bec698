//! In-memory store for tests and embedding.

use std::cell::RefCell;
use std::collections::HashMap;

use super::Storage;
use crate::error::PersistenceError;

/// Non-durable [`Storage`] backed by a map. Single-threaded by design, like
/// the engine itself.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record before the engine loads, e.g. to simulate pre-existing
    /// or corrupted persisted data.
    pub fn seed(&self, key: &str, value: &str) {
        self.records
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    /// The current serialized value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<String> {
        self.records.borrow().get(key).cloned()
    }
}

impl Storage for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.records.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.records
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_visible_through_load() {
        let store = MemoryStore::new();
        store.seed("theme", "true");
        assert_eq!(store.load("theme").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn save_overwrites() {
        let store = MemoryStore::new();
        store.save("k", "1").unwrap();
        store.save("k", "2").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("2"));
    }
}
