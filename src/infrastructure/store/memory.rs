//! In-memory key-value store for tests and fuzzing

use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::ports::{KeyValueStore, StoreError, StoreResult};

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    reject_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail
    pub fn read_only() -> Self {
        Self {
            reject_writes: true,
            ..Self::default()
        }
    }

    /// Seed a raw value, bypassing `put`
    pub fn insert(&self, key: &str, value: impl Into<String>) {
        self.values.borrow_mut().insert(key.to_string(), value.into());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        if self.reject_writes {
            return Err(StoreError::AccessError {
                message: format!("store is read-only, cannot write {key}"),
            });
        }
        self.insert(key, value);
        Ok(())
    }
}
