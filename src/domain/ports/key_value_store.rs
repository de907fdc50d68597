//! KeyValueStore port - durable string storage addressed by key
//!
//! The persistence adapter serializes each entity to a string and hands it
//! to a store. Implementations decide where the bytes live.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access store: {message}")]
    AccessError { message: String },

    #[error("failed to lock store: {message}")]
    LockError { message: String },
}

pub type StoreResult<T> = Result<T, StoreError>;

pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if nothing was stored.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace the value stored under `key`.
    fn put(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).put(key, value)
    }
}
