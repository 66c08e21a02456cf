//! Key-value persistence for day records, running punches and monthly rates.
//!
//! The engine only ever talks to a [`KeyValueStore`]; the CLI backs it with
//! SQLite, tests with an in-memory map.

pub mod codec;
pub mod keys;
pub mod memory;
pub mod records;
pub mod sqlite;

use crate::errors::AppResult;

pub use memory::MemoryStore;
pub use records::TimeRecordStore;
pub use sqlite::SqliteStore;

/// One pending change to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Put(String, String),
    Remove(String),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Apply a batch of edits in order. Backends that can do so apply the
    /// whole batch atomically.
    fn apply(&mut self, edits: Vec<Edit>) -> AppResult<()>;

    /// All keys starting with `prefix`, sorted.
    fn keys_with_prefix(&self, prefix: &str) -> AppResult<Vec<String>>;

    fn put(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.apply(vec![Edit::Put(key.to_string(), value.to_string())])
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.apply(vec![Edit::Remove(key.to_string())])
    }
}
