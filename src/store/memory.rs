use crate::errors::AppResult;
use crate::store::{Edit, KeyValueStore};
use std::collections::BTreeMap;

/// In-memory store, used by tests and by callers embedding the engine.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    map: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.map.get(key).cloned())
    }

    fn apply(&mut self, edits: Vec<Edit>) -> AppResult<()> {
        for edit in edits {
            match edit {
                Edit::Put(k, v) => {
                    self.map.insert(k, v);
                }
                Edit::Remove(k) => {
                    self.map.remove(&k);
                }
            }
        }
        Ok(())
    }

    fn keys_with_prefix(&self, prefix: &str) -> AppResult<Vec<String>> {
        Ok(self
            .map
            .range(prefix.to_string()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, _)| k.clone())
            .collect())
    }
}
