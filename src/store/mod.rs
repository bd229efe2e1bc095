//! In-memory key-value store with logged operations

use log::{info, warn};
use std::collections::HashMap;

/// String key-value store
///
/// Every operation is recorded through the `log` facade, giving callers an
/// audit trail of mutations and lookups. The binary decides where that log
/// goes; the store never configures logging itself.
#[derive(Debug, Default)]
pub struct DataStore {
    data: HashMap<String, String>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, overwriting any existing entry for the key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        info!("Added key: {}, value: {}", key, value);
        self.data.insert(key, value);
    }

    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = self.data.get(key).map(String::as_str);
        info!("Retrieved key: {}, value: {:?}", key, value);
        value
    }

    /// Remove a key, returning whether it was present
    pub fn remove(&mut self, key: &str) -> bool {
        if self.data.remove(key).is_some() {
            info!("Deleted key: {}", key);
            true
        } else {
            warn!("Key not found for deletion: {}", key);
            false
        }
    }

    /// Iterate the current entries in arbitrary order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
