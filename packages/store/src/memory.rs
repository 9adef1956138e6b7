use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::token_store::TokenStore;

/// In-memory TokenStore for testing and as a fallback when no durable storage exists.
///
/// Clones share the same map, so a test can keep a handle and inspect what the
/// session wrote.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry, as if left over from a previous visit.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.set(key, value);
        store
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still a valid map.
        self.values.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.lock().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.lock().remove(key);
    }
}
