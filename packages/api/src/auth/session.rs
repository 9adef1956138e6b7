//! Bearer-token session held by the client.
//!
//! A [`Session`] keeps at most one token in memory and mirrors it into a
//! [`TokenStore`] under a fixed key. Reads hydrate from the store once; after
//! that the in-memory copy is authoritative, so an explicit clear really ends
//! the session even if some other writer left a value behind.

use std::sync::{Arc, Mutex, MutexGuard};

use store::TokenStore;

/// Session token holder. Clones share the same token.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
    key: String,
    state: Arc<Mutex<SessionState>>,
}

#[derive(Debug, Default)]
struct SessionState {
    token: Option<String>,
    hydrated: bool,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            state: Arc::new(Mutex::new(SessionState::default())),
        }
    }

    /// Store a token, or end the session when `token` is empty.
    pub fn set_token(&self, token: &str) {
        let mut state = self.lock();
        state.hydrated = true;
        if token.is_empty() {
            self.store.remove(&self.key);
            state.token = None;
            tracing::debug!(key = %self.key, "Session token cleared");
        } else {
            self.store.set(&self.key, token);
            state.token = Some(token.to_string());
            tracing::debug!(key = %self.key, "Session token stored");
        }
    }

    /// Current token, reading durable storage on the first call only.
    pub fn get_token(&self) -> Option<String> {
        let mut state = self.lock();
        if state.token.is_none() && !state.hydrated {
            state.token = self.store.get(&self.key).filter(|t| !t.is_empty());
            state.hydrated = true;
        }
        state.token.clone()
    }

    pub fn clear(&self) {
        self.set_token("");
    }

    pub fn is_authenticated(&self) -> bool {
        self.get_token().is_some()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("Session")
            .field("key", &self.key)
            .field("has_token", &state.token.is_some())
            .field("hydrated", &state.hydrated)
            .finish()
    }
}
