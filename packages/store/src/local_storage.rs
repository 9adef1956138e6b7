//! # localStorage token store — browser-side persistence
//!
//! [`LocalStorageStore`] is the [`TokenStore`] used on the **web platform**. It
//! writes straight into `window.localStorage`, so the session token outlives a
//! page reload within the same origin.
//!
//! ## Handle management
//!
//! The struct holds no `web_sys::Storage` handle. `Storage` is not `Send`, and
//! looking it up on every call is cheap because the browser hands back the same
//! object each time.
//!
//! ## Error handling
//!
//! `localStorage` can be missing (sandboxed iframes) or throw (quota, private
//! mode). Every failure is logged and treated as "nothing stored".

use crate::token_store::TokenStore;

/// `window.localStorage`-backed TokenStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("localStorage unavailable: {:?}", e);
                None
            }
        }
    }
}

impl TokenStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = Self::storage()?;
        storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::warn!(key, "localStorage write failed: {:?}", e);
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            tracing::warn!(key, "localStorage remove failed: {:?}", e);
        }
    }
}
