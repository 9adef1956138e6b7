//! # Token store — the durable half of a session
//!
//! [`TokenStore`] is a synchronous string key/value interface modelled on the
//! browser's `localStorage`: `get`/`set`/`remove` by key. The session holder in
//! the `api` crate mirrors its in-memory bearer token into one of these so that
//! it survives a page reload (or an app restart on native).
//!
//! | Implementation | Target | Backing |
//! |----------------|--------|---------|
//! | [`crate::MemoryTokenStore`] | all | `HashMap` behind a mutex, for tests and fallback |
//! | `LocalStorageStore` | wasm32 + `web` | `window.localStorage` |
//! | `FileTokenStore` | native | one file per key under a data directory |
//!
//! ## Error handling
//!
//! Like the browser API it mirrors, the trait is infallible from the caller's
//! point of view. Implementations log failures with `tracing` and degrade to
//! "nothing stored", so an unavailable storage backend only costs the user a
//! re-login.

/// Synchronous string key/value storage.
pub trait TokenStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Delete the value stored under `key`. Removing a missing key is a no-op.
    fn remove(&self, key: &str);
}
