//! Durable key/value storage for the session token, plus the client configuration.

pub mod config;
pub mod error;
pub mod token_store;

mod memory;
pub use memory::MemoryTokenStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileTokenStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::ClientConfig;
pub use error::StoreError;
pub use token_store::TokenStore;
