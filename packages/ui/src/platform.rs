//! Platform-appropriate durable storage for the session token.
//!
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorageStore`]
//! - **Native**: one file per key under `<data_dir>/authform/` via [`store::FileTokenStore`]
//! - **WASM without `web`**: in-memory only

use std::sync::Arc;

use store::TokenStore;

pub fn make_token_store() -> Arc<dyn TokenStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(store::LocalStorageStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Arc::new(store::MemoryTokenStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("authform");
        Arc::new(store::FileTokenStore::new(base))
    }
}
