//! # Filesystem-backed token store
//!
//! [`FileTokenStore`] persists each key as its own small file so a native
//! build keeps the session across restarts, the way `localStorage` does in
//! the browser.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <key>              # file containing the raw value, e.g. `authToken`
//! ```
//!
//! Use [`dirs::data_dir()`](https://docs.rs/dirs) to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/<app>/` |
//! | Linux | `~/.local/share/<app>/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\<app>\` |

use std::path::PathBuf;

use crate::error::StoreError;
use crate::token_store::TokenStore;

/// Filesystem-backed TokenStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileTokenStore {
    base: PathBuf,
}

impl FileTokenStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && key != "."
            && key != "..";
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.base.join(key))
    }

    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.key_path(key)?;
        match std::fs::read_to_string(path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.key_path(key)?;
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(path, value)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        let path = self.key_path(key)?;
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read(key).unwrap_or_else(|e| {
            tracing::warn!(key, "Failed to read stored value: {}", e);
            None
        })
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.write(key, value) {
            tracing::warn!(key, "Failed to persist value: {}", e);
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = self.delete(key) {
            tracing::warn!(key, "Failed to remove stored value: {}", e);
        }
    }
}
