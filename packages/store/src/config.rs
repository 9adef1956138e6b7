//! # Client configuration
//!
//! [`ClientConfig`] tells the auth client where the remote API lives and how
//! the session is kept. It can be written as TOML:
//!
//! ```toml
//! base_url = "https://auth.example.com"   # prefix for every /auth/* endpoint
//! token_key = "authToken"                 # durable storage key of the session token
//! home_route = "/home"                    # where the form sends the user after sign-in
//! ```
//!
//! Every field has a default, so a missing or empty file is equivalent to
//! [`ClientConfig::default`]. Web builds usually skip the file entirely and bake
//! the API address in at compile time via `AUTH_API_BASE_URL`
//! (see [`ClientConfig::from_env`]).

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3009";

/// Storage key the session token lives under.
pub const DEFAULT_TOKEN_KEY: &str = "authToken";

/// Client-side settings for the auth API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_token_key")]
    pub token_key: String,
    #[serde(default = "default_home_route")]
    pub home_route: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_token_key() -> String {
    DEFAULT_TOKEN_KEY.to_string()
}

fn default_home_route() -> String {
    "/home".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token_key: default_token_key(),
            home_route: default_home_route(),
        }
    }
}

impl ClientConfig {
    /// Defaults, with `base_url` taken from the `AUTH_API_BASE_URL` variable
    /// present when the crate was compiled.
    pub fn from_env() -> Self {
        match option_env!("AUTH_API_BASE_URL") {
            Some(url) if !url.trim().is_empty() => Self::default().with_base_url(url),
            _ => Self::default(),
        }
    }

    /// Builder method to point the client at another API address.
    /// A trailing slash is dropped so endpoints can be appended verbatim.
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Builder method to change the storage key of the session token.
    pub fn with_token_key(mut self, key: &str) -> Self {
        self.token_key = key.to_string();
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, StoreError> {
        let config: Self = toml::from_str(s)?;
        let base_url = config.base_url.clone();
        Ok(config.with_base_url(&base_url))
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, StoreError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, "http://localhost:3009");
        assert_eq!(config.token_key, "authToken");
        assert_eq!(config.home_route, "/home");
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = ClientConfig::from_toml(r#"base_url = "https://auth.example.com/""#).unwrap();
        assert_eq!(config.base_url, "https://auth.example.com");
        assert_eq!(config.token_key, "authToken");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let err = ClientConfig::from_toml("base_url = [").unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::default()
            .with_base_url("https://api.example.com")
            .with_token_key("session");
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }
}
