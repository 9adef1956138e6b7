//! # Profile of the signed-in user
//!
//! [`UserProfile`] is what the UI shows after sign-in. The `/auth/profile`
//! endpoint is an opaque collaborator, so parsing is lenient: every field is
//! optional, and the profile may sit at the top level of the body or under a
//! `user` key. [`UserProfile::display_name`] returns the name or falls back to
//! the email address.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// User information as reported by the profile endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Server-side identifier; kept as raw JSON since it may be a string or a number.
    #[serde(default, alias = "_id")]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserProfile {
    /// Extract a profile from a response body.
    pub fn from_response(data: &Value) -> Option<Self> {
        let source = data.get("user").unwrap_or(data);
        let profile: Self = serde_json::from_value(source.clone()).ok()?;
        if profile.name.is_none() && profile.email.is_none() {
            return None;
        }
        Some(profile)
    }

    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("")
    }
}
