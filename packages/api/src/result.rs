//! # Uniform result of every auth API call
//!
//! [`ApiResult`] is the only thing the client hands back. Nothing escapes it:
//! transport failures, undecodable bodies and HTTP error statuses all become a
//! [`ApiResult::Failure`] whose `error` is the same generic message, so the UI
//! never has to tell them apart. When the server did answer with an error
//! status, the [`Rejection`] keeps its status code and `message` for callers
//! that want to show it.
//!
//! ## Response envelope
//!
//! A successful transport carries the parsed JSON body. The auth endpoints
//! answer with
//!
//! ```json
//! { "result": { "success": true }, "token": "…", "message": "…" }
//! ```
//!
//! where only `result.success == true` means the server accepted the
//! credentials. [`ApiResult::is_authenticated`], [`ApiResult::token`] and
//! [`ApiResult::server_message`] read that envelope.

use serde_json::Value;

/// Message used for every failed request.
pub const GENERIC_ERROR: &str = "An unexpected error occurred";

/// Server-side refusal: the HTTP status and the body's `message`, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub status: u16,
    pub message: Option<String>,
}

/// Outcome of a request to the auth API.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult {
    Success {
        data: Value,
    },
    Failure {
        error: String,
        rejection: Option<Rejection>,
    },
}

impl ApiResult {
    pub fn failure(rejection: Option<Rejection>) -> Self {
        ApiResult::Failure {
            error: GENERIC_ERROR.to_string(),
            rejection,
        }
    }

    /// Transport-level success: the server answered 2xx with a JSON body.
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success { .. })
    }

    pub fn data(&self) -> Option<&Value> {
        match self {
            ApiResult::Success { data } => Some(data),
            ApiResult::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ApiResult::Success { .. } => None,
            ApiResult::Failure { error, .. } => Some(error),
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            ApiResult::Success { .. } => None,
            ApiResult::Failure { rejection, .. } => rejection.as_ref(),
        }
    }

    /// Domain-level success: the body says `result.success == true`.
    pub fn is_authenticated(&self) -> bool {
        self.data()
            .and_then(|d| d.get("result"))
            .and_then(|r| r.get("success"))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Non-empty `token` string from a successful body.
    pub fn token(&self) -> Option<&str> {
        self.data()
            .and_then(|d| d.get("token"))
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
    }

    /// The server's `message`, from either a 2xx body or an error status.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiResult::Success { data } => data.get("message").and_then(Value::as_str),
            ApiResult::Failure { rejection, .. } => {
                rejection.as_ref().and_then(|r| r.message.as_deref())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_accessors() {
        let ok = ApiResult::Success {
            data: json!({ "result": { "success": true }, "token": "abc" }),
        };
        assert!(ok.is_success());
        assert!(ok.is_authenticated());
        assert_eq!(ok.token(), Some("abc"));
        assert!(ok.error().is_none());

        let refused = ApiResult::Success {
            data: json!({ "result": { "success": false }, "message": "Wrong password" }),
        };
        assert!(refused.is_success());
        assert!(!refused.is_authenticated());
        assert_eq!(refused.server_message(), Some("Wrong password"));
    }

    #[test]
    fn test_flat_success_flag_is_not_authenticated() {
        let flat = ApiResult::Success {
            data: json!({ "success": true, "token": "abc" }),
        };
        assert!(!flat.is_authenticated());
        assert_eq!(flat.token(), Some("abc"));
    }

    #[test]
    fn test_empty_or_non_string_token_is_ignored() {
        let empty = ApiResult::Success {
            data: json!({ "token": "" }),
        };
        assert!(empty.token().is_none());

        let number = ApiResult::Success {
            data: json!({ "token": 42 }),
        };
        assert!(number.token().is_none());
    }

    #[test]
    fn test_failure_is_uniform() {
        let transport = ApiResult::failure(None);
        let rejected = ApiResult::failure(Some(Rejection {
            status: 401,
            message: Some("Invalid credentials".to_string()),
        }));

        assert_eq!(transport.error(), Some(GENERIC_ERROR));
        assert_eq!(rejected.error(), Some(GENERIC_ERROR));
        assert!(!rejected.is_authenticated());
        assert!(rejected.token().is_none());
        assert_eq!(rejected.server_message(), Some("Invalid credentials"));
        assert_eq!(rejected.rejection().map(|r| r.status), Some(401));
        assert!(transport.server_message().is_none());
    }
}
