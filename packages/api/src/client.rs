//! # Auth API client
//!
//! [`AuthClient`] is constructed once by whoever owns the UI tree and shared by
//! cloning (the HTTP client and the [`Session`] are both reference-counted).
//!
//! ## Request pipeline
//!
//! [`AuthClient::request`] joins `base_url` and the endpoint, sends
//! `Content-Type: application/json` (caller headers may override it), adds
//! `Authorization: Bearer <token>` when the session holds a token, and always
//! parses the body as JSON. Any failure along the way is logged and collapsed
//! into [`ApiResult::Failure`]; the call itself never fails.
//!
//! ## Token handling
//!
//! `login` and `signup` store the body's `token` as soon as the transport
//! succeeds, then return the result unchanged. Whether the server actually
//! accepted the credentials is the caller's call, via
//! [`ApiResult::is_authenticated`].

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::{json, Value};
use store::{ClientConfig, TokenStore};

use crate::auth::Session;
use crate::error::ApiError;
use crate::request::RequestOptions;
use crate::result::ApiResult;

pub const LOGIN_PATH: &str = "/auth/login";
pub const SIGNUP_PATH: &str = "/auth/signup";
pub const LOGOUT_PATH: &str = "/auth/logout";
pub const PROFILE_PATH: &str = "/auth/profile";

/// Client for the remote auth API, owning the session token.
#[derive(Clone, Debug)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl AuthClient {
    pub fn new(config: &ClientConfig, store: Arc<dyn TokenStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session: Session::new(store, config.token_key.clone()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Store a token, or clear the session when `token` is empty.
    pub fn set_token(&self, token: &str) {
        self.session.set_token(token);
    }

    pub fn get_token(&self) -> Option<String> {
        self.session.get_token()
    }

    /// Send a JSON request to `endpoint` and normalise the outcome.
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> ApiResult {
        match self.send(endpoint, options).await {
            Ok(data) => ApiResult::Success { data },
            Err(e) => {
                match &e {
                    ApiError::Status {
                        server_message: Some(message),
                        ..
                    } => tracing::warn!(endpoint, "Request rejected: {} ({})", message, e),
                    _ => tracing::warn!(endpoint, "Request failed: {}", e),
                }
                ApiResult::failure(e.rejection())
            }
        }
    }

    async fn send(&self, endpoint: &str, options: RequestOptions) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in &options.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ApiError::InvalidHeader(name.clone()))?;
            let header_value =
                HeaderValue::from_str(value).map_err(|_| ApiError::InvalidHeader(name.clone()))?;
            headers.insert(header_name, header_value);
        }
        if let Some(token) = self.session.get_token() {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ApiError::InvalidHeader(AUTHORIZATION.to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let mut builder = self.http.request(options.method, &url).headers(headers);
        if let Some(body) = &options.body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await.map_err(ApiError::Transport)?;
        let status = response.status();
        let data: Value = response.json().await.map_err(ApiError::Decode)?;

        if !status.is_success() {
            let server_message = data
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string);
            return Err(ApiError::Status {
                status: status.as_u16(),
                server_message,
            });
        }

        Ok(data)
    }

    /// `POST /auth/login`.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult {
        tracing::info!(email, "Attempting login");
        let result = self
            .request(
                LOGIN_PATH,
                RequestOptions::post().json(json!({ "email": email, "password": password })),
            )
            .await;
        self.persist_token(&result);
        result
    }

    /// `POST /auth/signup`.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> ApiResult {
        tracing::info!(email, "Attempting signup");
        let result = self
            .request(
                SIGNUP_PATH,
                RequestOptions::post().json(json!({
                    "name": name,
                    "email": email,
                    "password": password,
                })),
            )
            .await;
        self.persist_token(&result);
        result
    }

    /// Notify the server, then clear the local session no matter what.
    ///
    /// The session is gone when this returns, even on `Err`; the error only
    /// reports that the server never heard about it.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let notified = self.send(LOGOUT_PATH, RequestOptions::post()).await;
        self.session.clear();
        match notified {
            Ok(_) => {
                tracing::info!("Logged out");
                Ok(())
            }
            Err(e) => {
                tracing::error!("Logout error: {}", e);
                Err(e)
            }
        }
    }

    /// `GET /auth/profile`.
    pub async fn get_profile(&self) -> ApiResult {
        self.request(PROFILE_PATH, RequestOptions::get()).await
    }

    fn persist_token(&self, result: &ApiResult) {
        if let Some(token) = result.token() {
            self.session.set_token(token);
        }
    }
}
