//! The submit flow of the auth form, outside of any component.
//!
//! [`submit_form`] validates, sends the credentials, applies the answer to the
//! form and stores the token. It works on anything that hands out a
//! `&mut FormState` through [`FormAccess`], so the component drives it through
//! its signal and tests drive it with a plain [`FormState`].

use api::AuthClient;
use dioxus::prelude::*;

use crate::form::{FormState, SubmitOutcome};

/// Short-lived mutable access to a [`FormState`].
///
/// Access is never held across an `.await`.
pub trait FormAccess {
    fn with_form<R>(&mut self, f: impl FnOnce(&mut FormState) -> R) -> R;
}

impl FormAccess for FormState {
    fn with_form<R>(&mut self, f: impl FnOnce(&mut FormState) -> R) -> R {
        f(self)
    }
}

impl FormAccess for Signal<FormState> {
    fn with_form<R>(&mut self, f: impl FnOnce(&mut FormState) -> R) -> R {
        f(&mut *self.write())
    }
}

/// Run one submission.
///
/// Returns `None` when validation blocks it; in that case nothing is sent.
/// On an accepted submission the returned token is stored in the client's
/// session before this returns.
pub async fn submit_form(form: &mut impl FormAccess, client: &AuthClient) -> Option<SubmitOutcome> {
    let credentials = match form.with_form(FormState::begin_submit) {
        Ok(credentials) => credentials,
        Err(errors) => {
            tracing::debug!(?errors, "Submission blocked by validation");
            return None;
        }
    };

    tracing::info!(email = credentials.email(), "Submitting credentials");
    let result = credentials.submit_with(client).await;
    let outcome = form.with_form(|state| state.finish_submit(&result));

    if let SubmitOutcome::Authenticated {
        token: Some(token), ..
    } = &outcome
    {
        client.set_token(token);
    }
    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use api::client::{LOGIN_PATH, SIGNUP_PATH};
    use api::GENERIC_ERROR;
    use axum::extract::State;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use store::{ClientConfig, MemoryTokenStore, TokenStore};

    use crate::form::{AuthMode, Field};
    use crate::validation;

    async fn login_handler(
        State(hits): State<Arc<AtomicUsize>>,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        hits.fetch_add(1, Ordering::SeqCst);
        if body["password"] == "Passw0rd!" {
            (
                StatusCode::OK,
                Json(json!({ "result": { "success": true }, "token": "abc" })),
            )
        } else {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Invalid credentials" })),
            )
        }
    }

    async fn signup_handler(State(hits): State<Arc<AtomicUsize>>) -> Json<Value> {
        hits.fetch_add(1, Ordering::SeqCst);
        Json(json!({ "result": { "success": true }, "token": "fresh" }))
    }

    async fn spawn_server(hits: Arc<AtomicUsize>) -> String {
        let app = Router::new()
            .route(LOGIN_PATH, post(login_handler))
            .route(SIGNUP_PATH, post(signup_handler))
            .with_state(hits);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client_for(base_url: &str, store: &MemoryTokenStore) -> AuthClient {
        AuthClient::new(
            &ClientConfig::default().with_base_url(base_url),
            Arc::new(store.clone()),
        )
    }

    fn login_form(password: &str) -> FormState {
        let mut form = FormState::default();
        form.update_field(Field::Email, "ada@example.com");
        form.update_field(Field::Password, password);
        form
    }

    #[tokio::test]
    async fn test_invalid_form_sends_nothing() {
        let hits = Arc::new(AtomicUsize::new(0));
        let base_url = spawn_server(hits.clone()).await;
        let store = MemoryTokenStore::new();
        let client = client_for(&base_url, &store);

        let mut form = login_form("short");
        assert_eq!(submit_form(&mut form, &client).await, None);

        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert_eq!(form.errors.password.as_deref(), Some(validation::PASSWORD_TOO_SHORT));
        assert!(!form.submitting);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_accepted_login_persists_token() {
        let hits = Arc::new(AtomicUsize::new(0));
        let base_url = spawn_server(hits.clone()).await;
        let store = MemoryTokenStore::new();
        let client = client_for(&base_url, &store);

        let mut form = login_form("Passw0rd!");
        let outcome = submit_form(&mut form, &client).await;

        assert_eq!(
            outcome,
            Some(SubmitOutcome::Authenticated {
                token: Some("abc".to_string()),
                acknowledgment: "Login successful!".to_string(),
            })
        );
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(!form.submitting);
        assert_eq!(store.get("authToken").as_deref(), Some("abc"));

        // A fresh client over the same storage picks the session up.
        let reopened = client_for(&base_url, &store);
        assert_eq!(reopened.get_token().as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_accepted_signup_persists_token() {
        let hits = Arc::new(AtomicUsize::new(0));
        let base_url = spawn_server(hits.clone()).await;
        let store = MemoryTokenStore::new();
        let client = client_for(&base_url, &store);

        let mut form = FormState::new(AuthMode::Signup);
        form.update_field(Field::Name, "Ada");
        form.update_field(Field::Email, "ada@example.com");
        form.update_field(Field::Password, "Passw0rd!");
        form.update_field(Field::ConfirmPassword, "Passw0rd!");

        let outcome = submit_form(&mut form, &client).await;
        assert!(matches!(
            outcome,
            Some(SubmitOutcome::Authenticated { ref acknowledgment, .. })
                if acknowledgment == "Signup successful!"
        ));
        assert_eq!(store.get("authToken").as_deref(), Some("fresh"));
    }

    #[tokio::test]
    async fn test_rejected_login_shows_server_message() {
        let hits = Arc::new(AtomicUsize::new(0));
        let base_url = spawn_server(hits.clone()).await;
        let store = MemoryTokenStore::new();
        let client = client_for(&base_url, &store);

        let mut form = login_form("Wr0ngpass!");
        let outcome = submit_form(&mut form, &client).await;

        assert_eq!(
            outcome,
            Some(SubmitOutcome::Rejected {
                message: "Invalid credentials".to_string()
            })
        );
        assert_eq!(form.general_error.as_deref(), Some("Invalid credentials"));
        assert_eq!(form.fields.password, "Wr0ngpass!");
        assert!(store.is_empty());
        assert!(client.get_token().is_none());
    }

    #[tokio::test]
    async fn test_unreachable_server_shows_generic_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let store = MemoryTokenStore::new();
        let client = client_for(&format!("http://{addr}"), &store);

        let mut form = login_form("Passw0rd!");
        let outcome = submit_form(&mut form, &client).await;

        assert_eq!(
            outcome,
            Some(SubmitOutcome::Rejected {
                message: GENERIC_ERROR.to_string()
            })
        );
        assert!(!form.submitting);
        assert!(store.is_empty());
    }
}
