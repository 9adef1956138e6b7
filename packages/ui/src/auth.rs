//! Authentication context and hooks for the UI.

use api::{AuthClient, UserProfile};
use dioxus::prelude::*;
use store::ClientConfig;

use crate::activity_log::{log_activity, use_activity_log, AuthEvent};
use crate::platform::make_token_store;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserProfile>,
    /// Whether the session holds a token.
    pub signed_in: bool,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            signed_in: false,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn signed_out() -> Self {
        Self {
            user: None,
            signed_in: false,
            loading: false,
        }
    }

    pub fn signed_in(user: Option<UserProfile>) -> Self {
        Self {
            user,
            signed_in: true,
            loading: false,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the shared API client (and with it, the session).
pub fn use_auth_client() -> AuthClient {
    use_context::<AuthClient>()
}

/// Get the configuration the client was built from.
pub fn use_client_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Fetch the signed-in user's profile, if the server will tell us.
pub async fn load_profile(client: &AuthClient) -> Option<UserProfile> {
    let result = client.get_profile().await;
    let profile = result.data().and_then(UserProfile::from_response);
    if profile.is_none() {
        tracing::warn!("Profile unavailable for the current session");
    }
    profile
}

/// Provider component that owns the API client and authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(
    #[props(default = ClientConfig::from_env())] config: ClientConfig,
    children: Element,
) -> Element {
    use_context_provider(|| config.clone());
    let client = use_context_provider(|| {
        tracing::info!(base_url = %config.base_url, "Auth client ready");
        AuthClient::new(&config, make_token_store())
    });
    let mut auth_state = use_signal(AuthState::default);

    // Restore a session left in durable storage
    let _ = use_resource(move || {
        let client = client.clone();
        async move {
            if !client.session().is_authenticated() {
                auth_state.set(AuthState::signed_out());
                return;
            }
            let user = load_profile(&client).await;
            auth_state.set(AuthState::signed_in(user));
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
///
/// The local session is always cleared. If the server could not be told, the
/// failure lands in the activity log instead of blocking the sign-out.
#[component]
pub fn LogoutButton(
    #[props(default = "Sign out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    #[props(default)] on_logged_out: EventHandler<()>,
) -> Element {
    let client = use_auth_client();
    let mut auth_state = use_auth();
    let mut log = use_activity_log();
    let mut pending = use_signal(|| false);

    let onclick = move |_| {
        let client = client.clone();
        async move {
            pending.set(true);
            match client.logout().await {
                Ok(()) => log_activity(&mut log, AuthEvent::SignedOut),
                Err(e) => log_activity(
                    &mut log,
                    AuthEvent::SignOutUnconfirmed {
                        reason: e.to_string(),
                    },
                ),
            }
            auth_state.set(AuthState::signed_out());
            pending.set(false);
            on_logged_out.call(());
        }
    };

    rsx! {
        button {
            class: "{class}",
            disabled: pending(),
            onclick: onclick,
            "{label}"
        }
    }
}
