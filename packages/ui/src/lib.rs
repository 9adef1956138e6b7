//! This crate contains the auth form, its state machine and the shared auth context.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const AUTH_CSS: Asset = asset!("/assets/auth.css");

pub mod form;
pub use form::{AuthMode, Credentials, Field, FieldErrors, FormFields, FormState, SubmitOutcome};

pub mod validation;

mod platform;
pub use platform::make_token_store;

mod auth;
pub use auth::{
    load_profile, use_auth, use_auth_client, use_client_config, AuthProvider, AuthState,
    LogoutButton,
};

mod auth_form;
pub use auth_form::AuthForm;

pub mod activity_log;
pub use activity_log::{log_activity, use_activity_log, ActivityEntry, ActivityLog, AuthEvent};

mod session_activity;
pub use session_activity::{SessionActivity, SessionActivityBadge};

pub mod submit;
pub use submit::{submit_form, FormAccess};
