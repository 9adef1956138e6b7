//! # Sign-in / sign-up form state
//!
//! [`FormState`] is everything the auth form shows, as plain data with pure
//! transitions, so the whole flow can be exercised without a renderer:
//!
//! | Transition | Effect |
//! |------------|--------|
//! | [`update_field`](FormState::update_field) | Overwrite one input. No validation. |
//! | [`toggle_mode`](FormState::toggle_mode) | Flip login/signup and reset everything else. |
//! | [`toggle_visibility`](FormState::toggle_visibility) | Show or hide a password input. |
//! | [`begin_submit`](FormState::begin_submit) | Validate; on success clear errors, mark submitting, hand back the [`Credentials`] to send. |
//! | [`finish_submit`](FormState::finish_submit) | Read the API outcome, set the general error or report success, stop submitting. |
//!
//! Field errors and the general error are separate slots: a server rejection
//! leaves field messages alone, and a validation failure leaves the banner alone.

use std::str::FromStr;

use api::{ApiResult, AuthClient, GENERIC_ERROR};
use serde_json::Value;

use crate::validation;

/// General error when the server refuses without saying why.
pub const AUTH_FAILED: &str = "Authentication failed";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome Back",
            AuthMode::Signup => "Create Account",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign in to continue",
            AuthMode::Signup => "Sign up to get started",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign In",
            AuthMode::Signup => "Create Account",
        }
    }

    pub fn busy_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Signing In...",
            AuthMode::Signup => "Creating Account...",
        }
    }

    /// Prompt next to the mode switch, and the switch's own label.
    pub fn switch_prompt(self) -> (&'static str, &'static str) {
        match self {
            AuthMode::Login => ("Don't have an account?", "Sign up"),
            AuthMode::Signup => ("Already have an account?", "Sign in"),
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            AuthMode::Login => "Login successful!",
            AuthMode::Signup => "Signup successful!",
        }
    }
}

/// The four form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// The input's `name` attribute.
    pub fn input_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "password" => Ok(Field::Password),
            "confirmPassword" => Ok(Field::ConfirmPassword),
            other => Err(format!("Unknown form field: {other}")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        }
    }
}

/// Validation message per field; `None` means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Password => self.password.as_deref(),
            Field::ConfirmPassword => self.confirm_password.as_deref(),
        }
    }

    pub fn has_errors(&self) -> bool {
        [
            &self.name,
            &self.email,
            &self.password,
            &self.confirm_password,
        ]
        .iter()
        .any(|e| e.is_some())
    }
}

/// What gets sent to the API. The confirmation never leaves the form.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    Login {
        email: String,
        password: String,
    },
    Signup {
        name: String,
        email: String,
        password: String,
    },
}

impl Credentials {
    pub fn email(&self) -> &str {
        match self {
            Credentials::Login { email, .. } | Credentials::Signup { email, .. } => email,
        }
    }

    /// Call `login` or `signup` on the client.
    pub async fn submit_with(&self, client: &AuthClient) -> ApiResult {
        match self {
            Credentials::Login { email, password } => client.login(email, password).await,
            Credentials::Signup {
                name,
                email,
                password,
            } => client.signup(name, email, password).await,
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Login { email, .. } => f
                .debug_struct("Login")
                .field("email", email)
                .finish_non_exhaustive(),
            Credentials::Signup { name, email, .. } => f
                .debug_struct("Signup")
                .field("name", name)
                .field("email", email)
                .finish_non_exhaustive(),
        }
    }
}

/// How a submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Authenticated {
        token: Option<String>,
        acknowledgment: String,
    },
    Rejected {
        message: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub mode: AuthMode,
    pub fields: FormFields,
    pub errors: FieldErrors,
    pub general_error: Option<String>,
    pub submitting: bool,
    pub show_password: bool,
    pub show_confirm_password: bool,
}

impl FormState {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.slot(field) = value.into();
    }

    pub fn toggle_mode(&mut self) {
        *self = Self::new(self.mode.toggled());
    }

    /// Flip the visibility of a password input. Other fields are always visible.
    pub fn toggle_visibility(&mut self, field: Field) {
        match field {
            Field::Password => self.show_password = !self.show_password,
            Field::ConfirmPassword => self.show_confirm_password = !self.show_confirm_password,
            Field::Name | Field::Email => {}
        }
    }

    pub fn is_visible(&self, field: Field) -> bool {
        match field {
            Field::Password => self.show_password,
            Field::ConfirmPassword => self.show_confirm_password,
            Field::Name | Field::Email => true,
        }
    }

    pub fn validate(&self) -> FieldErrors {
        validation::validate(self.mode, &self.fields)
    }

    /// Validate and, if everything passes, enter the submitting state.
    ///
    /// On `Err` the field errors are stored and nothing else changes.
    pub fn begin_submit(&mut self) -> Result<Credentials, FieldErrors> {
        let errors = self.validate();
        if errors.has_errors() {
            self.errors = errors.clone();
            return Err(errors);
        }

        self.errors = FieldErrors::default();
        self.general_error = None;
        self.submitting = true;

        let fields = &self.fields;
        Ok(match self.mode {
            AuthMode::Login => Credentials::Login {
                email: fields.email.clone(),
                password: fields.password.clone(),
            },
            AuthMode::Signup => Credentials::Signup {
                name: fields.name.clone(),
                email: fields.email.clone(),
                password: fields.password.clone(),
            },
        })
    }

    /// Apply the API's answer to a submission started by [`begin_submit`](Self::begin_submit).
    pub fn finish_submit(&mut self, result: &ApiResult) -> SubmitOutcome {
        self.submitting = false;

        if result.is_authenticated() {
            return SubmitOutcome::Authenticated {
                token: result.token().map(str::to_string),
                acknowledgment: self.mode.success_message().to_string(),
            };
        }

        let message = match result {
            // Nothing to read a message from.
            ApiResult::Success { data: Value::Null } => GENERIC_ERROR,
            ApiResult::Success { .. } => result.server_message().unwrap_or(AUTH_FAILED),
            ApiResult::Failure {
                rejection: Some(rejection),
                ..
            } => rejection.message.as_deref().unwrap_or(AUTH_FAILED),
            ApiResult::Failure {
                error,
                rejection: None,
            } => error.as_str(),
        }
        .to_string();

        self.general_error = Some(message.clone());
        SubmitOutcome::Rejected { message }
    }
}
