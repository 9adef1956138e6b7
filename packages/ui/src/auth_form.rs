//! Sign-in / sign-up form component.
//!
//! Rendering only: every decision is made by [`FormState`] transitions, and
//! network calls go through the [`api::AuthClient`] from context.

use dioxus::prelude::*;

use crate::activity_log::{log_activity, use_activity_log, AuthEvent};
use crate::auth::{use_auth, use_auth_client, AuthState};
use crate::form::{AuthMode, Field, FormState, SubmitOutcome};
use crate::submit::submit_form;
use crate::icons::{FaCircleExclamation, FaEnvelope, FaEye, FaEyeSlash, FaLock, FaUser};
use crate::Icon;

use crate::AUTH_CSS;

/// Login/signup form. Calls `on_authenticated` once the server accepts the credentials.
#[component]
pub fn AuthForm(
    #[props(default)] initial_mode: AuthMode,
    #[props(default)] on_authenticated: EventHandler<()>,
) -> Element {
    let client = use_auth_client();
    let mut auth_state = use_auth();
    let mut log = use_activity_log();
    let mut form = use_signal(|| FormState::new(initial_mode));

    let handle_submit = move |_| {
        let client = client.clone();
        spawn(async move {
            match submit_form(&mut form, &client).await {
                Some(SubmitOutcome::Authenticated { acknowledgment, .. }) => {
                    log_activity(&mut log, credentials_event(form().mode, &acknowledgment));
                    auth_state.set(AuthState::signed_in(None));
                    acknowledge(&acknowledgment);
                    on_authenticated.call(());
                }
                Some(SubmitOutcome::Rejected { message }) => {
                    log_activity(&mut log, AuthEvent::Rejected { reason: message });
                }
                None => {}
            }
        });
    };

    let state = form();
    let mode = state.mode;
    let signup = mode == AuthMode::Signup;
    let (switch_prompt, switch_action) = mode.switch_prompt();

    rsx! {
        document::Stylesheet { href: AUTH_CSS }

        div {
            class: "auth-page",
            div {
                class: "auth-card",

                div {
                    class: "auth-header",
                    h2 { "{mode.title()}" }
                    p { "{mode.subtitle()}" }
                }

                div {
                    class: "auth-body",

                    if let Some(err) = state.general_error.clone() {
                        div {
                            class: "auth-banner",
                            role: "alert",
                            Icon { icon: FaCircleExclamation, width: 16, height: 16 }
                            p { "{err}" }
                        }
                    }

                    if signup {
                        TextField {
                            field: Field::Name,
                            label: "Full Name",
                            input_type: "text",
                            placeholder: "John Doe",
                            value: state.fields.name.clone(),
                            error: state.errors.name.clone(),
                            oninput: move |v: String| form.write().update_field(Field::Name, v),
                            Icon { icon: FaUser, width: 14, height: 14 }
                        }
                    }

                    TextField {
                        field: Field::Email,
                        label: "Email Address",
                        input_type: "email",
                        placeholder: "you@example.com",
                        value: state.fields.email.clone(),
                        error: state.errors.email.clone(),
                        oninput: move |v: String| form.write().update_field(Field::Email, v),
                        Icon { icon: FaEnvelope, width: 14, height: 14 }
                    }

                    PasswordField {
                        field: Field::Password,
                        label: "Password",
                        value: state.fields.password.clone(),
                        error: state.errors.password.clone(),
                        visible: state.show_password,
                        oninput: move |v: String| form.write().update_field(Field::Password, v),
                        ontoggle: move |_| form.write().toggle_visibility(Field::Password),
                    }

                    if signup {
                        PasswordField {
                            field: Field::ConfirmPassword,
                            label: "Confirm Password",
                            value: state.fields.confirm_password.clone(),
                            error: state.errors.confirm_password.clone(),
                            visible: state.show_confirm_password,
                            oninput: move |v: String| form.write().update_field(Field::ConfirmPassword, v),
                            ontoggle: move |_| form.write().toggle_visibility(Field::ConfirmPassword),
                        }
                    }

                    button {
                        class: "auth-submit",
                        r#type: "button",
                        disabled: state.submitting,
                        onclick: handle_submit,
                        if state.submitting {
                            span { class: "auth-spinner" }
                            "{mode.busy_label()}"
                        } else {
                            "{mode.submit_label()}"
                        }
                    }
                }

                div {
                    class: "auth-footer",
                    div { class: "auth-divider", span { "Or" } }
                    p {
                        "{switch_prompt}"
                        button {
                            class: "auth-switch",
                            r#type: "button",
                            disabled: state.submitting,
                            onclick: move |_| form.write().toggle_mode(),
                            "{switch_action}"
                        }
                    }
                }
            }
        }
    }
}

/// Labelled input with a leading icon and an inline error.
#[component]
fn TextField(
    field: Field,
    label: String,
    input_type: String,
    placeholder: String,
    value: String,
    error: Option<String>,
    oninput: EventHandler<String>,
    children: Element,
) -> Element {
    let name = field.input_name();

    rsx! {
        div {
            class: "auth-field",
            label { r#for: "{name}", "{label}" }
            div {
                class: "auth-input-wrap",
                span { class: "auth-input-icon", {children} }
                input {
                    id: "{name}",
                    name: "{name}",
                    r#type: "{input_type}",
                    class: input_class(error.is_some()),
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |evt: FormEvent| oninput.call(evt.value()),
                }
            }
            if let Some(err) = &error {
                p { class: "auth-field-error", "{err}" }
            }
        }
    }
}

/// Password input with a show/hide toggle.
#[component]
fn PasswordField(
    field: Field,
    label: String,
    value: String,
    error: Option<String>,
    visible: bool,
    oninput: EventHandler<String>,
    ontoggle: EventHandler<()>,
) -> Element {
    let name = field.input_name();

    rsx! {
        div {
            class: "auth-field",
            label { r#for: "{name}", "{label}" }
            div {
                class: "auth-input-wrap",
                span {
                    class: "auth-input-icon",
                    Icon { icon: FaLock, width: 14, height: 14 }
                }
                input {
                    id: "{name}",
                    name: "{name}",
                    r#type: if visible { "text" } else { "password" },
                    class: input_class(error.is_some()),
                    placeholder: "••••••••",
                    value: "{value}",
                    oninput: move |evt: FormEvent| oninput.call(evt.value()),
                }
                button {
                    class: "auth-visibility",
                    r#type: "button",
                    title: if visible { "Hide password" } else { "Show password" },
                    onclick: move |_| ontoggle.call(()),
                    if visible {
                        Icon { icon: FaEyeSlash, width: 14, height: 14 }
                    } else {
                        Icon { icon: FaEye, width: 14, height: 14 }
                    }
                }
            }
            if let Some(err) = &error {
                p { class: "auth-field-error", "{err}" }
            }
        }
    }
}

fn input_class(invalid: bool) -> &'static str {
    if invalid {
        "auth-input invalid"
    } else {
        "auth-input"
    }
}

/// Activity entry for an accepted submission in `mode`.
fn credentials_event(mode: AuthMode, acknowledgment: &str) -> AuthEvent {
    match mode {
        AuthMode::Login => AuthEvent::SignedIn {
            note: acknowledgment.to_string(),
        },
        AuthMode::Signup => AuthEvent::SignedUp {
            note: acknowledgment.to_string(),
        },
    }
}

/// Tell the user the sign-in worked before navigating away.
fn acknowledge(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                tracing::warn!("alert failed: {:?}", e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_class_marks_invalid_fields() {
        assert_eq!(input_class(true), "auth-input invalid");
        assert_eq!(input_class(false), "auth-input");
    }

    #[test]
    fn test_accepted_submission_event_follows_mode() {
        assert_eq!(
            credentials_event(AuthMode::Login, "Login successful!"),
            AuthEvent::SignedIn {
                note: "Login successful!".to_string()
            }
        );
        assert!(matches!(
            credentials_event(AuthMode::Signup, "Signup successful!"),
            AuthEvent::SignedUp { .. }
        ));
    }
}
