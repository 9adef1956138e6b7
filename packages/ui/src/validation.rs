//! Field validation rules for the sign-in / sign-up form.
//!
//! Each rule returns `None` when the value is acceptable, or the message shown
//! under the field. Password checks run in a fixed order and stop at the first
//! failure.

use std::sync::LazyLock;

use regex::Regex;

use crate::form::{AuthMode, FieldErrors, FormFields};

pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long";
pub const PASSWORD_NO_LETTER: &str = "Password must contain at least one letter";
pub const PASSWORD_NO_DIGIT: &str = "Password must contain at least one number";
pub const PASSWORD_NO_SPECIAL: &str = "Password must contain at least one special character";
pub const NAME_TOO_SHORT: &str = "Name must be at least 3 characters long";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match";

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_NAME_LEN: usize = 3;

/// Characters that satisfy the "special character" rule.
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub fn validate_email(email: &str) -> Option<&'static str> {
    (!EMAIL_RE.is_match(email)).then_some(INVALID_EMAIL)
}

/// Check `password` against the length, letter, digit and special-character
/// rules, in that order.
///
/// Length counts Unicode scalar values, so `"😀😀😀😀a1!"` is seven characters
/// and too short. A browser's `String.length` counts UTF-16 code units and
/// would see eleven.
pub fn validate_password(password: &str) -> Option<&'static str> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Some(PASSWORD_TOO_SHORT);
    }
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Some(PASSWORD_NO_LETTER);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some(PASSWORD_NO_DIGIT);
    }
    if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        return Some(PASSWORD_NO_SPECIAL);
    }
    None
}

pub fn validate_name(name: &str) -> Option<&'static str> {
    (name.chars().count() < MIN_NAME_LEN).then_some(NAME_TOO_SHORT)
}

pub fn validate_confirmation(password: &str, confirm_password: &str) -> Option<&'static str> {
    (password != confirm_password).then_some(PASSWORDS_DIFFER)
}

/// Validate every field that applies to `mode`.
///
/// Login mode never looks at the name or the confirmation.
pub fn validate(mode: AuthMode, fields: &FormFields) -> FieldErrors {
    let mut errors = FieldErrors {
        email: validate_email(&fields.email).map(str::to_string),
        password: validate_password(&fields.password).map(str::to_string),
        ..FieldErrors::default()
    };

    if mode == AuthMode::Signup {
        errors.name = validate_name(&fields.name).map(str::to_string);
        errors.confirm_password =
            validate_confirmation(&fields.password, &fields.confirm_password).map(str::to_string);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert_eq!(validate_email("a@b.c"), None);
        assert_eq!(validate_email("ada.lovelace@mail.example.org"), None);
        assert_eq!(validate_email("a@b"), Some(INVALID_EMAIL));
        assert_eq!(validate_email("a.com"), Some(INVALID_EMAIL));
        assert_eq!(validate_email(""), Some(INVALID_EMAIL));
        assert_eq!(validate_email("a b@c.d"), Some(INVALID_EMAIL));
        assert_eq!(validate_email("a@@b.c"), Some(INVALID_EMAIL));
    }

    #[test]
    fn test_short_password_always_reports_length() {
        for password in ["", "a", "aB3!", "Ab1!Ab1", "!!!!!!!", "1234567"] {
            assert_eq!(validate_password(password), Some(PASSWORD_TOO_SHORT), "{password:?}");
        }
    }

    #[test]
    fn test_password_rules_in_order() {
        assert_eq!(validate_password("12345678!"), Some(PASSWORD_NO_LETTER));
        assert_eq!(validate_password("abcdefgh!"), Some(PASSWORD_NO_DIGIT));
        assert_eq!(validate_password("Password!!"), Some(PASSWORD_NO_DIGIT));
        assert_eq!(validate_password("abcd1234"), Some(PASSWORD_NO_SPECIAL));
        assert_eq!(validate_password("abcd1234-"), Some(PASSWORD_NO_SPECIAL));
        assert_eq!(validate_password("abcd1234!"), None);
    }

    #[test]
    fn test_every_special_char_is_accepted() {
        for c in SPECIAL_CHARS.chars() {
            let password = format!("abcd1234{c}");
            assert_eq!(validate_password(&password), None, "{c:?}");
        }
    }

    #[test]
    fn test_password_length_counts_characters() {
        // Eight characters, more than eight bytes
        assert_eq!(validate_password("ééééé1a!"), None);
        assert_eq!(validate_password("éééé1a!"), Some(PASSWORD_TOO_SHORT));
        // Eleven UTF-16 code units, seven characters
        assert_eq!(validate_password("😀😀😀😀a1!"), Some(PASSWORD_TOO_SHORT));
        assert_eq!(validate_password("😀😀😀😀😀a1!"), None);
    }

    #[test]
    fn test_name_length() {
        assert_eq!(validate_name("Al"), Some(NAME_TOO_SHORT));
        assert_eq!(validate_name("Ada"), None);
    }

    #[test]
    fn test_login_ignores_signup_fields() {
        let fields = FormFields {
            name: String::new(),
            email: "a@b.c".to_string(),
            password: "abcd1234!".to_string(),
            confirm_password: "something else".to_string(),
        };
        assert!(!validate(AuthMode::Login, &fields).has_errors());

        let errors = validate(AuthMode::Signup, &fields);
        assert_eq!(errors.name.as_deref(), Some(NAME_TOO_SHORT));
        assert_eq!(errors.confirm_password.as_deref(), Some(PASSWORDS_DIFFER));
        assert!(errors.email.is_none());
        assert!(errors.password.is_none());
    }

    #[test]
    fn test_all_fields_reported_together() {
        let fields = FormFields {
            name: "Al".to_string(),
            email: "nope".to_string(),
            password: "short".to_string(),
            confirm_password: "other".to_string(),
        };
        let errors = validate(AuthMode::Signup, &fields);
        assert_eq!(errors.email.as_deref(), Some(INVALID_EMAIL));
        assert_eq!(errors.password.as_deref(), Some(PASSWORD_TOO_SHORT));
        assert_eq!(errors.name.as_deref(), Some(NAME_TOO_SHORT));
        assert_eq!(errors.confirm_password.as_deref(), Some(PASSWORDS_DIFFER));
    }
}
