//! Contact form validation.
//!
//! All checks run on every submit so the user sees every problem at once.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::sync::LazyLock;

use regex::Regex;

pub const NAME_REQUIRED: &str = "Please enter your name.";
pub const EMAIL_REQUIRED: &str = "Please enter your email.";
pub const EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const MESSAGE_REQUIRED: &str = "Please enter a message.";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Per-field error messages; `None` means the field is fine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

/// Validate trimmed field values.
pub fn validate_contact(name: &str, email: &str, message: &str) -> ContactErrors {
    let email = email.trim();
    ContactErrors {
        name: name.trim().is_empty().then_some(NAME_REQUIRED),
        email: if email.is_empty() {
            Some(EMAIL_REQUIRED)
        } else if !is_valid_email(email) {
            Some(EMAIL_INVALID)
        } else {
            None
        },
        message: message.trim().is_empty().then_some(MESSAGE_REQUIRED),
    }
}
