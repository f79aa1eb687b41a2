//! Signup form validation.
//!
//! Mirrors the schema the account-creation page enforces before calling the
//! account service: this is the browser-facing subset of the API contract
//! (including email format, which the JSON endpoint deliberately does not
//! check).

use serde::Deserialize;
use validator::Validate;

use crate::services::account::CreateAccountRequest;

/// Fields submitted by the account-creation page, checked in declaration
/// order so the first failing rule is the one shown inline.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupForm {
    /// Display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
    /// Password confirmation.
    #[validate(
        length(min = 6, message = "Confirm Password must be at least 6 characters long"),
        must_match(other = "password", message = "Passwords must match")
    )]
    pub confirm_password: String,
}

/// Field order for inline error display.
const FIELD_ORDER: [&str; 4] = ["name", "email", "password", "confirm_password"];

/// First validation error for the form, if any.
#[must_use]
pub fn first_error(form: &SignupForm) -> Option<String> {
    let Err(errors) = form.validate() else {
        return None;
    };
    let by_field = errors.field_errors();
    for field in FIELD_ORDER {
        if let Some(messages) = by_field.get(field) {
            if let Some(error) = messages.first() {
                return Some(
                    error
                        .message
                        .as_ref()
                        .map_or_else(|| "Invalid input".to_string(), |message| message.to_string()),
                );
            }
        }
    }
    Some("Invalid input".to_string())
}

impl From<SignupForm> for CreateAccountRequest {
    fn from(form: SignupForm) -> Self {
        Self {
            name: form.name,
            email: form.email,
            password: form.password,
            confirm_password: form.confirm_password,
        }
    }
}
