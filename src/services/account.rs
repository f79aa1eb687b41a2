//! Account creation.
//!
//! Shared by the JSON endpoint and the signup page: validates presence and
//! password equality, hashes the password, inserts the user, and classifies
//! store failures into the response contract (409 on duplicate email, 500
//! otherwise). Email format is deliberately not checked here; only the
//! browser-facing form does that.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::models::NewUser;
use crate::services::password::PasswordService;
use crate::store::{StoreError, UserStore};

/// JSON payload for `POST /api/create-account`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Password (plaintext, hashed before storage).
    #[serde(default)]
    pub password: String,
    /// Password confirmation (compared at submission time only).
    #[serde(default)]
    pub confirm_password: String,
}

/// Response payload carrying a human-readable message.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Outcome message.
    pub message: String,
}

/// Outcome of an account-creation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountOutcome {
    /// HTTP status for the response.
    pub status: StatusCode,
    /// Human-readable message.
    pub message: String,
}

impl AccountOutcome {
    fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }
}

/// Create a new account.
///
/// All failures are folded into the outcome rather than propagated: the
/// contract surfaces a status and message for every case.
pub async fn create_account(
    users: &dyn UserStore,
    passwords: &PasswordService,
    request: CreateAccountRequest,
) -> AccountOutcome {
    if request.name.is_empty()
        || request.email.is_empty()
        || request.password.is_empty()
        || request.confirm_password.is_empty()
    {
        return AccountOutcome::new(StatusCode::BAD_REQUEST, "All fields are required");
    }

    if request.password != request.confirm_password {
        return AccountOutcome::new(StatusCode::BAD_REQUEST, "Passwords do not match");
    }

    let hash = match passwords.hash(&request.password) {
        Ok(hash) => hash,
        Err(err) => {
            tracing::error!(error = %err, "password hashing failed");
            return AccountOutcome::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create account",
            );
        }
    };

    let user = NewUser {
        name: request.name,
        email: request.email,
        password: hash,
    };

    match users.insert(&user).await {
        Ok(()) => {
            tracing::info!(email = %user.email, "account created");
            AccountOutcome::new(StatusCode::CREATED, "Account created successfully")
        }
        Err(StoreError::UniqueViolation) => {
            AccountOutcome::new(StatusCode::CONFLICT, "Email already exists")
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to create account");
            AccountOutcome::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create account",
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryUserStore;

    fn request(name: &str, email: &str, password: &str, confirm: &str) -> CreateAccountRequest {
        CreateAccountRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[tokio::test]
    async fn test_empty_fields_rejected() {
        let users = MemoryUserStore::new();
        let passwords = PasswordService::new();

        let outcome = create_account(
            &users,
            &passwords,
            request("", "ada@example.com", "secret123", "secret123"),
        )
        .await;

        assert_eq!(outcome.status, StatusCode::BAD_REQUEST);
        assert_eq!(outcome.message, "All fields are required");
        assert!(users.find_by_email("ada@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_password_mismatch_rejected() {
        let users = MemoryUserStore::new();
        let passwords = PasswordService::new();

        let outcome = create_account(
            &users,
            &passwords,
            request("Ada", "ada@example.com", "secret123", "different"),
        )
        .await;

        assert_eq!(outcome.status, StatusCode::BAD_REQUEST);
        assert_eq!(outcome.message, "Passwords do not match");
        assert!(users.find_by_email("ada@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_successful_creation_stores_hash() {
        let users = MemoryUserStore::new();
        let passwords = PasswordService::new();

        let outcome = create_account(
            &users,
            &passwords,
            request("Ada", "ada@example.com", "secret123", "secret123"),
        )
        .await;

        assert_eq!(outcome.status, StatusCode::CREATED);
        assert_eq!(outcome.message, "Account created successfully");

        let stored = users.find_by_email("ada@example.com").await.unwrap().unwrap();
        assert_ne!(stored.password, "secret123");
        assert!(passwords.verify("secret123", &stored.password));
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let users = MemoryUserStore::new();
        let passwords = PasswordService::new();

        let first = create_account(
            &users,
            &passwords,
            request("Ada", "ada@example.com", "secret123", "secret123"),
        )
        .await;
        assert_eq!(first.status, StatusCode::CREATED);

        let second = create_account(
            &users,
            &passwords,
            request("Other Ada", "ada@example.com", "different1", "different1"),
        )
        .await;
        assert_eq!(second.status, StatusCode::CONFLICT);
        assert_eq!(second.message, "Email already exists");
    }
}
