//! User model.

use serde::Serialize;

/// A persisted user account.
///
/// The `password` field always holds the Argon2id hash; plaintext passwords
/// are never stored or returned.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Unique identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address (unique at the store).
    pub email: String,
    /// Password hash.
    #[serde(skip_serializing)]
    pub password: String,
}

/// Fields required to insert a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Password hash (already hashed by the account service).
    pub password: String,
}
