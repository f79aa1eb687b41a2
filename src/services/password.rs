//! Password hashing service.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, Params,
};
use thiserror::Error;

/// Error returned when hashing a password fails.
#[derive(Debug, Error)]
#[error("failed to hash password: {0}")]
pub struct PasswordError(#[from] argon2::password_hash::Error);

/// Argon2id password hashing and verification.
#[derive(Debug, Clone)]
pub struct PasswordService {
    /// Argon2 hasher configuration.
    argon2: Argon2<'static>,
}

impl PasswordService {
    /// Create a new password service with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Create a new password service with custom parameters.
    ///
    /// # Panics
    ///
    /// Panics if the parameters are invalid (which should not happen with valid inputs).
    #[must_use]
    pub fn with_params(
        memory_cost: u32,
        time_cost: u32,
        parallelism: u32,
        output_len: Option<usize>,
    ) -> Self {
        let params = Params::new(memory_cost, time_cost, parallelism, output_len)
            .expect("Invalid argon2 parameters");
        let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);
        Self { argon2 }
    }

    /// Hash a password with a freshly generated salt.
    ///
    /// # Errors
    ///
    /// Returns an error if hashing fails.
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self.argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(hash.to_string())
    }

    /// Verify a password against a stored hash.
    ///
    /// An unparseable hash verifies as `false` rather than erroring.
    #[must_use]
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };
        self.argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new()
    }
}
