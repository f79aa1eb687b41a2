//! Application services.

pub mod account;
pub mod password;

pub use account::{AccountOutcome, CreateAccountRequest};
pub use password::{PasswordError, PasswordService};
