//! Persistence stores.
//!
//! The store handle is constructed once at process start and injected into
//! handlers through [`crate::state::AppState`]; handlers never reach for a
//! global connection. Two implementations exist: Postgres (production) and
//! in-memory (development without a database, and tests).

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::forms::ValidatedInvoice;
use crate::models::{Invoice, NewUser, User};

pub use memory::{MemoryInvoiceStore, MemoryUserStore};
pub use postgres::{PgInvoiceStore, PgUserStore};

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint was violated (duplicate email).
    #[error("unique constraint violated")]
    UniqueViolation,
    /// Any other database failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Invoice persistence operations.
///
/// Each operation is a single parameterized statement: no transactions, no
/// retries. Concurrent edits on the same id are last-write-wins.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// List all invoices, newest first.
    async fn list(&self) -> Result<Vec<Invoice>, StoreError>;

    /// Fetch a single invoice by id.
    async fn get(&self, id: &str) -> Result<Option<Invoice>, StoreError>;

    /// Insert a new invoice with the given creation date.
    async fn insert(&self, invoice: &ValidatedInvoice, date: NaiveDate) -> Result<(), StoreError>;

    /// Update the mutable fields of an invoice by id. The creation date is
    /// immutable. Updating a nonexistent id is a no-op.
    async fn update(&self, id: &str, invoice: &ValidatedInvoice) -> Result<(), StoreError>;

    /// Delete an invoice by id. Deleting a nonexistent id is a no-op.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// User persistence operations.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UniqueViolation`] when the email is taken.
    async fn insert(&self, user: &NewUser) -> Result<(), StoreError>;

    /// Look up a user by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
}
