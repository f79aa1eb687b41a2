//! In-memory store implementations.
//!
//! Used when no database URL is configured (zero-setup development) and by
//! the test suite. Semantics match the Postgres stores, including the
//! no-op behavior of update/delete on unknown ids.

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::forms::ValidatedInvoice;
use crate::models::{Invoice, NewUser, User};

use super::{InvoiceStore, StoreError, UserStore};

/// In-memory invoice store.
#[derive(Debug, Default)]
pub struct MemoryInvoiceStore {
    invoices: RwLock<Vec<Invoice>>,
}

impl MemoryInvoiceStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InvoiceStore for MemoryInvoiceStore {
    async fn list(&self) -> Result<Vec<Invoice>, StoreError> {
        let mut invoices = self.invoices.read().clone();
        invoices.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
        Ok(invoices)
    }

    async fn get(&self, id: &str) -> Result<Option<Invoice>, StoreError> {
        Ok(self.invoices.read().iter().find(|inv| inv.id == id).cloned())
    }

    async fn insert(&self, invoice: &ValidatedInvoice, date: NaiveDate) -> Result<(), StoreError> {
        self.invoices.write().push(Invoice {
            id: Uuid::new_v4().to_string(),
            customer_id: invoice.customer_id.clone(),
            amount: invoice.amount_in_cents,
            status: invoice.status,
            date,
        });
        Ok(())
    }

    async fn update(&self, id: &str, invoice: &ValidatedInvoice) -> Result<(), StoreError> {
        let mut invoices = self.invoices.write();
        if let Some(existing) = invoices.iter_mut().find(|inv| inv.id == id) {
            existing.customer_id = invoice.customer_id.clone();
            existing.amount = invoice.amount_in_cents;
            existing.status = invoice.status;
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.invoices.write().retain(|inv| inv.id != id);
        Ok(())
    }
}

/// In-memory user store with a uniqueness constraint on email.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, user: &NewUser) -> Result<(), StoreError> {
        let mut users = self.users.write();
        if users.iter().any(|existing| existing.email == user.email) {
            return Err(StoreError::UniqueViolation);
        }
        let id = i64::try_from(users.len()).unwrap_or(i64::MAX) + 1;
        users.push(User {
            id,
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
        });
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().iter().find(|user| user.email == email).cloned())
    }
}
