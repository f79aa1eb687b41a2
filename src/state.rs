//! Application state.

use std::sync::Arc;

use crate::cache::ViewCache;
use crate::services::password::PasswordService;
use crate::store::{InvoiceStore, UserStore};

/// Shared state injected into every handler.
///
/// All persistence handles are constructed once at process start and passed
/// in explicitly; no module-level connections.
#[derive(Clone)]
pub struct AppState {
    invoices: Arc<dyn InvoiceStore>,
    users: Arc<dyn UserStore>,
    view_cache: Arc<dyn ViewCache>,
    passwords: Arc<PasswordService>,
}

impl AppState {
    /// Create new application state from its injected parts.
    #[must_use]
    pub fn new(
        invoices: Arc<dyn InvoiceStore>,
        users: Arc<dyn UserStore>,
        view_cache: Arc<dyn ViewCache>,
        passwords: PasswordService,
    ) -> Self {
        Self {
            invoices,
            users,
            view_cache,
            passwords: Arc::new(passwords),
        }
    }

    /// Invoice store handle.
    #[must_use]
    pub fn invoices(&self) -> &dyn InvoiceStore {
        &*self.invoices
    }

    /// User store handle.
    #[must_use]
    pub fn users(&self) -> &dyn UserStore {
        &*self.users
    }

    /// View cache handle.
    #[must_use]
    pub fn view_cache(&self) -> &dyn ViewCache {
        &*self.view_cache
    }

    /// Password hashing service.
    #[must_use]
    pub fn passwords(&self) -> &PasswordService {
        &self.passwords
    }
}
