//! Acme Dashboard - a server-rendered invoice dashboard.
//!
//! Thin axum handlers over form validation and single-statement persistence:
//! invoices are created, updated, and deleted through form-backed actions,
//! and accounts are created through a JSON endpoint backed by the same
//! account service as the signup page.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cache;
pub mod config;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

pub use cache::{InMemoryViewCache, ViewCache};
pub use config::AppConfig;
pub use error::AppError;
pub use routes::router;
pub use state::AppState;
