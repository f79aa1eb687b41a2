//! HTTP request handlers.

pub mod accounts;
pub mod home;
pub mod invoices;
