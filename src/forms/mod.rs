//! Form payloads and validation.

pub mod account;
pub mod invoice;

pub use account::SignupForm;
pub use invoice::{FieldErrors, InvoiceForm, ValidatedInvoice};
