//! Domain models.

pub mod invoice;
pub mod user;

pub use invoice::{Invoice, InvoiceStatus, ParseStatusError};
pub use user::{NewUser, User};
