//! Invoice mutation validation.
//!
//! A pure function from raw form strings to either a validated, typed record
//! or an ordered map of field-level error messages. Validation failures
//! never reach the store.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::models::InvoiceStatus;

/// Raw invoice form fields, as submitted.
///
/// Every field is optional so that missing form entries surface as
/// validation errors rather than deserialization failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoiceForm {
    /// Selected customer identifier.
    pub customer_id: Option<String>,
    /// Amount in decimal dollars, e.g. `10.50`.
    pub amount: Option<String>,
    /// Invoice status, `pending` or `paid`.
    pub status: Option<String>,
}

impl InvoiceForm {
    /// Customer id for re-rendering the form, empty when absent.
    #[must_use]
    pub fn customer_id_value(&self) -> &str {
        self.customer_id.as_deref().unwrap_or("")
    }

    /// Amount for re-rendering the form, empty when absent.
    #[must_use]
    pub fn amount_value(&self) -> &str {
        self.amount.as_deref().unwrap_or("")
    }

    /// Status for re-rendering the form, empty when absent.
    #[must_use]
    pub fn status_value(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }
}

/// A validated invoice mutation, ready for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInvoice {
    /// Customer identifier.
    pub customer_id: String,
    /// Amount converted to integer cents.
    pub amount_in_cents: i64,
    /// Parsed status.
    pub status: InvoiceStatus,
}

/// Ordered mapping from field name to human-readable error messages.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    /// Record an error message for a field.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    /// First error message for a field, if any.
    #[must_use]
    pub fn first(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(|messages| messages.first()).map(String::as_str)
    }

    /// All error messages for a field.
    #[must_use]
    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map_or(&[], Vec::as_slice)
    }

    /// Whether any field has errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Validate a raw invoice form.
///
/// Reports all failing fields at once; a successful result carries the
/// amount converted to integer cents.
///
/// # Errors
///
/// Returns the field error map when any field is missing or malformed.
pub fn validate(form: &InvoiceForm) -> Result<ValidatedInvoice, FieldErrors> {
    let mut errors = FieldErrors::default();

    let customer_id = match form.customer_id.as_deref() {
        Some(id) if !id.trim().is_empty() => Some(id.trim().to_string()),
        _ => {
            errors.push("customer_id", "Please select the customer id");
            None
        }
    };

    let amount_in_cents = match form
        .amount
        .as_deref()
        .and_then(|raw| raw.trim().parse::<f64>().ok())
    {
        Some(amount) if amount > 0.0 && amount.is_finite() => {
            let cents = (amount * 100.0).round() as i64;
            Some(cents)
        }
        _ => {
            errors.push("amount", "Please enter the amount greater than $0");
            None
        }
    };

    let status = match form.status.as_deref().map(str::parse::<InvoiceStatus>) {
        Some(Ok(status)) => Some(status),
        _ => {
            errors.push("status", "Please select an invoice status");
            None
        }
    };

    match (customer_id, amount_in_cents, status) {
        (Some(customer_id), Some(amount_in_cents), Some(status)) => Ok(ValidatedInvoice {
            customer_id,
            amount_in_cents,
            status,
        }),
        _ => Err(errors),
    }
}
