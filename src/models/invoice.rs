//! Invoice model.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invoice lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Awaiting payment.
    Pending,
    /// Payment received.
    Paid,
}

impl InvoiceStatus {
    /// Wire representation of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status string is not one of the two known values.
#[derive(Debug, Error)]
#[error("unknown invoice status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for InvoiceStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// A persisted invoice.
///
/// The amount is stored in integer cents to avoid floating-point rounding.
/// The date is set at creation time and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invoice {
    /// Unique identifier (UUID v4, generated at insert).
    pub id: String,
    /// Identifier of the customer the invoice belongs to.
    pub customer_id: String,
    /// Amount in integer cents.
    pub amount: i64,
    /// Current status.
    pub status: InvoiceStatus,
    /// Creation date (UTC calendar date).
    pub date: NaiveDate,
}

impl Invoice {
    /// Amount formatted as dollars for display, e.g. `$10.50`.
    #[must_use]
    pub fn amount_display(&self) -> String {
        format!("${}.{:02}", self.amount / 100, self.amount % 100)
    }
}
