//! Postgres store implementations.
//!
//! Single parameterized statements against a shared [`PgPool`]; rows are
//! mapped to domain types by hand.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::forms::ValidatedInvoice;
use crate::models::{Invoice, InvoiceStatus, NewUser, User};

use super::{InvoiceStore, StoreError, UserStore};

/// Invoice store backed by Postgres.
#[derive(Debug, Clone)]
pub struct PgInvoiceStore {
    pool: PgPool,
}

impl PgInvoiceStore {
    /// Create a new invoice store on the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_invoice(row: &PgRow) -> Result<Invoice, sqlx::Error> {
    let status: String = row.try_get("status")?;
    let status = status
        .parse::<InvoiceStatus>()
        .map_err(|err| sqlx::Error::ColumnDecode {
            index: "status".to_string(),
            source: Box::new(err),
        })?;

    Ok(Invoice {
        id: row.try_get("id")?,
        customer_id: row.try_get("customer_id")?,
        amount: row.try_get("amount")?,
        status,
        date: row.try_get("date")?,
    })
}

#[async_trait]
impl InvoiceStore for PgInvoiceStore {
    async fn list(&self) -> Result<Vec<Invoice>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, customer_id, amount, status, date FROM invoices ORDER BY date DESC, id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| row_to_invoice(row).map_err(StoreError::from))
            .collect()
    }

    async fn get(&self, id: &str) -> Result<Option<Invoice>, StoreError> {
        let row = sqlx::query("SELECT id, customer_id, amount, status, date FROM invoices WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_invoice).transpose().map_err(StoreError::from)
    }

    async fn insert(&self, invoice: &ValidatedInvoice, date: NaiveDate) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO invoices (id, customer_id, amount, status, date) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&invoice.customer_id)
        .bind(invoice.amount_in_cents)
        .bind(invoice.status.as_str())
        .bind(date)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update(&self, id: &str, invoice: &ValidatedInvoice) -> Result<(), StoreError> {
        sqlx::query("UPDATE invoices SET customer_id = $1, amount = $2, status = $3 WHERE id = $4")
            .bind(&invoice.customer_id)
            .bind(invoice.amount_in_cents)
            .bind(invoice.status.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

/// User store backed by Postgres.
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    /// Create a new user store on the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, user: &NewUser) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO users (name, email, password) VALUES ($1, $2, $3)")
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password)
            .execute(&self.pool)
            .await
            .map_err(|err| {
                if err
                    .as_database_error()
                    .is_some_and(|db| db.is_unique_violation())
                {
                    StoreError::UniqueViolation
                } else {
                    StoreError::Database(err)
                }
            })?;
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query("SELECT id, name, email, password FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| {
            Ok(User {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
                email: row.try_get("email")?,
                password: row.try_get("password")?,
            })
        })
        .transpose()
        .map_err(StoreError::Database)
    }
}
