//! Invoice action handlers.
//!
//! Each mutation runs to completion: validate, one store call, view-cache
//! invalidation, then redirect. Store failures on mutations are logged and
//! swallowed; the redirect and invalidation still happen (preserved behavior
//! of the flow this replaces).

use askama::Template;
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_htmx::HxRequest;
use chrono::Utc;

use crate::error::AppError;
use crate::forms::invoice::{validate, FieldErrors, InvoiceForm};
use crate::models::Invoice;
use crate::state::AppState;

/// View path invalidated after every invoice mutation.
pub const INVOICES_PATH: &str = "/dashboard/invoices";

#[derive(Template)]
#[template(path = "invoices/index.html")]
struct InvoiceIndexTemplate {
    invoices: Vec<Invoice>,
}

#[derive(Template)]
#[template(path = "invoices/create.html")]
struct CreateInvoiceTemplate {
    form: InvoiceForm,
    customer_error: Option<String>,
    amount_error: Option<String>,
    status_error: Option<String>,
    message: Option<String>,
}

#[derive(Template)]
#[template(path = "invoices/edit.html")]
struct EditInvoiceTemplate {
    id: String,
    form: InvoiceForm,
    customer_error: Option<String>,
    amount_error: Option<String>,
    status_error: Option<String>,
    message: Option<String>,
}

fn first_owned(errors: &FieldErrors, field: &str) -> Option<String> {
    errors.first(field).map(str::to_string)
}

/// Invoice list page.
///
/// Serves a weak ETag derived from the view-cache generation; a matching
/// `If-None-Match` short-circuits to `304 Not Modified` until the next
/// mutation invalidates the view.
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, AppError> {
    let generation = state.view_cache().generation(INVOICES_PATH);
    let etag = format!("W/\"invoices-{generation}\"");

    let if_none_match = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok());
    if if_none_match == Some(etag.as_str()) {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    let invoices = state.invoices().list().await?;
    let html = InvoiceIndexTemplate { invoices }.render()?;
    Ok(([(header::ETAG, etag)], Html(html)).into_response())
}

/// Empty invoice creation form.
pub async fn create_form() -> Result<Response, AppError> {
    let html = CreateInvoiceTemplate {
        form: InvoiceForm::default(),
        customer_error: None,
        amount_error: None,
        status_error: None,
        message: None,
    }
    .render()?;
    Ok(Html(html).into_response())
}

/// Create an invoice from submitted form fields.
///
/// Validation failures re-render the form with field errors and perform no
/// store call. The creation date is the current UTC calendar date.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<InvoiceForm>,
) -> Result<Response, AppError> {
    let validated = match validate(&form) {
        Ok(validated) => validated,
        Err(errors) => {
            let html = CreateInvoiceTemplate {
                customer_error: first_owned(&errors, "customer_id"),
                amount_error: first_owned(&errors, "amount"),
                status_error: first_owned(&errors, "status"),
                message: Some("Missing fields, Failed to create the invoice".to_string()),
                form,
            }
            .render()?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response());
        }
    };

    let date = Utc::now().date_naive();
    if let Err(err) = state.invoices().insert(&validated, date).await {
        tracing::error!(error = %err, customer_id = %validated.customer_id, "failed to create invoice");
    }

    state.view_cache().invalidate(INVOICES_PATH);
    Ok(Redirect::to(INVOICES_PATH).into_response())
}

/// Invoice edit form, prefilled from the stored record.
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let invoice = state.invoices().get(&id).await?.ok_or(AppError::NotFound)?;

    let form = InvoiceForm {
        customer_id: Some(invoice.customer_id),
        amount: Some(format!("{}.{:02}", invoice.amount / 100, invoice.amount % 100)),
        status: Some(invoice.status.to_string()),
    };
    let html = EditInvoiceTemplate {
        id: invoice.id,
        form,
        customer_error: None,
        amount_error: None,
        status_error: None,
        message: None,
    }
    .render()?;
    Ok(Html(html).into_response())
}

/// Update all mutable fields of an invoice (the date stays untouched).
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<InvoiceForm>,
) -> Result<Response, AppError> {
    let validated = match validate(&form) {
        Ok(validated) => validated,
        Err(errors) => {
            let html = EditInvoiceTemplate {
                id,
                customer_error: first_owned(&errors, "customer_id"),
                amount_error: first_owned(&errors, "amount"),
                status_error: first_owned(&errors, "status"),
                message: Some("Missing fields, Failed to update the invoice".to_string()),
                form,
            }
            .render()?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response());
        }
    };

    if let Err(err) = state.invoices().update(&id, &validated).await {
        tracing::error!(error = %err, invoice_id = %id, "failed to update invoice");
    }

    state.view_cache().invalidate(INVOICES_PATH);
    Ok(Redirect::to(INVOICES_PATH).into_response())
}

/// Delete an invoice by id.
///
/// Completes (and still invalidates the list view) even when the id does not
/// exist or the store call fails. HTMX requests get an empty `200 OK` so the
/// row swap removes the entry; plain form posts are redirected to the list.
pub async fn delete(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Path(id): Path<String>,
) -> Response {
    if let Err(err) = state.invoices().delete(&id).await {
        tracing::error!(error = %err, invoice_id = %id, "failed to delete invoice");
    }

    state.view_cache().invalidate(INVOICES_PATH);

    if is_htmx {
        StatusCode::OK.into_response()
    } else {
        Redirect::to(INVOICES_PATH).into_response()
    }
}
