//! Account creation and login handlers.

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};

use crate::error::AppError;
use crate::forms::account::{first_error, SignupForm};
use crate::handlers::invoices::INVOICES_PATH;
use crate::services::account::{create_account, CreateAccountRequest, MessageResponse};
use crate::state::AppState;

use serde::Deserialize;

#[derive(Template)]
#[template(path = "auth/register.html")]
struct RegisterTemplate {
    error: Option<String>,
}

#[derive(Template)]
#[template(path = "auth/login.html")]
struct LoginTemplate {
    error: Option<String>,
}

/// `POST /api/create-account`.
///
/// JSON contract: 201 on success, 400 on empty fields or password mismatch,
/// 409 on duplicate email, 500 on any other store failure. Missing JSON
/// fields default to empty strings so they hit the 400 path rather than a
/// deserialization rejection.
pub async fn create_account_api(
    State(state): State<AppState>,
    Json(request): Json<CreateAccountRequest>,
) -> (StatusCode, Json<MessageResponse>) {
    let outcome = create_account(state.users(), state.passwords(), request).await;
    (
        outcome.status,
        Json(MessageResponse {
            message: outcome.message,
        }),
    )
}

/// Account-creation page.
pub async fn register_form() -> Result<Response, AppError> {
    let html = RegisterTemplate { error: None }.render()?;
    Ok(Html(html).into_response())
}

/// Handle an account-creation form submission.
///
/// Runs the form schema first (the browser-side subset of the contract,
/// including email format); the first failing rule is shown inline and the
/// account service is not called. Otherwise the outcome message is shown
/// inline, or the user is sent to the login page on success.
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> Result<Response, AppError> {
    if let Some(error) = first_error(&form) {
        let html = RegisterTemplate { error: Some(error) }.render()?;
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response());
    }

    let outcome = create_account(state.users(), state.passwords(), form.into()).await;
    if outcome.status == StatusCode::CREATED {
        return Ok(Redirect::to("/login").into_response());
    }

    let html = RegisterTemplate {
        error: Some(outcome.message),
    }
    .render()?;
    Ok((outcome.status, Html(html)).into_response())
}

/// Login form fields.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// Email address.
    pub email: String,
    /// Password.
    pub password: String,
}

/// Login page.
pub async fn login_form() -> Result<Response, AppError> {
    let html = LoginTemplate { error: None }.render()?;
    Ok(Html(html).into_response())
}

/// Handle a login form submission.
///
/// Credential failures (unknown email or wrong password) map to a fixed
/// user-facing string; store failures are re-raised. No session is
/// established.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let user = state.users().find_by_email(&form.email).await?;

    let valid = user
        .as_ref()
        .is_some_and(|user| state.passwords().verify(&form.password, &user.password));

    if valid {
        tracing::info!(email = %form.email, "login succeeded");
        return Ok(Redirect::to(INVOICES_PATH).into_response());
    }

    tracing::warn!(email = %form.email, "login failed");
    let html = LoginTemplate {
        error: Some("Invalid credentials.".to_string()),
    }
    .render()?;
    Ok((StatusCode::UNAUTHORIZED, Html(html)).into_response())
}
