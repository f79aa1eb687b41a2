//! Router construction.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::handlers::{accounts, home, invoices};
use crate::state::AppState;

/// Build the application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        // Public pages
        .route("/", get(home::index))
        .route("/login", get(accounts::login_form).post(accounts::login))
        .route(
            "/create-account",
            get(accounts::register_form).post(accounts::register),
        )
        // JSON API
        .route("/api/create-account", post(accounts::create_account_api))
        // Invoice actions
        .route("/dashboard/invoices", get(invoices::index))
        .route(
            "/dashboard/invoices/create",
            get(invoices::create_form).post(invoices::create),
        )
        .route(
            "/dashboard/invoices/{id}/edit",
            get(invoices::edit_form).post(invoices::update),
        )
        .route("/dashboard/invoices/{id}/delete", post(invoices::delete))
        // Static files
        .nest_service("/static", ServeDir::new("static"))
        // Middleware
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
