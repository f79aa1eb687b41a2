//! Home page handlers.

use askama::Template;
use axum::response::{Html, IntoResponse, Response};

use crate::error::AppError;

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate;

/// Home page.
pub async fn index() -> Result<Response, AppError> {
    let html = HomeTemplate.render()?;
    Ok(Html(html).into_response())
}
