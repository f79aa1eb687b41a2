//! Shared test harness: the full router wired to in-memory stores.

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use std::sync::Arc;

use acme_dashboard::services::password::PasswordService;
use acme_dashboard::store::{MemoryInvoiceStore, MemoryUserStore};
use acme_dashboard::{router, AppState, InMemoryViewCache};
use axum::body::Body;
use axum::http::{header, Request};
use axum::Router;
use http_body_util::BodyExt;

pub struct TestApp {
    pub router: Router,
    pub invoices: Arc<MemoryInvoiceStore>,
    pub users: Arc<MemoryUserStore>,
    pub view_cache: Arc<InMemoryViewCache>,
}

pub fn build_app() -> TestApp {
    let invoices = Arc::new(MemoryInvoiceStore::new());
    let users = Arc::new(MemoryUserStore::new());
    let view_cache = Arc::new(InMemoryViewCache::new());
    let state = AppState::new(
        invoices.clone(),
        users.clone(),
        view_cache.clone(),
        PasswordService::new(),
    );
    TestApp {
        router: router(state),
        invoices,
        users,
        view_cache,
    }
}

pub fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn json_post(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
