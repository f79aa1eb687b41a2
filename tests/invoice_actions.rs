//! Router-level tests for the invoice actions.

mod common;

use acme_dashboard::cache::ViewCache;
use acme_dashboard::forms::ValidatedInvoice;
use acme_dashboard::models::InvoiceStatus;
use acme_dashboard::store::InvoiceStore;
use axum::http::{header, StatusCode};
use tower::ServiceExt;

#[tokio::test]
async fn create_with_valid_fields_stores_cents_and_todays_date() {
    let app = common::build_app();

    let response = app
        .router
        .clone()
        .oneshot(common::form_post(
            "/dashboard/invoices/create",
            "customer_id=c1&amount=10.50&status=pending",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/dashboard/invoices"
    );

    let stored = app.invoices.list().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].customer_id, "c1");
    assert_eq!(stored[0].amount, 1050);
    assert_eq!(stored[0].status, InvoiceStatus::Pending);
    assert_eq!(stored[0].date, chrono::Utc::now().date_naive());
    assert_eq!(app.view_cache.generation("/dashboard/invoices"), 1);
}

#[tokio::test]
async fn create_with_non_positive_amount_performs_no_insert() {
    let app = common::build_app();

    let response = app
        .router
        .clone()
        .oneshot(common::form_post(
            "/dashboard/invoices/create",
            "customer_id=c1&amount=0&status=pending",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = common::body_text(response).await;
    assert!(body.contains("Please enter the amount greater than $0"));
    assert!(body.contains("Missing fields, Failed to create the invoice"));

    assert!(app.invoices.list().await.unwrap().is_empty());
    assert_eq!(app.view_cache.generation("/dashboard/invoices"), 0);
}

#[tokio::test]
async fn create_with_missing_fields_reports_each_field() {
    let app = common::build_app();

    let response = app
        .router
        .clone()
        .oneshot(common::form_post("/dashboard/invoices/create", "amount=abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = common::body_text(response).await;
    assert!(body.contains("Please select the customer id"));
    assert!(body.contains("Please enter the amount greater than $0"));
    assert!(body.contains("Please select an invoice status"));

    assert!(app.invoices.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_mutates_fields_but_not_date() {
    let app = common::build_app();
    let date = chrono::Utc::now().date_naive();
    app.invoices
        .insert(
            &ValidatedInvoice {
                customer_id: "c1".to_string(),
                amount_in_cents: 500,
                status: InvoiceStatus::Pending,
            },
            date,
        )
        .await
        .unwrap();
    let id = app.invoices.list().await.unwrap()[0].id.clone();

    let response = app
        .router
        .clone()
        .oneshot(common::form_post(
            &format!("/dashboard/invoices/{id}/edit"),
            "customer_id=c2&amount=12.34&status=paid",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let updated = app.invoices.get(&id).await.unwrap().unwrap();
    assert_eq!(updated.customer_id, "c2");
    assert_eq!(updated.amount, 1234);
    assert_eq!(updated.status, InvoiceStatus::Paid);
    assert_eq!(updated.date, date);
}

#[tokio::test]
async fn update_with_invalid_status_performs_no_mutation() {
    let app = common::build_app();
    let date = chrono::Utc::now().date_naive();
    app.invoices
        .insert(
            &ValidatedInvoice {
                customer_id: "c1".to_string(),
                amount_in_cents: 500,
                status: InvoiceStatus::Pending,
            },
            date,
        )
        .await
        .unwrap();
    let id = app.invoices.list().await.unwrap()[0].id.clone();

    let response = app
        .router
        .clone()
        .oneshot(common::form_post(
            &format!("/dashboard/invoices/{id}/edit"),
            "customer_id=c1&amount=5&status=overdue",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = common::body_text(response).await;
    assert!(body.contains("Please select an invoice status"));
    assert!(body.contains("Missing fields, Failed to update the invoice"));

    let unchanged = app.invoices.get(&id).await.unwrap().unwrap();
    assert_eq!(unchanged.amount, 500);
    assert_eq!(unchanged.status, InvoiceStatus::Pending);
}

#[tokio::test]
async fn delete_nonexistent_id_completes_and_invalidates_view() {
    let app = common::build_app();

    let response = app
        .router
        .clone()
        .oneshot(common::form_post(
            "/dashboard/invoices/no-such-id/delete",
            "",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(app.view_cache.generation("/dashboard/invoices"), 1);
}

#[tokio::test]
async fn delete_over_htmx_returns_ok_for_row_removal() {
    let app = common::build_app();
    app.invoices
        .insert(
            &ValidatedInvoice {
                customer_id: "c1".to_string(),
                amount_in_cents: 100,
                status: InvoiceStatus::Paid,
            },
            chrono::Utc::now().date_naive(),
        )
        .await
        .unwrap();
    let id = app.invoices.list().await.unwrap()[0].id.clone();

    let request = axum::http::Request::builder()
        .method("POST")
        .uri(format!("/dashboard/invoices/{id}/delete"))
        .header("HX-Request", "true")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(app.invoices.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn edit_form_for_unknown_id_is_404() {
    let app = common::build_app();

    let response = app
        .router
        .clone()
        .oneshot(common::get("/dashboard/invoices/no-such-id/edit"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_etag_revalidates_until_a_mutation() {
    let app = common::build_app();

    let first = app
        .router
        .clone()
        .oneshot(common::get("/dashboard/invoices"))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let etag = first
        .headers()
        .get(header::ETAG)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let conditional = axum::http::Request::builder()
        .method("GET")
        .uri("/dashboard/invoices")
        .header(header::IF_NONE_MATCH, &etag)
        .body(axum::body::Body::empty())
        .unwrap();
    let cached = app.router.clone().oneshot(conditional).await.unwrap();
    assert_eq!(cached.status(), StatusCode::NOT_MODIFIED);

    app.router
        .clone()
        .oneshot(common::form_post(
            "/dashboard/invoices/create",
            "customer_id=c1&amount=1&status=paid",
        ))
        .await
        .unwrap();

    let stale = axum::http::Request::builder()
        .method("GET")
        .uri("/dashboard/invoices")
        .header(header::IF_NONE_MATCH, &etag)
        .body(axum::body::Body::empty())
        .unwrap();
    let refreshed = app.router.clone().oneshot(stale).await.unwrap();
    assert_eq!(refreshed.status(), StatusCode::OK);
    let body = common::body_text(refreshed).await;
    assert!(body.contains("c1"));
}
