//! # Receipt API
//!
//! HTTP front end for the receipt points service.
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Receipt API Routes                              │
//! │                                                                         │
//! │  POST /receipts/process      Receipt JSON ──► {"id": "<uuid>"}          │
//! │  GET  /receipts/{id}/points  ──► {"points": 28}  | 404                  │
//! │  GET  /health                ──► {"status": "ok", "receipts": n}        │
//! │                                                                         │
//! │  Any other method on these paths ──► 405                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `RECEIPT_API_BIND_ADDR` - Interface to bind (default: 0.0.0.0)
//! - `RECEIPT_API_PORT` - HTTP port (default: 8080)
//! - `RUST_LOG` - Log filter (default: info)

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use receipt_store::ReceiptStore;

// Re-exports
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};

/// Shared application state.
pub struct AppState {
    pub store: ReceiptStore,
}

impl AppState {
    /// Wraps a store for sharing between handlers.
    pub fn new(store: ReceiptStore) -> Arc<Self> {
        Arc::new(AppState { store })
    }
}

/// Builds the router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/receipts/process", post(handlers::process_receipt))
        .route("/receipts/{id}/points", get(handlers::get_points))
        .route("/health", get(handlers::health))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn app() -> (Router, Arc<AppState>) {
        let state = AppState::new(ReceiptStore::new());
        (create_router(state.clone()), state)
    }

    fn target_receipt() -> Value {
        json!({
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
                {"shortDescription": "Emils Cheese Pizza", "price": "12.25"},
                {"shortDescription": "Knorr Creamy Chicken", "price": "1.26"},
                {"shortDescription": "Doritos Nacho Cheese", "price": "3.35"},
                {"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}
            ],
            "total": "35.35"
        })
    }

    fn corner_market_receipt() -> Value {
        json!({
            "retailer": "M&M Corner Market",
            "purchaseDate": "2022-03-20",
            "purchaseTime": "14:33",
            "items": [
                {"shortDescription": "Gatorade", "price": "2.25"},
                {"shortDescription": "Gatorade", "price": "2.25"},
                {"shortDescription": "Gatorade", "price": "2.25"},
                {"shortDescription": "Gatorade", "price": "2.25"}
            ],
            "total": "9.00"
        })
    }

    fn post_raw(uri: &str, body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn process(app: &Router, receipt: &Value) -> String {
        let response = app
            .clone()
            .oneshot(post_raw("/receipts/process", receipt.to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        json_body(response).await["id"].as_str().unwrap().to_string()
    }

    async fn points(app: &Router, id: &str) -> Response {
        app.clone()
            .oneshot(get(&format!("/receipts/{id}/points")))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_process_then_get_points() {
        let (app, _) = app();

        let id = process(&app, &target_receipt()).await;
        let response = points(&app, &id).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({"points": 28}));
    }

    #[tokio::test]
    async fn test_corner_market_scores_109() {
        let (app, _) = app();

        let id = process(&app, &corner_market_receipt()).await;
        let response = points(&app, &id).await;

        assert_eq!(json_body(response).await["points"], 109);
    }

    #[tokio::test]
    async fn test_process_returns_uuid() {
        let (app, state) = app();

        let id = process(&app, &target_receipt()).await;

        assert!(uuid::Uuid::parse_str(&id).is_ok());
        assert_eq!(state.store.len().await, 1);
    }

    #[tokio::test]
    async fn test_each_submission_gets_its_own_id() {
        let (app, _) = app();

        let first = process(&app, &target_receipt()).await;
        let second = process(&app, &target_receipt()).await;

        assert_ne!(first, second);
        assert_eq!(json_body(points(&app, &first).await).await["points"], 28);
        assert_eq!(json_body(points(&app, &second).await).await["points"], 28);
    }

    #[tokio::test]
    async fn test_content_type_is_not_required() {
        let (app, _) = app();
        let request = Request::builder()
            .method("POST")
            .uri("/receipts/process")
            .body(Body::from(target_receipt().to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let (app, state) = app();

        let response = app
            .oneshot(post_raw("/receipts/process", "{\"retailer\": "))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["code"], "BAD_REQUEST");
        assert!(state.store.is_empty().await);
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        let (app, _) = app();
        let mut receipt = target_receipt();
        receipt.as_object_mut().unwrap().remove("total");

        let response = app
            .oneshot(post_raw("/receipts/process", receipt.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_amount_is_bad_request() {
        let (app, _) = app();

        for bad_total in [json!("12.345"), json!("-1.00"), json!("abc"), json!(35.35)] {
            let mut receipt = target_receipt();
            receipt["total"] = bad_total.clone();

            let response = app
                .clone()
                .oneshot(post_raw("/receipts/process", receipt.to_string()))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "total {bad_total}");
        }
    }

    #[tokio::test]
    async fn test_malformed_date_and_time_still_scored() {
        let (app, _) = app();
        let mut receipt = corner_market_receipt();
        receipt["purchaseDate"] = json!("March 20th");
        receipt["purchaseTime"] = json!("2:33pm");

        let id = process(&app, &receipt).await;
        let response = points(&app, &id).await;

        // 109 minus the 10 bonus-hour points
        assert_eq!(json_body(response).await["points"], 99);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let (app, _) = app();
        process(&app, &target_receipt()).await;

        let response = points(&app, "7fb1377b-b223-49d9-a31a-5a02701dd310").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_wrong_methods_are_rejected() {
        let (app, _) = app();

        let response = app.clone().oneshot(get("/receipts/process")).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let response = app
            .oneshot(post_raw("/receipts/some-id/points", "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_health_reports_receipt_count() {
        let (app, _) = app();
        process(&app, &target_receipt()).await;
        process(&app, &corner_market_receipt()).await;

        let response = app.oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({"status": "ok", "receipts": 2}));
    }
}
