use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use metrics_exporter_prometheus::PrometheusBuilder;
use serde_json::{json, Value};
use tower::ServiceExt;
use valuation_ai::valuation::ValuationEngine;
use valuation_ai::{valuation_router, AppState};

fn test_router(ready: bool) -> axum::Router {
    let engine = ValuationEngine::load(Path::new("model")).expect("shipped artifacts load");
    let handle = PrometheusBuilder::new().build_recorder().handle();
    valuation_router(AppState {
        engine: Arc::new(engine),
        readiness: Arc::new(AtomicBool::new(ready)),
        metrics: Arc::new(handle),
    })
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collects");
    serde_json::from_slice(&bytes).expect("body is json")
}

fn post_valuation(payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/valuation")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn valuation_returns_formatted_price() {
    let response = test_router(true)
        .oneshot(post_valuation(json!({
            "bedrooms": 3,
            "bathrooms": 2.0,
            "flat_area": 1500.0,
            "condition": "Good",
            "visited": "None"
        })))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["currency"], "USD");
    assert!(body["estimated_value"].is_f64());
    assert!(body["display_price"]
        .as_str()
        .expect("display price present")
        .starts_with('$'));
}

#[tokio::test]
async fn out_of_range_submission_is_unprocessable() {
    let response = test_router(true)
        .oneshot(post_valuation(json!({ "flat_area": 12.0 })))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["kind"], "validation");
    assert!(body["error"]
        .as_str()
        .expect("error message present")
        .contains("flat_area"));
}

#[tokio::test]
async fn unknown_categorical_level_is_rejected_by_deserialization() {
    let response = test_router(true)
        .oneshot(post_valuation(json!({ "condition": "Pristine" })))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn form_page_is_served_at_root() {
    let response = test_router(true)
        .oneshot(
            Request::builder()
                .uri("/")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collects");
    let page = String::from_utf8(bytes.to_vec()).expect("page is utf-8");
    assert!(page.contains("Predict Market Price"));
}

#[tokio::test]
async fn schema_endpoint_advertises_field_constraints() {
    let response = test_router(true)
        .oneshot(
            Request::builder()
                .uri("/api/v1/valuation/schema")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["numeric"].as_array().expect("numeric fields").len(), 14);
    assert_eq!(body["selects"].as_array().expect("select fields").len(), 3);
}

#[tokio::test]
async fn readiness_reflects_startup_state() {
    let response = test_router(false)
        .oneshot(
            Request::builder()
                .uri("/ready")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let response = test_router(true)
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
}
