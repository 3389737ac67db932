use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::error::AppError;
use crate::valuation::{FormSchema, PropertyDetails, ValuationEngine};

const FORM_PAGE: &str = include_str!("../assets/index.html");

/// Shared read-only state handed to every request: the loaded artifacts plus
/// the readiness flag and metrics handle.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ValuationEngine>,
    pub readiness: Arc<AtomicBool>,
    pub metrics: Arc<PrometheusHandle>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ValuationResponse {
    pub(crate) estimated_value: f64,
    pub(crate) display_price: String,
    pub(crate) currency: &'static str,
    pub(crate) generated_at: DateTime<Utc>,
}

/// Router exposing the form page, the valuation API, and the health triple.
pub fn valuation_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(form_page))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/valuation", post(valuation_endpoint))
        .route("/api/v1/valuation/schema", get(schema_endpoint))
        .with_state(state)
}

pub(crate) async fn form_page() -> Html<&'static str> {
    Html(FORM_PAGE)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn schema_endpoint() -> Json<FormSchema> {
    Json(FormSchema::standard())
}

pub(crate) async fn valuation_endpoint(
    State(state): State<AppState>,
    Json(details): Json<PropertyDetails>,
) -> Result<Json<ValuationResponse>, AppError> {
    FormSchema::standard().validate(&details)?;

    let valuation = state.engine.estimate(&details)?;
    info!(
        bedrooms = details.bedrooms,
        flat_area = details.flat_area,
        estimated_value = valuation.estimated_value,
        "valuation served"
    );

    Ok(Json(ValuationResponse {
        estimated_value: valuation.estimated_value,
        display_price: valuation.display_price(),
        currency: "USD",
        generated_at: Utc::now(),
    }))
}
