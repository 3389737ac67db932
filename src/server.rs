use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum_prometheus::PrometheusMetricLayer;
use tracing::info;

use crate::cli::ServeArgs;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::routes::{valuation_router, AppState};
use crate::telemetry;
use crate::valuation::ValuationEngine;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(model_dir) = args.model_dir.take() {
        config.artifacts.directory = model_dir;
    }

    telemetry::init(&config.telemetry)?;

    // Artifact load failure is fatal: without both fitted artifacts the
    // service refuses to serve.
    let engine = ValuationEngine::load(&config.artifacts.directory)?;
    info!(
        directory = %config.artifacts.directory.display(),
        width = engine.expected_width(),
        "fitted scaler and price model loaded"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        engine: Arc::new(engine),
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = valuation_router(state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "property valuation service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
