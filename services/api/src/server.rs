use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_deduction_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use deduction_ai::config::AppConfig;
use deduction_ai::error::AppError;
use deduction_ai::telemetry;
use deduction_ai::workflows::profiling::DeductionEngine;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(args: ServeArgs) -> Result<(), AppError> {
    let ServeArgs { host, port } = args;

    let mut config = AppConfig::load()?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));

    let engine = Arc::new(DeductionEngine::standard());
    let app = with_deduction_routes(engine)
        .layer(Extension(AppState {
            readiness: readiness_flag.clone(),
            metrics: Arc::new(prometheus_handle),
        }))
        .layer(prometheus_layer);

    let listener = tokio::net::TcpListener::bind(config.server.socket_addr()?).await?;
    let addr = listener.local_addr()?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "behavioral deduction orchestrator ready");

    axum::serve(listener, app).await?;
    Ok(())
}
