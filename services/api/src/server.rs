use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_fortune_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use name_fortune::config::AppConfig;
use name_fortune::error::AppError;
use name_fortune::fortune::FortuneEngine;
use name_fortune::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = Arc::new(FortuneEngine::from_config(&config.engine)?);
    info!(
        characters = engine.tables().strokes.len(),
        fallback = engine.tables().strokes.fallback(),
        "fortune tables loaded"
    );

    let app = with_fortune_routes(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "name fortune service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
