use metrics_exporter_prometheus::PrometheusHandle;
use name_fortune::config::AppConfig;
use name_fortune::error::AppError;
use name_fortune::fortune::FortuneEngine;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the engine from environment settings, merging any configured stroke table.
pub(crate) fn engine_from_env() -> Result<FortuneEngine, AppError> {
    let config = AppConfig::load()?;
    Ok(FortuneEngine::from_config(&config.engine)?)
}
