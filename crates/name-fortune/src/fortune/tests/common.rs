use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::fortune::strokes::StrokeTable;
use crate::fortune::{fortune_router, AnalysisRequest, FortuneEngine, FortuneTables};

pub(super) fn engine() -> FortuneEngine {
    FortuneEngine::standard()
}

/// Engine whose unknown characters resolve to `fallback` strokes.
pub(super) fn engine_with_fallback(fallback: u32) -> FortuneEngine {
    let tables = FortuneTables::with_strokes(StrokeTable::standard(fallback));
    FortuneEngine::new(Arc::new(tables))
}

pub(super) fn request(name: &str) -> AnalysisRequest {
    AnalysisRequest::new(name)
}

pub(super) fn router() -> axum::Router {
    fortune_router(Arc::new(engine()))
}

pub(super) fn json_request(uri: &str, body: &Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(body).expect("serialize body"),
        ))
        .expect("build request")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
