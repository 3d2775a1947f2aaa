use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::{Element, FortuneTier};
use super::engine::{AnalysisRequest, FortuneEngine};
use super::numerology::NumerologyCategory;
use super::FortuneError;

/// Router builder exposing the analysis and numerology lookup endpoints.
pub fn fortune_router(engine: Arc<FortuneEngine>) -> Router {
    Router::new()
        .route("/api/v1/fortune/analyze", post(analyze_handler))
        .route("/api/v1/fortune/numerology/:number", get(numerology_handler))
        .with_state(engine)
}

fn error_response(status: StatusCode, error: &FortuneError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn analyze_handler(
    State(engine): State<Arc<FortuneEngine>>,
    payload: Result<axum::Json<AnalysisRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(axum::Json(request)) => request,
        Err(rejection) => {
            let body = json!({
                "error": rejection.body_text(),
            });
            return (rejection.status(), axum::Json(body)).into_response();
        }
    };

    match engine.analyze(&request) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error @ FortuneError::InvalidName { .. })
        | Err(error @ FortuneError::UnknownAspect(_)) => {
            error_response(StatusCode::UNPROCESSABLE_ENTITY, &error)
        }
        Err(error @ FortuneError::InvalidGridValue(_)) => {
            error_response(StatusCode::BAD_REQUEST, &error)
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NumerologyView {
    requested: u32,
    number: u32,
    element: Element,
    tier: FortuneTier,
    score: u8,
    category: NumerologyCategory,
    label: &'static str,
    meaning: &'static str,
}

pub(crate) async fn numerology_handler(
    State(engine): State<Arc<FortuneEngine>>,
    Path(number): Path<u32>,
) -> Response {
    match engine.numerology(number) {
        Ok(entry) => {
            let view = NumerologyView {
                requested: number,
                number: entry.number,
                element: Element::of(i64::from(entry.number)),
                tier: entry.tier,
                score: entry.score(),
                category: entry.category,
                label: entry.category.label(),
                meaning: entry.meaning,
            };
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(StatusCode::BAD_REQUEST, &error),
    }
}
