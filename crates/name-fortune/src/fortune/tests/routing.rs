use super::common::*;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::fortune::router::{analyze_handler, numerology_handler};
use crate::fortune::AnalysisRequest;

#[tokio::test]
async fn analyze_handler_returns_report() {
    let response = analyze_handler(
        State(Arc::new(engine())),
        Ok(axum::Json(request("李明"))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["overallScore"]["score"], 74);
}

#[tokio::test]
async fn analyze_handler_rejects_invalid_names() {
    let response = analyze_handler(
        State(Arc::new(engine())),
        Ok(axum::Json(AnalysisRequest::new("欧阳"))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("no given name"));
}

#[tokio::test]
async fn analyze_route_accepts_minimal_payload() {
    let response = router()
        .oneshot(json_request(
            "/api/v1/fortune/analyze",
            &json!({ "fullName": "张伟" }),
        ))
        .await
        .expect("route responds");
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["fiveGrids"]["person"]["value"], 22);
    assert_eq!(body["analysisType"], "comprehensive");
    assert!(body["advice"].is_object());
}

#[tokio::test]
async fn analyze_route_honours_request_options() {
    let response = router()
        .oneshot(json_request(
            "/api/v1/fortune/analyze",
            &json!({
                "fullName": "李明",
                "analysisType": "basic",
                "includeAspects": ["wealth", "family"],
                "includePredictions": false
            }),
        ))
        .await
        .expect("route responds");
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["analysisType"], "basic");
    let aspects = body["aspectAnalysis"].as_object().expect("aspect map");
    assert_eq!(aspects.len(), 2);
    let ages = body["ageAnalysis"].as_object().expect("age map");
    assert_eq!(ages.len(), 5);
    assert!(body.get("predictions").is_none());
    assert!(body["advice"].is_object());
}

#[tokio::test]
async fn analyze_route_rejects_unknown_aspects() {
    let response = router()
        .oneshot(json_request(
            "/api/v1/fortune/analyze",
            &json!({ "fullName": "李明", "includeAspects": ["fame"] }),
        ))
        .await
        .expect("route responds");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.headers()[axum::http::header::CONTENT_TYPE],
        "application/json"
    );

    let body = read_json_body(response).await;
    assert_eq!(body["error"], "unknown life aspect 'fame'");
}

#[tokio::test]
async fn analyze_route_reports_malformed_bodies_as_json() {
    let response = router()
        .oneshot(json_request(
            "/api/v1/fortune/analyze",
            &json!({ "analysisType": "basic" }),
        ))
        .await
        .expect("route responds");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("fullName"));
}

#[tokio::test]
async fn numerology_route_folds_large_numbers() {
    let response = router()
        .oneshot(
            axum::http::Request::get("/api/v1/fortune/numerology/82")
                .body(axum::body::Body::empty())
                .expect("build request"),
        )
        .await
        .expect("route responds");
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json_body(response).await;
    assert_eq!(body["requested"], 82);
    assert_eq!(body["number"], 1);
    assert_eq!(body["tier"], "great");
    assert_eq!(body["label"], "大吉");
}

#[tokio::test]
async fn numerology_handler_rejects_zero() {
    let response = numerology_handler(State(Arc::new(engine())), Path(0)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json_body(response).await;
    assert!(body["error"].is_string());
}
