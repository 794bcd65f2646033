use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tower::ServiceExt;

use super::common::*;
use crate::predictor::router::{predict_handler, PredictionRequest};

#[tokio::test]
async fn predict_handler_returns_structured_prediction() {
    let predictor = Arc::new(seeded_predictor());

    let Json(prediction) = predict_handler(
        State(predictor),
        Json(PredictionRequest {
            name: "Mrs Priya Singh".to_string(),
        }),
    )
    .await;

    assert_eq!(prediction.confidence, 1.0);
    assert_eq!(
        prediction.reasons,
        vec!["Found Female Title (e.g., Mrs/Ms)".to_string()]
    );
}

#[tokio::test]
async fn predict_route_accepts_json_payloads() {
    let router = seeded_router();

    let response = router
        .oneshot(
            axum::http::Request::post("/api/v1/gender/predictions")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(r#"{"name":"Gurpreet Kaur"}"#))
                .unwrap(),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["gender"], "female");
    assert_eq!(body["confidence"], 0.85);
}

#[tokio::test]
async fn predict_route_resolves_path_names() {
    let router = seeded_router();

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/gender/predictions/aditi")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["gender"], "female");
    assert_eq!(body["confidence"], 0.98);
    assert_eq!(body["reasons"][0], "Database match for \"aditi\"");
}
