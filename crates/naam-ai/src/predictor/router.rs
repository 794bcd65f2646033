use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::domain::Prediction;
use super::GenderPredictor;

/// Router builder exposing HTTP endpoints for gender prediction.
///
/// Prediction is total over strings, so both handlers are infallible; the
/// structured result is returned verbatim.
pub fn prediction_router(predictor: Arc<GenderPredictor>) -> Router {
    Router::new()
        .route("/api/v1/gender/predictions", post(predict_handler))
        .route(
            "/api/v1/gender/predictions/:name",
            get(predict_path_handler),
        )
        .with_state(predictor)
}

#[derive(Debug, Deserialize)]
pub(crate) struct PredictionRequest {
    pub(crate) name: String,
}

pub(crate) async fn predict_handler(
    State(predictor): State<Arc<GenderPredictor>>,
    Json(request): Json<PredictionRequest>,
) -> Json<Prediction> {
    Json(predictor.predict(&request.name))
}

pub(crate) async fn predict_path_handler(
    State(predictor): State<Arc<GenderPredictor>>,
    Path(name): Path<String>,
) -> Json<Prediction> {
    Json(predictor.predict(&name))
}
