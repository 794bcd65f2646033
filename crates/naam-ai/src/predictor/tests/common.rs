use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::predictor::database::NameDatabase;
use crate::predictor::domain::Gender;
use crate::predictor::{prediction_router, GenderPredictor};

pub(super) fn empty_predictor() -> GenderPredictor {
    GenderPredictor::new(NameDatabase::empty())
}

pub(super) fn seeded_predictor() -> GenderPredictor {
    GenderPredictor::new(sample_database())
}

pub(super) fn sample_database() -> NameDatabase {
    NameDatabase::from_pairs([
        ("aditi", Gender::Female),
        ("priya", Gender::Female),
        ("ramesh", Gender::Male),
        ("vikram", Gender::Male),
    ])
}

pub(super) fn seeded_router() -> axum::Router {
    prediction_router(Arc::new(seeded_predictor()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
