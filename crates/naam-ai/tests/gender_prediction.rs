//! Integration scenarios for the gender prediction pipeline.
//!
//! Scenarios exercise the public facade end to end — database loading, the
//! rule cascade, and the HTTP router — without reaching into private modules.

mod common {
    use std::io::Cursor;
    use std::sync::Arc;

    use naam_ai::predictor::{prediction_router, GenderPredictor, NameDatabase};

    pub(super) const SAMPLE_DB: &str = r#"{
        "aditi": "female",
        "priya": "female",
        "ramesh": "male",
        "vikram": "male"
    }"#;

    pub(super) fn seeded_predictor() -> GenderPredictor {
        let db = NameDatabase::from_json_reader(Cursor::new(SAMPLE_DB))
            .expect("sample database loads");
        GenderPredictor::new(db)
    }

    pub(super) fn empty_predictor() -> GenderPredictor {
        GenderPredictor::new(NameDatabase::empty())
    }

    pub(super) fn seeded_router() -> axum::Router {
        prediction_router(Arc::new(seeded_predictor()))
    }
}

use common::*;
use naam_ai::predictor::Gender;
use tower::ServiceExt;

#[test]
fn titles_short_circuit_the_whole_pipeline() {
    let predictor = seeded_predictor();

    let shri = predictor.predict("Shri Ramesh Kumar");
    assert_eq!(shri.gender, Gender::Male);
    assert_eq!(shri.confidence, 1.0);

    let mrs = predictor.predict("Mrs Priya Singh");
    assert_eq!(mrs.gender, Gender::Female);
    assert_eq!(mrs.confidence, 1.0);

    let devanagari = predictor.predict("कुमारी Sita Sharma");
    assert_eq!(devanagari.gender, Gender::Female);
    assert_eq!(devanagari.confidence, 1.0);
}

#[test]
fn database_entries_resolve_after_title_filtering() {
    let prediction = seeded_predictor().predict("Aditi Verma");

    assert_eq!(prediction.gender, Gender::Female);
    assert_eq!(prediction.confidence, 0.98);
    assert_eq!(
        prediction.reasons,
        vec!["Database match for \"aditi\"".to_string()]
    );
}

#[test]
fn suffix_weighting_decides_unknown_names() {
    let prediction = empty_predictor().predict("Gurpreet Kaur");

    assert_eq!(prediction.gender, Gender::Female);
    assert_eq!(prediction.confidence, 0.85);
}

#[test]
fn pipeline_is_case_insensitive_and_idempotent() {
    let predictor = seeded_predictor();

    let upper = predictor.predict("MR. JOHN");
    let lower = predictor.predict("mr. john");
    assert_eq!(upper, lower);

    let first = predictor.predict("Gurpreet Kaur");
    let second = predictor.predict("Gurpreet Kaur");
    assert_eq!(first, second);
}

#[test]
fn degenerate_inputs_return_well_formed_predictions() {
    let predictor = seeded_predictor();

    for input in ["", "   ", "...", "!!!"] {
        let prediction = predictor.predict(input);
        assert!(
            !prediction.reasons.is_empty(),
            "reasons must not be empty for {input:?}"
        );
        assert!((0.0..=1.0).contains(&prediction.confidence));
    }
}

#[tokio::test]
async fn prediction_router_serves_the_cascade() {
    let response = seeded_router()
        .oneshot(
            axum::http::Request::post("/api/v1/gender/predictions")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(r#"{"name":"Shri Ramesh Kumar"}"#))
                .unwrap(),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    let payload: serde_json::Value = serde_json::from_slice(&body).expect("json payload");

    assert_eq!(payload["gender"], "male");
    assert_eq!(payload["confidence"], 1.0);
    assert_eq!(payload["reasons"][0], "Found Male Title (e.g., Mr/Shri)");
}
