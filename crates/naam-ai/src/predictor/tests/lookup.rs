use super::common::*;
use crate::predictor::domain::Gender;

#[test]
fn database_hit_returns_stored_label() {
    let prediction = seeded_predictor().predict("Aditi Verma");

    assert_eq!(prediction.gender, Gender::Female);
    assert_eq!(prediction.confidence, 0.98);
    assert_eq!(
        prediction.reasons,
        vec!["Database match for \"aditi\"".to_string()]
    );
}

#[test]
fn filler_tokens_are_skipped_when_choosing_the_core_name() {
    // Latin "kumari" is a filtered suffix word, not a title, so the core name
    // is the token after it.
    let prediction = seeded_predictor().predict("Kumari Aditi");

    assert_eq!(prediction.gender, Gender::Female);
    assert_eq!(prediction.confidence, 0.98);

    let prediction = seeded_predictor().predict("Singh Ramesh");

    assert_eq!(prediction.gender, Gender::Male);
    assert_eq!(prediction.confidence, 0.98);
}

#[test]
fn core_name_falls_back_to_first_token_when_all_are_filtered() {
    // "singh" alone survives as the core name, misses the database, and lands
    // in the scored stages with its own suffix weight.
    let prediction = seeded_predictor().predict("Singh");

    assert_eq!(prediction.gender, Gender::Male);
    assert_eq!(prediction.confidence, 0.85);
    assert_eq!(
        prediction.reasons,
        vec!["Ends in consonant (Common male trait)".to_string()]
    );
}

#[test]
fn empty_database_never_produces_a_lookup_match() {
    let prediction = empty_predictor().predict("Aditi");

    assert_eq!(prediction.gender, Gender::Female);
    assert_eq!(prediction.confidence, 0.85);
}

#[test]
fn database_len_reports_known_names() {
    assert_eq!(seeded_predictor().database_len(), 4);
    assert_eq!(empty_predictor().database_len(), 0);
}
