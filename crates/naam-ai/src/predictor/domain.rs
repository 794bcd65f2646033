use serde::{Deserialize, Serialize};

/// Gender label attached to known names and predictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn label(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Parse the labels found in database exports. Accepts the single-letter
    /// shorthand some roster dumps use.
    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// Prediction output describing the decision and the rule trail behind it.
///
/// `reasons` is ordered by rule application and is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub gender: Gender,
    pub confidence: f64,
    pub reasons: Vec<String>,
}
