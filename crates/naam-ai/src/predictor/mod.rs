//! Rule-cascade gender prediction for personal names.
//!
//! The predictor applies four techniques in strict priority order: honorific
//! title detection, direct database lookup of the extracted core name,
//! weighted suffix/surname scoring, and a final-letter pattern fallback. The
//! first two short-circuit; the last two combine into one scored decision.

mod lexicon;
mod rules;

pub mod database;
pub mod domain;
pub mod router;

#[cfg(test)]
mod tests;

pub use database::{NameDatabase, NameDbImportError};
pub use domain::{Gender, Prediction};
pub use router::prediction_router;

use lexicon::TitleLexicon;
use rules::ScoreBoard;

const TITLE_CONFIDENCE: f64 = 1.0;
const DATABASE_CONFIDENCE: f64 = 0.98;

/// Stateless predictor over an immutable name-database snapshot and the
/// static rule tables. Safe to share across concurrent callers.
pub struct GenderPredictor {
    db: NameDatabase,
    titles: TitleLexicon,
}

impl GenderPredictor {
    pub fn new(db: NameDatabase) -> Self {
        Self {
            db,
            titles: TitleLexicon::standard(),
        }
    }

    /// Classify a free-text name. Total over strings: empty, whitespace-only,
    /// or pure-punctuation input degrades to the low-confidence fallback path
    /// rather than failing.
    pub fn predict(&self, raw: &str) -> Prediction {
        let normalized = rules::normalize(raw);

        // Stage 1: honorific scan over the whole string, male set first.
        if self.titles.matches_male(&normalized) {
            return Prediction {
                gender: Gender::Male,
                confidence: TITLE_CONFIDENCE,
                reasons: vec!["Found Male Title (e.g., Mr/Shri)".to_string()],
            };
        }
        if self.titles.matches_female(&normalized) {
            return Prediction {
                gender: Gender::Female,
                confidence: TITLE_CONFIDENCE,
                reasons: vec!["Found Female Title (e.g., Mrs/Ms)".to_string()],
            };
        }

        // Stage 2: tokenization and core-name extraction.
        let tokens = rules::tokenize(&normalized);
        let core_name = rules::core_name(&tokens);

        // Stage 3: known-name lookup.
        if let Some(gender) = self.db.get(&core_name) {
            return Prediction {
                gender,
                confidence: DATABASE_CONFIDENCE,
                reasons: vec![format!("Database match for \"{core_name}\"")],
            };
        }

        // Stages 4-5: suffix weighting over every token, then the
        // final-letter fallback on the core name.
        let mut board = ScoreBoard::default();
        let mut reasons = Vec::new();
        rules::weigh_suffixes(&tokens, &mut board);
        rules::weigh_final_letter(&core_name, &mut board, &mut reasons);

        let (gender, confidence) = rules::decide(&board);
        if reasons.is_empty() {
            reasons.push("General pattern match".to_string());
        }

        Prediction {
            gender,
            confidence,
            reasons,
        }
    }

    /// Number of known names backing stage-3 lookups.
    pub fn database_len(&self) -> usize {
        self.db.len()
    }
}
