use super::domain::Gender;
use super::lexicon::{FEMALE_SUFFIXES, FILLER_TOKENS, MALE_SUFFIXES};

const SUFFIX_WEIGHT: f64 = 1.5;
const VOWEL_WEIGHT: f64 = 1.0;
const CONSONANT_WEIGHT: f64 = 0.5;

const SCORED_CONFIDENCE: f64 = 0.85;
const TIE_CONFIDENCE: f64 = 0.5;

/// Transient per-call score counters, discarded once a prediction is built.
#[derive(Debug, Default)]
pub(crate) struct ScoreBoard {
    pub(crate) male: f64,
    pub(crate) female: f64,
}

/// Lowercase and trim the raw input. Punctuation is kept so the title scan
/// still sees word boundaries around dotted honorifics like "Mr.".
pub(crate) fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Strip periods and split on whitespace runs, discarding empty tokens.
pub(crate) fn tokenize(normalized: &str) -> Vec<String> {
    normalized
        .replace('.', "")
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// First token that is not a known title/suffix word; falls back to the first
/// token outright, and to the empty string when there are no tokens at all.
pub(crate) fn core_name(tokens: &[String]) -> String {
    tokens
        .iter()
        .find(|token| !FILLER_TOKENS.contains(&token.as_str()))
        .or_else(|| tokens.first())
        .cloned()
        .unwrap_or_default()
}

/// Weigh every token against the suffix tables. The tables are disjoint, so a
/// token contributes to at most one side; multiple tokens accumulate without a
/// cap. Suffix hits do not append reasons.
pub(crate) fn weigh_suffixes(tokens: &[String], board: &mut ScoreBoard) {
    for token in tokens {
        if MALE_SUFFIXES.contains(&token.as_str()) {
            board.male += SUFFIX_WEIGHT;
        }
        if FEMALE_SUFFIXES.contains(&token.as_str()) {
            board.female += SUFFIX_WEIGHT;
        }
    }
}

/// Last-resort heuristic on the final letter of the core name. The empty core
/// name has no last character and takes the consonant branch.
pub(crate) fn weigh_final_letter(core: &str, board: &mut ScoreBoard, reasons: &mut Vec<String>) {
    match core.chars().last() {
        Some('a' | 'e' | 'i') => {
            board.female += VOWEL_WEIGHT;
            reasons.push("Ends in vowel (Common female trait)".to_string());
        }
        _ => {
            board.male += CONSONANT_WEIGHT;
            reasons.push("Ends in consonant (Common male trait)".to_string());
        }
    }
}

/// Resolve the accumulated scores into a label and confidence. Ties go to
/// male at confidence 0.5; any other split reports 0.85. Scores are sums of
/// halves, so float equality is exact here.
pub(crate) fn decide(board: &ScoreBoard) -> (Gender, f64) {
    let gender = if board.male >= board.female {
        Gender::Male
    } else {
        Gender::Female
    };
    let confidence = if board.male == board.female {
        TIE_CONFIDENCE
    } else {
        SCORED_CONFIDENCE
    };
    (gender, confidence)
}
