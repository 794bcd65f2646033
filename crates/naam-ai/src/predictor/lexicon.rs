use regex::Regex;

/// Honorifics that deterministically fix the gender when present anywhere in
/// the input. Latin transliterations plus the Devanagari कुमारी.
pub(crate) const MALE_TITLES: &[&str] = &["mr", "shri", "shree", "mister", "master", "msr"];
pub(crate) const FEMALE_TITLES: &[&str] = &[
    "mrs",
    "ms",
    "miss",
    "smt",
    "shrimati",
    "कुमारी",
    "shreemati",
    "lady",
];

/// Surname/suffix tokens that correlate with a gender; matched per token and
/// weighted additively.
pub(crate) const MALE_SUFFIXES: &[&str] =
    &["kumar", "singh", "prasad", "nath", "ji", "lal", "bhagat", "son"];
pub(crate) const FEMALE_SUFFIXES: &[&str] =
    &["kumari", "devi", "kaur", "begum", "shree", "ben", "didi"];

/// Title/suffix words removed from the token stream before the core name is
/// chosen for database lookup and the final-letter check.
pub(crate) const FILLER_TOKENS: &[&str] = &[
    "mr", "mrs", "ms", "shri", "smt", "kumar", "kumari", "singh", "devi", "shree",
];

/// Compiled whole-word matchers for the honorific tables, built once per
/// predictor and reused across calls.
pub(crate) struct TitleLexicon {
    male: Regex,
    female: Regex,
}

impl TitleLexicon {
    pub(crate) fn standard() -> Self {
        Self {
            male: whole_word_matcher(MALE_TITLES),
            female: whole_word_matcher(FEMALE_TITLES),
        }
    }

    pub(crate) fn matches_male(&self, normalized: &str) -> bool {
        self.male.is_match(normalized)
    }

    pub(crate) fn matches_female(&self, normalized: &str) -> bool {
        self.female.is_match(normalized)
    }
}

fn whole_word_matcher(tokens: &[&str]) -> Regex {
    // \b is Unicode-aware in the regex crate, so the Devanagari entries get
    // the same whole-word semantics as the Latin ones.
    let pattern = format!(r"\b(?:{})\b", tokens.join("|"));
    Regex::new(&pattern).expect("fixed title alternation compiles")
}
