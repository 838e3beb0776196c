//! Relevance scoring for acronym and name matches.
//!
//! Acronym scores are additive: bonuses for early, dense, multi-letter,
//! basename-level matches and penalties for long texts and late matches.
//! Every accepted acronym match scores at least [`MIN_SCORE`], so a positive
//! match is always distinguishable from "no match" (score 0).

use serde::Serialize;

/// Floor applied to every accepted acronym match.
pub const MIN_SCORE: f64 = 0.1;

/// Texts longer than this many characters are penalised.
const LENGTH_PENALTY_THRESHOLD: usize = 15;
const LENGTH_PENALTY_PER_CHAR: f64 = 0.02;
const POSITION_PENALTY_PER_WORD: f64 = 0.1;

const BASE_SCORE: f64 = 1.0;
const PREFIX_BONUS: f64 = 3.0;
const MULTI_LETTER_BONUS: f64 = 2.0;
const BASENAME_BONUS: f64 = 2.0;
const DENSITY_WEIGHT: f64 = 2.0;
const FULL_CONSUMPTION_BONUS: f64 = 2.0;
const MARKDOWN_BONUS: f64 = 0.5;

/// Inputs to the acronym score of a single located match.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInput<'a> {
    /// Length of the initials string (number of words).
    pub initials_len: usize,
    /// Length of the normalized query, in characters.
    pub query_len: usize,
    /// Word index at which the query was found.
    pub match_index: usize,
    /// The candidate text the initials were built from.
    pub text: &'a str,
    /// Whether the text is the primary text or a basename rather than a full path.
    pub is_basename_or_primary: bool,
}

/// Itemised acronym score. Penalties are stored as negative values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub base: f64,
    pub prefix_bonus: f64,
    pub multi_letter_bonus: f64,
    pub basename_bonus: f64,
    pub density_bonus: f64,
    pub full_consumption_bonus: f64,
    pub length_penalty: f64,
    pub markdown_bonus: f64,
    pub position_penalty: f64,
}

impl ScoreBreakdown {
    pub fn compute(input: &ScoreInput<'_>) -> Self {
        let bonus = |applies: bool, amount: f64| if applies { amount } else { 0.0 };

        let text_len = input.text.chars().count();
        let excess_len = text_len.saturating_sub(LENGTH_PENALTY_THRESHOLD);

        Self {
            base: BASE_SCORE,
            prefix_bonus: bonus(input.match_index == 0, PREFIX_BONUS),
            multi_letter_bonus: bonus(input.query_len > 1, MULTI_LETTER_BONUS),
            basename_bonus: bonus(input.is_basename_or_primary, BASENAME_BONUS),
            density_bonus: (input.query_len as f64 / input.initials_len.max(1) as f64)
                * DENSITY_WEIGHT,
            full_consumption_bonus: bonus(
                input.query_len == input.initials_len,
                FULL_CONSUMPTION_BONUS,
            ),
            length_penalty: -(excess_len as f64 * LENGTH_PENALTY_PER_CHAR),
            markdown_bonus: bonus(input.text.to_lowercase().ends_with(".md"), MARKDOWN_BONUS),
            position_penalty: -(input.match_index as f64 * POSITION_PENALTY_PER_WORD),
        }
    }

    /// Sum of all terms in their fixed order, floored at [`MIN_SCORE`].
    pub fn total(&self) -> f64 {
        let sum = self.base
            + self.prefix_bonus
            + self.multi_letter_bonus
            + self.basename_bonus
            + self.density_bonus
            + self.full_consumption_bonus
            + self.length_penalty
            + self.markdown_bonus
            + self.position_penalty;
        sum.max(MIN_SCORE)
    }

    /// Labelled terms in evaluation order, for display.
    pub fn terms(&self) -> [(&'static str, f64); 9] {
        [
            ("base", self.base),
            ("prefix", self.prefix_bonus),
            ("multi-letter", self.multi_letter_bonus),
            ("basename", self.basename_bonus),
            ("density", self.density_bonus),
            ("full consumption", self.full_consumption_bonus),
            ("length", self.length_penalty),
            ("markdown", self.markdown_bonus),
            ("position", self.position_penalty),
        ]
    }
}

/// Calculate the acronym relevance score for a located match.
pub fn acronym_score(input: &ScoreInput<'_>) -> f64 {
    ScoreBreakdown::compute(input).total()
}

/// Calculate simple text relevance score.
///
/// Returns a score based on how well the query matches the text:
/// - 100: Exact match
/// - 50: Text starts with query
/// - 10: Text contains query
/// - None: No match
pub fn calculate_relevance(text: &str, query: &str) -> Option<u32> {
    if text == query {
        Some(100)
    } else if text.starts_with(query) {
        Some(50)
    } else if text.contains(query) {
        Some(10)
    } else {
        None
    }
}
