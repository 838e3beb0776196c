//! Acronym matching of one query against one candidate text.

use serde::Serialize;

use super::candidate::PathSegments;
use super::highlight::{Span, highlight_spans};
use super::scoring::{ScoreInput, acronym_score};
use super::tokenize::{Segmentation, fold_case};

/// Which text of the fallback chain produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchSource {
    Primary,
    Basename,
    Path,
}

/// Outcome of matching a query against a candidate.
///
/// A positive match always has `score >= MIN_SCORE` and at least one span.
/// "No match" has `score == 0.0`, no spans and no match index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub matched: bool,
    pub match_index: Option<usize>,
    pub score: f64,
    /// Character spans into the text that matched (see `source`).
    pub spans: Vec<Span>,
    /// Set by [`AcronymMatcher::search_with_fallback`].
    pub source: Option<MatchSource>,
}

impl MatchResult {
    pub const fn no_match() -> Self {
        Self {
            matched: false,
            match_index: None,
            score: 0.0,
            spans: Vec::new(),
            source: None,
        }
    }

    fn with_source(mut self, source: MatchSource) -> Self {
        self.source = Some(source);
        self
    }
}

/// Matches a fixed query against the word initials of candidate texts.
///
/// The query is trimmed and lower-cased once, character by character like
/// the initials it is compared against; an empty query makes the
/// matcher inert. Holds no other state, so a single matcher can be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct AcronymMatcher {
    query: String,
    query_chars: Vec<char>,
}

impl AcronymMatcher {
    pub fn new(query: &str) -> Self {
        let query = fold_case(query.trim());
        let query_chars = query.chars().collect();
        Self { query, query_chars }
    }

    /// False when the query was empty or whitespace-only.
    pub fn has_search_term(&self) -> bool {
        !self.query_chars.is_empty()
    }

    /// The normalized query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Matches the query against the initials of `text`.
    pub fn search(&self, text: &str, is_basename_or_primary: bool) -> MatchResult {
        if !self.has_search_term() || text.is_empty() {
            return MatchResult::no_match();
        }

        let segmentation = Segmentation::new(text);
        let initials = segmentation.initials();

        let Some(match_index) = initials.locate(&self.query_chars) else {
            return MatchResult::no_match();
        };

        let query_len = self.query_chars.len();
        let score = acronym_score(&ScoreInput {
            initials_len: initials.len(),
            query_len,
            match_index,
            text,
            is_basename_or_primary,
        });
        let spans = highlight_spans(segmentation.words(), match_index, query_len);

        tracing::trace!(
            query = %self.query,
            text,
            initials = %initials,
            match_index,
            score,
            "Acronym match"
        );

        MatchResult {
            matched: true,
            match_index: Some(match_index),
            score,
            spans,
            source: None,
        }
    }

    /// Tries the primary text, then the basename, then the full path, and
    /// returns the first match.
    pub fn search_with_fallback(
        &self,
        primary: &str,
        segments: Option<PathSegments<'_>>,
    ) -> MatchResult {
        if !self.has_search_term() {
            return MatchResult::no_match();
        }

        let result = self.search(primary, true);
        if result.matched {
            return result.with_source(MatchSource::Primary);
        }

        let Some(segments) = segments else {
            return MatchResult::no_match();
        };

        let result = self.search(segments.basename, true);
        if result.matched {
            return result.with_source(MatchSource::Basename);
        }

        let result = self.search(segments.path, false);
        if result.matched {
            return result.with_source(MatchSource::Path);
        }

        MatchResult::no_match()
    }
}
