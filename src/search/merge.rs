//! Search hits and merging of primary and acronym results.

use ahash::{AHashMap, AHashSet};
use serde::Serialize;

use super::highlight::Span;
use super::matcher::{MatchResult, MatchSource};

/// Default number of acronym-only hits kept when merging.
pub const DEFAULT_ACRONYM_CAP: usize = 50;

/// Which search produced a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "origin", content = "source", rename_all = "lowercase")]
pub enum HitOrigin {
    Primary,
    Acronym(MatchSource),
}

/// A ranked result ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    /// Stable identity key (file path or link text).
    pub identity: String,
    /// The text `spans` index into.
    pub text: String,
    pub origin: HitOrigin,
    pub score: f64,
    pub spans: Vec<Span>,
}

impl SearchHit {
    /// Builds a hit from a positive fallback match over `text`.
    pub(crate) fn from_acronym(identity: &str, text: &str, result: MatchResult) -> Option<Self> {
        let source = result.source?;
        result.matched.then(|| Self {
            identity: identity.to_string(),
            text: text.to_string(),
            origin: HitOrigin::Acronym(source),
            score: result.score,
            spans: result.spans,
        })
    }
}

/// Merges acronym hits behind primary hits.
///
/// Acronym hits whose identity already appears among the primary hits are
/// dropped, duplicate identities keep their best score, and the remainder is
/// sorted by score (ties by identity) and truncated to `cap`. Primary hits
/// keep their order and always come first.
pub fn merge_results(
    primary: Vec<SearchHit>,
    acronym: Vec<SearchHit>,
    cap: usize,
) -> Vec<SearchHit> {
    let seen: AHashSet<&str> = primary.iter().map(|hit| hit.identity.as_str()).collect();

    let mut best: AHashMap<String, SearchHit> = AHashMap::with_capacity(acronym.len());
    let mut duplicates = 0usize;
    for hit in acronym {
        if seen.contains(hit.identity.as_str()) {
            duplicates += 1;
            continue;
        }
        match best.get(&hit.identity) {
            Some(existing) if existing.score >= hit.score => {}
            _ => {
                best.insert(hit.identity.clone(), hit);
            }
        }
    }

    let mut extra: Vec<SearchHit> = best.into_iter().map(|(_, hit)| hit).collect();
    extra.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.identity.cmp(&b.identity))
    });
    extra.truncate(cap);

    tracing::debug!(
        primary = primary.len(),
        acronym = extra.len(),
        skipped_duplicates = duplicates,
        "Merged search results"
    );

    let mut merged = primary;
    merged.extend(extra);
    merged
}
