//! Runs primary and acronym search over a set of suggestions.

use std::time::Instant;

use super::candidate::{PathSegments, Suggestion};
use super::matcher::{AcronymMatcher, MatchSource};
use super::merge::{DEFAULT_ACRONYM_CAP, SearchHit, merge_results};
use super::primary::primary_search;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinderOptions {
    /// Maximum number of acronym-only hits kept after deduplication.
    pub acronym_cap: usize,
    /// Whether to run the primary name search.
    pub primary: bool,
}

impl Default for FinderOptions {
    fn default() -> Self {
        Self {
            acronym_cap: DEFAULT_ACRONYM_CAP,
            primary: true,
        }
    }
}

/// Query-bound search over suggestion lists.
#[derive(Debug, Clone)]
pub struct Finder {
    matcher: AcronymMatcher,
    options: FinderOptions,
}

impl Finder {
    pub fn new(query: &str, options: FinderOptions) -> Self {
        Self {
            matcher: AcronymMatcher::new(query),
            options,
        }
    }

    pub fn matcher(&self) -> &AcronymMatcher {
        &self.matcher
    }

    /// Acronym hits for every suggestion, unsorted and uncapped.
    pub fn acronym_hits(&self, suggestions: &[Suggestion]) -> Vec<SearchHit> {
        if !self.matcher.has_search_term() {
            return Vec::new();
        }

        suggestions
            .iter()
            .filter_map(|suggestion| {
                let (text, segments) = suggestion.match_input();
                let result = self.matcher.search_with_fallback(text, segments);
                let matched_text = matched_text(text, segments, result.source?);
                SearchHit::from_acronym(suggestion.identity(), matched_text, result)
            })
            .collect()
    }

    /// Primary hits followed by capped, deduplicated acronym hits.
    pub fn find(&self, suggestions: &[Suggestion]) -> Vec<SearchHit> {
        let start = Instant::now();

        let primary = if self.options.primary {
            primary_search(self.matcher.query(), suggestions)
        } else {
            Vec::new()
        };
        let acronym = self.acronym_hits(suggestions);

        tracing::debug!(
            query = self.matcher.query(),
            candidates = suggestions.len(),
            primary = primary.len(),
            acronym = acronym.len(),
            "Search completed in {:?}",
            start.elapsed()
        );

        merge_results(primary, acronym, self.options.acronym_cap)
    }
}

/// The text a match's spans refer to.
fn matched_text<'a>(
    primary: &'a str,
    segments: Option<PathSegments<'a>>,
    source: MatchSource,
) -> &'a str {
    match (source, segments) {
        (MatchSource::Basename, Some(segments)) => segments.basename,
        (MatchSource::Path, Some(segments)) => segments.path,
        _ => primary,
    }
}
