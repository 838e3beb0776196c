//! Plain name search used as the primary result source.
//!
//! Stands in for a host's own quick-switcher search: a suggestion matches
//! when its primary text contains the query, case-insensitively.

use super::candidate::Suggestion;
use super::highlight::Span;
use super::merge::{HitOrigin, SearchHit};
use super::scoring::calculate_relevance;
use super::tokenize::fold_case;

/// Finds suggestions whose primary text contains `query`.
///
/// Hits are ordered by relevance (exact, prefix, substring), then identity.
/// Both sides are folded per character, so span offsets found in the folded
/// text hold for the original text.
pub fn primary_search(query: &str, suggestions: &[Suggestion]) -> Vec<SearchHit> {
    let query = fold_case(query.trim());
    if query.is_empty() {
        return Vec::new();
    }
    let query_len = query.chars().count();

    let mut hits: Vec<SearchHit> = suggestions
        .iter()
        .filter_map(|suggestion| {
            let (text, _) = suggestion.match_input();
            let folded = fold_case(text);
            let relevance = calculate_relevance(&folded, &query)?;
            let start = folded
                .find(&query)
                .map_or(0, |byte_idx| folded[..byte_idx].chars().count());

            Some(SearchHit {
                identity: suggestion.identity().to_string(),
                text: text.to_string(),
                origin: HitOrigin::Primary,
                score: f64::from(relevance),
                spans: vec![Span::new(start, start + query_len)],
            })
        })
        .collect();

    hits.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.identity.cmp(&b.identity))
    });
    hits
}
