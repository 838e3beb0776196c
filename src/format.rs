//! Text and JSON rendering of search results.

use crate::error::Result;
use crate::search::{
    AcronymMatcher, HitOrigin, MatchSource, PathSegments, ScoreBreakdown, SearchHit, Segmentation,
    Span,
};
use crate::search::scoring::ScoreInput;
use std::fmt::Write as _;

const HIGHLIGHT_OPEN: char = '[';
const HIGHLIGHT_CLOSE: char = ']';

/// Wraps each span of `text` in brackets. Spans are character offsets;
/// empty spans and spans reaching past the end of `text` are ignored.
pub fn highlight(text: &str, spans: &[Span]) -> String {
    let char_count = text.chars().count();
    let spans: Vec<&Span> = spans
        .iter()
        .filter(|span| !span.is_empty() && span.end <= char_count)
        .collect();

    let mut output = String::with_capacity(text.len() + spans.len() * 2);
    for (i, c) in text.chars().enumerate() {
        if spans.iter().any(|span| span.start == i) {
            output.push(HIGHLIGHT_OPEN);
        }
        output.push(c);
        if spans.iter().any(|span| span.end == i + 1) {
            output.push(HIGHLIGHT_CLOSE);
        }
    }
    output
}

fn origin_label(origin: HitOrigin) -> &'static str {
    match origin {
        HitOrigin::Primary => "name",
        HitOrigin::Acronym(MatchSource::Primary) => "acronym",
        HitOrigin::Acronym(MatchSource::Basename) => "acronym (basename)",
        HitOrigin::Acronym(MatchSource::Path) => "acronym (path)",
    }
}

/// Format search hits into a numbered listing.
pub fn render_hits(query: &str, hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return format!("No results found for '{}'.\n", query.trim());
    }

    let mut output = format!("Results for '{}':\n\n", query.trim());
    for (idx, hit) in hits.iter().enumerate() {
        let _ = writeln!(
            output,
            "{}. {} - {}, score {:.2}",
            idx + 1,
            highlight(&hit.text, &hit.spans),
            origin_label(hit.origin),
            hit.score
        );
        if hit.text != hit.identity {
            let _ = writeln!(output, "   {}", hit.identity);
        }
    }
    output
}

pub fn render_json(hits: &[SearchHit]) -> Result<String> {
    Ok(serde_json::to_string_pretty(hits)?)
}

/// Step-by-step account of how `query` matches one candidate.
pub fn render_explanation(
    query: &str,
    primary: &str,
    segments: Option<PathSegments<'_>>,
) -> String {
    let matcher = AcronymMatcher::new(query);
    if !matcher.has_search_term() {
        return "Query is empty; nothing can match.\n".to_string();
    }

    let mut output = format!("Query: '{}'\n", matcher.query());
    describe_text(&mut output, "Primary", primary);
    if let Some(segments) = segments {
        describe_text(&mut output, "Basename", segments.basename);
        describe_text(&mut output, "Path", segments.path);
    }

    let result = matcher.search_with_fallback(primary, segments);
    let (Some(source), Some(match_index)) = (result.source, result.match_index) else {
        output.push_str("\nNo match.\n");
        return output;
    };

    let (text, is_basename_or_primary) = match (source, segments) {
        (MatchSource::Basename, Some(segments)) => (segments.basename, true),
        (MatchSource::Path, Some(segments)) => (segments.path, false),
        _ => (primary, true),
    };
    let segmentation = Segmentation::new(text);
    let breakdown = ScoreBreakdown::compute(&ScoreInput {
        initials_len: segmentation.initials().len(),
        query_len: matcher.query().chars().count(),
        match_index,
        text,
        is_basename_or_primary,
    });

    let _ = writeln!(
        output,
        "\nMatched {:?} text at word {}: {}",
        source,
        match_index,
        highlight(text, &result.spans)
    );
    for (label, value) in breakdown.terms() {
        if value != 0.0 {
            let _ = writeln!(output, "  {:<18}{:+.2}", label, value);
        }
    }
    let _ = writeln!(output, "  {:<18}{:.2}", "score", result.score);

    output
}

fn describe_text(output: &mut String, label: &str, text: &str) {
    let segmentation = Segmentation::new(text);
    let _ = writeln!(
        output,
        "{}: '{}'\n  words:    {:?}\n  initials: {}",
        label,
        text,
        segmentation.words(),
        segmentation.initials()
    );
}
