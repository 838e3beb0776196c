//! Acronym search over file names and paths.
//!
//! Texts are split into words, reduced to their initials and searched for
//! the query as a contiguous run of initials. Matches are scored, mapped to
//! highlight spans, and merged behind a plain name search.

// Module declarations
pub mod candidate;
pub mod finder;
pub mod highlight;
pub mod matcher;
pub mod merge;
pub mod primary;
pub mod scoring;
pub mod tokenize;

// Public re-exports (used via lib.rs)
pub use candidate::{FileCandidate, PathSegments, Suggestion};
pub use finder::{Finder, FinderOptions};
pub use highlight::Span;
pub use matcher::{AcronymMatcher, MatchResult, MatchSource};
pub use merge::{DEFAULT_ACRONYM_CAP, HitOrigin, SearchHit, merge_results};
pub use scoring::{MIN_SCORE, ScoreBreakdown};
pub use tokenize::{Initials, Segmentation};
