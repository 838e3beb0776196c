//! Acronym matching for file names and paths.
//!
//! A query like `mfc` matches `MyFirstComponent.jsx` because it spells the
//! initials of the words in the name. See [`search::AcronymMatcher`].

pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod format;
pub mod search;
pub mod tracing;

pub use config::Config;
pub use error::{Error, Result};
pub use search::{
    AcronymMatcher, FileCandidate, Finder, FinderOptions, MatchResult, MatchSource, PathSegments,
    SearchHit, Span, Suggestion,
};
