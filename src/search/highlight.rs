//! Character spans for highlighting matched initials.

use serde::Serialize;

/// A half-open range of character (not byte) offsets into a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A span covering exactly one character.
    pub const fn single(start: usize) -> Self {
        Self::new(start, start + 1)
    }

    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One single-character span per matched word, at that word's approximate
/// offset in the original text.
///
/// Offsets are accumulated from word lengths plus exactly one character per
/// word boundary. Runs of several delimiters, leading delimiters and
/// zero-width case/digit boundaries are therefore not counted precisely; the
/// spans are only advisory.
pub fn highlight_spans(words: &[&str], match_index: usize, query_len: usize) -> Vec<Span> {
    let matched = match_index..match_index.saturating_add(query_len);
    let last = words.len().saturating_sub(1);

    let mut spans = Vec::with_capacity(query_len);
    let mut offset = 0;

    for (i, word) in words.iter().enumerate() {
        if i >= matched.end {
            break;
        }
        if matched.contains(&i) {
            spans.push(Span::single(offset));
        }
        offset += word.chars().count();
        if i < last {
            offset += 1;
        }
    }

    spans
}
