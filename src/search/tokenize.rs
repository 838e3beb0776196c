//! Word segmentation and initials extraction for acronym matching.
//!
//! A candidate text such as `MyFirstComponent.jsx` is split into words
//! (`My`, `First`, `Component`, `jsx`) and reduced to the lower-cased first
//! letter of each word (`mfcj`). Queries are then located inside that
//! initials string.

use std::fmt;

/// Returns true for characters that separate words inside a stem.
/// Consecutive delimiters collapse into a single split point.
fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '-' | '_' | '.')
}

/// Zero-width word boundary between two adjacent characters of a fragment.
///
/// - lowercase → uppercase: `myFile` → `my` | `File`
/// - letter → digit: `file2` → `file` | `2`
/// - digit → letter: `2fa` → `2` | `fa`
fn is_boundary(prev: char, next: char) -> bool {
    (prev.is_lowercase() && next.is_uppercase())
        || (prev.is_alphabetic() && next.is_ascii_digit())
        || (prev.is_ascii_digit() && next.is_alphabetic())
}

/// Lower-cases one character, keeping only the first char when the
/// lowercase form expands (`İ` → `i`).
pub fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Lower-cases `text` one character at a time with [`fold_char`].
///
/// Unlike `str::to_lowercase` the result has exactly as many chars as the
/// input and no context-dependent forms (final sigma), so character offsets
/// into the folded text are also offsets into the original.
pub fn fold_case(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

/// Splits `text` at its last `.` into a stem and an extension.
///
/// Only the final dot-segment is treated as an extension, so
/// `archive.tar.gz` yields (`archive.tar`, `gz`). Text without a dot has no
/// extension. The extension may be empty (`notes.`); callers discard it.
pub fn split_extension(text: &str) -> (&str, Option<&str>) {
    match text.rfind('.') {
        Some(dot) => (&text[..dot], Some(&text[dot + 1..])),
        None => (text, None),
    }
}

/// Splits text into an ordered sequence of non-empty words.
///
/// The stem is split on runs of whitespace, `-`, `_` and `.`, then every
/// fragment is split further at case and digit transitions. The extension,
/// if any, is appended as one final word without further splitting.
///
/// Every returned word borrows from `text`, in left-to-right order.
pub fn segment(text: &str) -> Vec<&str> {
    let mut words = Vec::new();
    if text.is_empty() {
        return words;
    }

    let (stem, extension) = split_extension(text);

    for fragment in stem.split(is_delimiter).filter(|f| !f.is_empty()) {
        split_fragment(fragment, &mut words);
    }

    if let Some(extension) = extension.filter(|ext| !ext.is_empty()) {
        words.push(extension);
    }

    words
}

/// Pushes the sub-words of a delimiter-free, non-empty fragment.
fn split_fragment<'a>(fragment: &'a str, words: &mut Vec<&'a str>) {
    let mut word_start = 0;
    let mut prev = None;

    for (i, c) in fragment.char_indices() {
        if let Some(p) = prev
            && is_boundary(p, c)
        {
            words.push(&fragment[word_start..i]);
            word_start = i;
        }
        prev = Some(c);
    }

    words.push(&fragment[word_start..]);
}

/// The lower-cased first character of every word, in word order.
///
/// Each position corresponds to exactly one word, so a position in the
/// initials is also a word index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Initials(Vec<char>);

impl Initials {
    fn from_words(words: &[&str]) -> Self {
        let initials = words
            .iter()
            .filter_map(|word| word.chars().next())
            .map(fold_char)
            .collect::<Vec<_>>();
        debug_assert_eq!(initials.len(), words.len());
        Self(initials)
    }

    /// Number of initials (equal to the number of words).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_chars(&self) -> &[char] {
        &self.0
    }

    /// Leftmost occurrence of `query` as a contiguous run of initials.
    ///
    /// Returns the word index where the run starts. An empty query is found
    /// at index 0, mirroring `str::find("")`.
    pub fn locate(&self, query: &[char]) -> Option<usize> {
        if query.is_empty() {
            return Some(0);
        }
        self.0.windows(query.len()).position(|window| window == query)
    }
}

impl fmt::Display for Initials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// A candidate text's words together with the initials derived from them.
///
/// The initials are built once from the word list and cannot be replaced
/// independently of it.
#[derive(Debug, Clone)]
pub struct Segmentation<'a> {
    words: Vec<&'a str>,
    initials: Initials,
}

impl<'a> Segmentation<'a> {
    pub fn new(text: &'a str) -> Self {
        let words = segment(text);
        let initials = Initials::from_words(&words);
        Self { words, initials }
    }

    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    pub fn initials(&self) -> &Initials {
        &self.initials
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("MyFirstComponent.jsx", &["My", "First", "Component", "jsx"])]
    #[case("get_the_score.txt", &["get", "the", "score", "txt"])]
    #[case("xaybzc.txt", &["xaybzc", "txt"])]
    #[case("archive.tar.gz", &["archive", "tar", "gz"])]
    #[case("my-notes  draft.md", &["my", "notes", "draft", "md"])]
    #[case("file2fa", &["file", "2", "fa"])]
    #[case("HTTPServer", &["HTTPServer"])]
    #[case("parseJSON2", &["parse", "JSON", "2"])]
    #[case("README", &["README"])]
    #[case(".gitignore", &["gitignore"])]
    #[case("--__..", &[])]
    #[case("notes.", &["notes"])]
    #[case("", &[])]
    fn test_segment(#[case] input: &str, #[case] expected: &[&str]) {
        check!(segment(input) == expected);
    }

    #[rstest]
    #[case("archive.tar.gz", "archive.tar", Some("gz"))]
    #[case("README", "README", None)]
    #[case("notes.", "notes", Some(""))]
    fn test_split_extension(
        #[case] input: &str,
        #[case] stem: &str,
        #[case] extension: Option<&str>,
    ) {
        check!(split_extension(input) == (stem, extension));
    }

    #[rstest]
    #[case("MyFirstComponent.jsx")]
    #[case("get_the_score.txt")]
    #[case("  lots -- of__delims..here.rs")]
    #[case("v2Release3Notes")]
    #[case("Ünïcödé-Wörds.md")]
    fn test_words_rebuild_text_without_delimiters(#[case] input: &str) {
        let stripped: String = input.chars().filter(|c| !is_delimiter(*c)).collect();
        check!(segment(input).concat() == stripped);
    }

    #[test]
    fn test_words_never_empty() {
        for text in ["a", "_a_", "a..b", " . ", "A1b2C3"] {
            check!(segment(text).iter().all(|w| !w.is_empty()), "{text}");
        }
    }

    #[rstest]
    #[case("MyFirstComponent.jsx", "mfcj")]
    #[case("get_the_score.txt", "gtst")]
    #[case("xaybzc.txt", "xt")]
    #[case("Éclair-Straße", "és")]
    #[case("", "")]
    fn test_initials(#[case] input: &str, #[case] expected: &str) {
        let segmentation = Segmentation::new(input);
        check!(segmentation.initials().to_string() == expected);
        check!(segmentation.initials().len() == segmentation.words().len());
    }

    #[rstest]
    #[case("İİnotes.md", "iinotes.md")]
    #[case("ΑΣ", "ασ")]
    #[case("MyFile", "myfile")]
    fn test_fold_case_keeps_char_count(#[case] input: &str, #[case] expected: &str) {
        let folded = fold_case(input);
        check!(folded == expected);
        check!(folded.chars().count() == input.chars().count());
    }

    #[rstest]
    #[case("mfcj", "mfc", Some(0))]
    #[case("gtst", "ts", Some(1))]
    #[case("abab", "ab", Some(0))]
    #[case("xt", "abc", None)]
    #[case("ab", "abc", None)]
    #[case("abc", "", Some(0))]
    fn test_locate(#[case] initials: &str, #[case] query: &str, #[case] expected: Option<usize>) {
        let initials = Initials(initials.chars().collect());
        let query: Vec<char> = query.chars().collect();
        check!(initials.locate(&query) == expected);
    }
}
