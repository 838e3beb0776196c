//! Candidates offered to the matcher.
//!
//! A quick switcher lists more than files: alternate titles of files and
//! link targets that do not exist yet. The matcher only ever sees plain
//! text plus optional [`PathSegments`]; this module maps each kind of
//! suggestion to those inputs.

use serde::Serialize;

/// Basename and full path of a file, used as fallback match targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSegments<'a> {
    pub basename: &'a str,
    pub path: &'a str,
}

/// A file in the searched corpus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FileCandidate {
    /// Path relative to the corpus root, `/`-separated.
    pub path: String,
    /// File name including extension.
    pub name: String,
    /// File name without its final extension.
    pub basename: String,
}

impl FileCandidate {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = path.rsplit('/').next().unwrap_or(path.as_str()).to_string();
        let basename = match name.rfind('.') {
            Some(dot) if dot > 0 => name[..dot].to_string(),
            _ => name.clone(),
        };
        Self {
            path,
            name,
            basename,
        }
    }

    pub fn segments(&self) -> PathSegments<'_> {
        PathSegments {
            basename: &self.basename,
            path: &self.path,
        }
    }
}

/// Something a switcher can list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Suggestion {
    File(FileCandidate),
    /// An alternate title that opens `file`.
    Alias { alias: String, file: FileCandidate },
    /// A link target with no backing file.
    Unresolved { link: String },
}

impl Suggestion {
    /// Primary text and fallback segments handed to the matcher.
    pub fn match_input(&self) -> (&str, Option<PathSegments<'_>>) {
        match self {
            Self::File(file) => (&file.name, Some(file.segments())),
            Self::Alias { alias, file } => (alias, Some(file.segments())),
            Self::Unresolved { link } => (link, None),
        }
    }

    /// Stable key used to deduplicate results across search sources.
    pub fn identity(&self) -> &str {
        match self {
            Self::File(file) | Self::Alias { file, .. } => &file.path,
            Self::Unresolved { link } => link,
        }
    }
}

impl From<FileCandidate> for Suggestion {
    fn from(file: FileCandidate) -> Self {
        Self::File(file)
    }
}
