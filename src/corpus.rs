//! Collects file candidates from a directory tree.

use crate::error::{Error, Result};
use crate::search::FileCandidate;
use ignore::WalkBuilder;
use std::path::Path;
use std::time::Instant;

/// Filters applied while walking the corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Include dot-files and dot-directories.
    pub include_hidden: bool,
    /// Allowed extensions without the leading dot; empty allows all files.
    pub extensions: Vec<String>,
}

impl ScanOptions {
    fn accepts(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
            })
    }
}

/// Walks `root` and returns every accepted file, sorted by relative path.
///
/// `.gitignore` and `.ignore` files are honoured even outside a git
/// repository. Entries that cannot be read are logged and skipped.
pub fn scan(root: &Path, options: &ScanOptions) -> Result<Vec<FileCandidate>> {
    if !root.is_dir() {
        return Err(Error::RootNotFound(root.to_path_buf()));
    }

    let start = Instant::now();
    let mut files = Vec::new();

    let walker = WalkBuilder::new(root)
        .hidden(!options.include_hidden)
        .require_git(false)
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        if !options.accepts(path) {
            continue;
        }

        if let Ok(relative) = path.strip_prefix(root) {
            files.push(FileCandidate::new(to_slash_path(relative)));
        }
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));

    tracing::debug!(
        root = %root.display(),
        files = files.len(),
        "Scanned corpus in {:?}",
        start.elapsed()
    );

    Ok(files)
}

/// Joins path components with `/` regardless of platform.
fn to_slash_path(path: &Path) -> String {
    path.components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
