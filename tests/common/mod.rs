//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `notes_vault`: a temporary directory laid out like a small notes vault
//!   with source files, markdown notes, a hidden directory and a
//!   `.gitignore`d build directory.
//!
//! [`TempWorkspace`] provides the underlying temp directory abstraction for
//! any test that needs filesystem isolation.

use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary workspace directory for test isolation.
///
/// Provides basic filesystem operations within a temp directory that is
/// automatically cleaned up when dropped.
///
/// # Example
///
/// ```ignore
/// let workspace = TempWorkspace::new();
/// workspace.create_file("notes/todo.md", "- [ ] write tests");
/// assert!(workspace.path().join("notes/todo.md").exists());
/// ```
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempWorkspace {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempWorkspace {
    /// Creates a new empty temporary workspace.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    /// Returns the root path of this workspace.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Creates a file with the given content within this workspace.
    ///
    /// Parent directories are created automatically if they don't exist.
    ///
    /// # Panics
    /// Panics if file creation fails.
    pub fn create_file(&self, path: &str, content: &str) {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
    }

    /// Creates several empty files at once.
    pub fn create_files(&self, paths: &[&str]) {
        for path in paths {
            self.create_file(path, "");
        }
    }
}

/// Files created by the [`notes_vault`] fixture, excluding ignored and hidden ones.
#[allow(dead_code)]
pub const VAULT_VISIBLE_FILES: &[&str] = &[
    "daily/2024-01-01.md",
    "notes/meeting-notes.md",
    "notes/project-plan.md",
    "src/components/MyFirstComponent.jsx",
    "src/get_the_score.txt",
    "src/xaybzc.txt",
];

/// A small vault of notes and source files.
#[fixture]
pub fn notes_vault() -> TempWorkspace {
    let workspace = TempWorkspace::new();
    workspace.create_files(VAULT_VISIBLE_FILES);
    workspace.create_files(&[".obsidian/workspace-state.json", "build/MyFirstComponent.js"]);
    workspace.create_file(".gitignore", "build/\n");
    workspace
}
