//! Testing utilities for rebrand
//!
//! Helpers for building throwaway source trees in tests. Backed by
//! `tempfile` so fixtures disappear when dropped.
//!
//! Only available when compiled with `cfg(test)`.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree that cleans up on drop
///
/// # Examples
/// ```ignore
/// let tree = TempTree::new();
/// tree.file("src/Foo.java", "package com.old;");
/// assert!(tree.exists("src/Foo.java"));
/// ```
pub struct TempTree {
    dir: TempDir,
}

impl TempTree {
    /// Create a fresh empty tree.
    ///
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Root path of the tree
    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a relative entry
    #[must_use]
    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Create a file (and its parent directories) with the given content.
    ///
    /// # Panics
    /// Panics on I/O failure; fixtures are expected to be writable.
    pub fn file(&self, rel: &str, content: &str) -> &Self {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directories");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
        self
    }

    /// Create an empty directory (and its parents).
    ///
    /// # Panics
    /// Panics on I/O failure.
    pub fn dir(&self, rel: &str) -> &Self {
        fs::create_dir_all(self.path(rel)).expect("Failed to create fixture directory");
        self
    }

    /// Read a file's content as a string.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    #[must_use]
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).expect("Failed to read fixture file")
    }

    /// Whether a relative entry exists
    #[must_use]
    pub fn exists(&self, rel: &str) -> bool {
        self.path(rel).exists()
    }

    /// Collect every file in the tree as (relative path, content) pairs,
    /// sorted by path. Useful for before/after snapshots.
    ///
    /// # Panics
    /// Panics if the tree cannot be walked.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(String, String)> {
        let mut files = Vec::new();
        collect_files(self.root(), self.root(), &mut files);
        files.sort();
        files
    }
}

impl Default for TempTree {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_files(dir: &Path, root: &Path, files: &mut Vec<(String, String)>) {
    for entry in fs::read_dir(dir).expect("Failed to list fixture directory") {
        let path = entry.expect("Failed to read fixture entry").path();
        if path.is_dir() {
            collect_files(&path, root, files);
        } else {
            let rel = path
                .strip_prefix(root)
                .expect("Fixture entry outside root")
                .to_string_lossy()
                .into_owned();
            let content = fs::read_to_string(&path).unwrap_or_default();
            files.push((rel, content));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_builds_nested_files() {
        let tree = TempTree::new();
        tree.file("a/b/c.txt", "hello").dir("empty");

        assert!(tree.exists("a/b/c.txt"));
        assert!(tree.exists("empty"));
        assert_eq!(tree.read("a/b/c.txt"), "hello");
    }

    #[test]
    fn snapshot_lists_files_sorted() {
        let tree = TempTree::new();
        tree.file("b.txt", "2").file("a/x.txt", "1");

        let snapshot = tree.snapshot();
        assert_eq!(
            snapshot,
            vec![
                ("a/x.txt".to_string(), "1".to_string()),
                ("b.txt".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn tree_cleans_up_on_drop() {
        let root;
        {
            let tree = TempTree::new();
            tree.file("f.txt", "x");
            root = tree.root().to_path_buf();
        }
        assert!(!root.exists());
    }
}
