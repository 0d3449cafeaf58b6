//! Common test utilities for integration tests.
//!
//! This module provides a scratch directory tree builder for exercising
//! existence checks against real files and symlinks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory tree with helpers for files, directories and links.
///
/// The directory will be automatically cleaned up when the fixture is
/// dropped.
pub struct TreeFixture {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path of the temporary directory
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TreeFixture {
    /// Creates an empty tree.
    ///
    /// The root is canonicalized so paths compare equal to what the
    /// filesystem reports (macOS puts temp dirs behind `/var -> /private/var`).
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = fs::canonicalize(temp_dir.path()).expect("Failed to canonicalize temp dir");
        Self { temp_dir, root }
    }

    /// Absolute path of `rel` inside the tree.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    /// Creates a directory (and its parents) inside the tree.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Writes a file inside the tree.
    pub fn file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.path(rel);
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Creates a symlink at `rel` whose raw target is `target`.
    #[cfg(unix)]
    pub fn link(&self, target: impl AsRef<Path>, rel: &str) -> PathBuf {
        let path = self.path(rel);
        std::os::unix::fs::symlink(target, &path).expect("Failed to create symlink");
        path
    }

    /// Removes a file or symlink inside the tree.
    pub fn remove(&self, rel: &str) {
        fs::remove_file(self.path(rel)).expect("Failed to remove test entry");
    }
}

/// Restores the working directory when dropped.
///
/// Tests that change directory must also be `#[serial]`.
#[allow(dead_code)]
pub struct CwdGuard {
    original: PathBuf,
}

#[allow(dead_code)]
impl CwdGuard {
    /// Changes into `dir`, remembering the current directory.
    pub fn enter(dir: impl AsRef<Path>) -> Self {
        let original = std::env::current_dir().expect("Failed to read current dir");
        std::env::set_current_dir(dir).expect("Failed to change directory");
        Self { original }
    }

    /// Changes directory again without giving up the guard.
    pub fn cd(&self, dir: impl AsRef<Path>) {
        std::env::set_current_dir(dir).expect("Failed to change directory");
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}
