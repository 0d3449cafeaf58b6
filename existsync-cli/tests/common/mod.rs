//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers that run inside the environment
//! - Fixture helpers for files and symlinks

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated scratch directory.
///
/// Commands built from it run with the scratch directory as their working
/// directory, so tests can pass relative paths.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a bare command builder without environment isolation.
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("existsync").expect("Failed to find existsync binary")
    }

    /// Get a command builder running inside the scratch directory.
    ///
    /// Environment variables that change output are cleared so the host
    /// environment cannot leak into assertions.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.current_dir(&self.temp_path)
            .env_remove("EXISTSYNC_FORMAT")
            .env_remove("EXISTSYNC_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file in the test environment.
    pub fn create_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Create a symlink at `name` with the raw target `target`.
    #[cfg(unix)]
    pub fn symlink(&self, target: &str, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::os::unix::fs::symlink(target, &path).expect("Failed to create symlink");
        path
    }

    /// The tree most tests start from:
    ///
    /// ```text
    /// tmp/taco.js
    /// tmp/link-to-taco.js -> taco.js
    /// ```
    #[cfg(unix)]
    pub fn with_taco_tree(self) -> Self {
        self.create_dir("tmp");
        self.create_file("tmp/taco.js", "TACO!");
        self.symlink("taco.js", "tmp/link-to-taco.js");
        self
    }

    /// Add a two-link cycle `tmp/ping.js <-> tmp/pong.js`.
    #[cfg(unix)]
    pub fn with_cycle(self) -> Self {
        self.create_dir("tmp");
        self.symlink("pong.js", "tmp/ping.js");
        self.symlink("ping.js", "tmp/pong.js");
        self
    }
}
