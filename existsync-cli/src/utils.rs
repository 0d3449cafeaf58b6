//! Utility functions for CLI operations.
//!
//! This module provides the options shared by every command and the
//! output helpers they use.

use crate::error::CliError;
use existsync::Logger;
use clap::builder::{OsStringValueParser, TypedValueParser};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

impl GlobalOptions {
    /// The stderr logger these flags select, falling back to
    /// `EXISTSYNC_LOG_MODE` when neither flag is set.
    pub fn logger(&self) -> Logger {
        existsync::init_logger(self.verbose, self.quiet)
    }
}

/// Render a path for display, lossily for non-UTF-8 names.
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Path parser that lets empty values through to [`require_path`].
pub fn path_parser() -> impl TypedValueParser<Value = PathBuf> {
    OsStringValueParser::new().map(PathBuf::from)
}

/// Reject an empty path argument.
///
/// The library answers `false` for an empty path; on the command line it is
/// almost always an unset shell variable.
pub fn require_path(path: &Path) -> Result<(), CliError> {
    if path.as_os_str().is_empty() {
        return Err(CliError::InvalidArguments("path must not be empty".into()));
    }
    Ok(())
}

/// Write `value` as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
