//! Core types for existence checks.
//!
//! This module defines the classification a single probe produces and the
//! result of walking a whole resolution chain.

use std::fmt;
use std::fs::FileType;
use std::path::{Path, PathBuf};

/// The kind of a concrete (non-link) filesystem entry.
///
/// The walker treats every kind alike; the distinction is kept for callers
/// and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Dir,
    /// Anything else that is not a symlink (socket, fifo, device, ...).
    Other,
}

impl EntryKind {
    /// Classify a non-link file type.
    #[must_use]
    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_dir() {
            Self::Dir
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Dir => write!(f, "directory"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Classification of the entry at a path, without following a final symlink.
///
/// # Examples
///
/// ```
/// use existsync::path::{Entry, EntryKind};
/// use std::path::PathBuf;
///
/// let link = Entry::Symlink(PathBuf::from("../taco.js"));
/// assert!(link.is_symlink());
/// assert!(!Entry::Concrete(EntryKind::File).is_symlink());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Nothing exists at the path.
    Absent,
    /// A file, directory or other non-link entry.
    Concrete(EntryKind),
    /// A symbolic link with its raw, unresolved target.
    Symlink(PathBuf),
}

impl Entry {
    /// Whether this entry is a symbolic link.
    #[must_use]
    pub fn is_symlink(&self) -> bool {
        matches!(self, Self::Symlink(_))
    }
}

/// Final outcome of resolving a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The chain ended at a concrete entry.
    Exists(EntryKind),
    /// The chain ended at a path with no entry.
    Missing,
}

impl Outcome {
    /// Whether the outcome is an existing entry.
    #[must_use]
    pub fn exists(self) -> bool {
        matches!(self, Self::Exists(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exists(kind) => write!(f, "exists ({kind})"),
            Self::Missing => write!(f, "missing"),
        }
    }
}

/// The paths visited while resolving one query, and where they led.
///
/// The chain starts at the queried path (absolutized against the working
/// directory) and holds every path that was probed, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    chain: Vec<PathBuf>,
    outcome: Outcome,
}

impl Resolution {
    pub(crate) fn new(chain: Vec<PathBuf>, outcome: Outcome) -> Self {
        Self { chain, outcome }
    }

    /// Paths probed, starting at the query.
    #[must_use]
    pub fn chain(&self) -> &[PathBuf] {
        &self.chain
    }

    /// The last path probed.
    #[must_use]
    pub fn last(&self) -> Option<&Path> {
        self.chain.last().map(PathBuf::as_path)
    }

    /// Number of symlinks followed.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.chain.len().saturating_sub(1)
    }

    /// How the chain ended.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Shorthand for `outcome().exists()`.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.outcome.exists()
    }
}
