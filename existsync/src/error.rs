//! Error types for the existsync library.
//!
//! A missing path is never an error: it is the `false` answer of
//! [`exists`](crate::exists). The variants here cover the outcomes a caller
//! has to handle explicitly, using `thiserror` for the boilerplate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an existsync error.
///
/// # Examples
///
/// ```
/// use existsync::{Error, Result};
///
/// fn example_operation() -> Result<bool> {
///     Ok(true)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the existsync library.
#[derive(Debug, Error)]
pub enum Error {
    /// A symlink was reached a second time while resolving one path.
    ///
    /// Also raised when the operating system reports a symlink loop in a
    /// non-final component of a probed path.
    #[error("cyclic symlink detected: {}", path.display())]
    CyclicSymlink {
        /// The link at which the cycle was detected.
        path: PathBuf,
    },

    /// The current working directory could not be determined.
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] io::Error),

    /// The underlying filesystem lookup failed for a reason other than
    /// absence.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// The path being looked up.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Check if error is a cyclic symlink.
    ///
    /// # Examples
    ///
    /// ```
    /// use existsync::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::CyclicSymlink { path: PathBuf::from("/tmp/a") };
    /// assert!(err.is_cyclic_symlink());
    /// ```
    #[must_use]
    pub fn is_cyclic_symlink(&self) -> bool {
        matches!(self, Self::CyclicSymlink { .. })
    }

    /// The path the error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::CyclicSymlink { path } | Self::Io { path, .. } => Some(path),
            Self::CurrentDir(_) => None,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
