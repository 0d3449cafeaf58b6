#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # existsync
//!
//! Synchronous existence checks that see through symlinks.
//!
//! [`exists`] follows a path through any chain of symbolic links, resolving
//! relative targets against each link's own directory, and reports whether
//! the chain ends at a real entry. A chain that loops back on itself fails
//! with [`Error::CyclicSymlink`] rather than answering `false`.
//!
//! ## Core Types
//!
//! - [`Walker`]: the cycle-guarded resolver behind [`exists`] and [`trace`]
//! - [`Entry`] and [`EntryKind`]: what a single lookup found
//! - [`Resolution`] and [`Outcome`]: the chain followed and where it ended
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use existsync::exists;
//!
//! match exists("./tmp/link-to-taco.js") {
//!     Ok(true) => println!("found"),
//!     Ok(false) => println!("missing"),
//!     Err(e) if e.is_cyclic_symlink() => eprintln!("broken link cycle: {e}"),
//!     Err(e) => eprintln!("lookup failed: {e}"),
//! }
//! ```

pub mod error;
pub mod logging;
pub mod path;

use std::path::Path;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{Entry, EntryKind, Outcome, Resolution, Walker};

/// Check whether `path` exists, following symlinks.
///
/// Relative paths are anchored at the current working directory at call
/// time. A missing entry anywhere along the chain yields `Ok(false)`.
///
/// # Errors
///
/// Returns [`Error::CyclicSymlink`] if resolving the path revisits a link,
/// and [`Error::Io`] for lookup failures other than absence.
pub fn exists(path: impl AsRef<Path>) -> Result<bool> {
    Walker::new().exists(path.as_ref())
}

/// Resolve `path` like [`exists`] and return the chain of paths probed.
///
/// # Errors
///
/// Same as [`exists`].
pub fn trace(path: impl AsRef<Path>) -> Result<Resolution> {
    Walker::new().trace(path.as_ref())
}
