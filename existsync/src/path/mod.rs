//! Symlink-aware existence checks.
//!
//! This module answers whether a path exists, following symlink chains of
//! any length and failing loudly on cycles.
//!
//! # Key Concepts
//!
//! ## Probing
//!
//! A probe looks a path up without following its final component. The
//! operating system still resolves intermediate symlinks and `.`/`..`
//! components, so no lexical path surgery happens here. A directory named
//! `tacos..two` is an ordinary segment.
//!
//! ## Resolution
//!
//! A relative link target is joined onto the directory containing the link,
//! not onto the working directory. The working directory is read once, to
//! anchor a relative query.
//!
//! ## Cycle detection
//!
//! Every link followed is recorded by identity (its canonical directory plus
//! its file name). Reaching a recorded link again fails with
//! [`Error::CyclicSymlink`](crate::Error::CyclicSymlink).
//!
//! # Examples
//!
//! ```no_run
//! use existsync::path::{Outcome, Walker};
//! use std::path::Path;
//!
//! let walker = Walker::new();
//! let resolution = walker.trace(Path::new("tmp/link-to-taco.js")).unwrap();
//! for hop in resolution.chain() {
//!     println!("{}", hop.display());
//! }
//! assert!(matches!(resolution.outcome(), Outcome::Exists(_) | Outcome::Missing));
//! ```

pub mod probe;
pub mod resolve;
mod types;
pub mod walker;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use probe::{probe, FsProber, Prober};
pub use resolve::{link_identity, resolve};
pub use types::{Entry, EntryKind, Outcome, Resolution};
pub use walker::Walker;
