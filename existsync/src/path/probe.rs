//! Link-aware lookup of a single path.
//!
//! The probe asks the operating system about a path without following the
//! final component when it is a symlink. Intermediate symlinks, `.` and `..`
//! are resolved natively by the lookup itself.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::types::{Entry, EntryKind};

/// A link-aware filesystem lookup.
///
/// The walker only talks to the filesystem through this trait, which lets
/// tests drive it with a scripted filesystem.
pub trait Prober {
    /// Classify the entry at `path` without following a final symlink.
    ///
    /// # Errors
    ///
    /// Returns an error for lookup failures other than absence.
    fn probe(&self, path: &Path) -> Result<Entry>;

    /// A stable identity for the symlink at `path`, used to detect revisits.
    ///
    /// # Errors
    ///
    /// Returns an error if the link's directory cannot be resolved.
    fn link_identity(&self, path: &Path) -> Result<PathBuf>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProber;

impl Prober for FsProber {
    fn probe(&self, path: &Path) -> Result<Entry> {
        probe(path)
    }

    fn link_identity(&self, path: &Path) -> Result<PathBuf> {
        crate::path::resolve::link_identity(path)
    }
}

/// Classify the entry at `path` without following a final symlink.
///
/// # Errors
///
/// Returns an error if:
/// - The OS reports a symlink loop in a non-final component (`CyclicSymlink`)
/// - Any other lookup failure occurs (`Io`)
///
/// # Examples
///
/// ```no_run
/// use existsync::path::{probe, Entry};
/// use std::path::Path;
///
/// assert_eq!(probe(Path::new("/no/such/path")).unwrap(), Entry::Absent);
/// ```
pub fn probe(path: &Path) -> Result<Entry> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => return classify_error(path, e),
    };

    let file_type = metadata.file_type();
    if !file_type.is_symlink() {
        return Ok(Entry::Concrete(EntryKind::from_file_type(file_type)));
    }

    match fs::read_link(path) {
        Ok(target) => Ok(Entry::Symlink(target)),
        // Removed between the two calls.
        Err(e) => classify_error(path, e),
    }
}

fn classify_error(path: &Path, e: io::Error) -> Result<Entry> {
    if is_absent(&e) {
        Ok(Entry::Absent)
    } else if is_loop(&e) {
        Err(Error::CyclicSymlink {
            path: path.to_path_buf(),
        })
    } else {
        Err(Error::io(path, e))
    }
}

/// `ENOTDIR` is a failed lookup like any other missing entry.
fn is_absent(e: &io::Error) -> bool {
    if e.kind() == ErrorKind::NotFound {
        return true;
    }
    #[cfg(unix)]
    {
        e.raw_os_error() == Some(libc::ENOTDIR)
    }
    #[cfg(not(unix))]
    {
        false
    }
}

fn is_loop(e: &io::Error) -> bool {
    #[cfg(unix)]
    {
        e.raw_os_error() == Some(libc::ELOOP)
    }
    #[cfg(not(unix))]
    {
        let _ = e;
        false
    }
}
