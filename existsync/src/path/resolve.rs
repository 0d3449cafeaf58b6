//! Symlink target resolution.
//!
//! Relative link targets are interpreted against the directory containing
//! the link, never against the process working directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Compute the path a symlink points to.
///
/// Absolute targets are returned unchanged. Relative targets are joined onto
/// the link's containing directory. No `.`/`..` elimination happens here;
/// the next probe lets the operating system interpret them.
///
/// # Examples
///
/// ```
/// use existsync::path::resolve;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve(Path::new("/tmp/tacos/link"), Path::new("../taco.js"));
/// assert_eq!(resolved, PathBuf::from("/tmp/tacos/../taco.js"));
///
/// let resolved = resolve(Path::new("/tmp/tacos/link"), Path::new("/etc/hosts"));
/// assert_eq!(resolved, PathBuf::from("/etc/hosts"));
/// ```
#[must_use]
pub fn resolve(link: &Path, target: &Path) -> PathBuf {
    if target.is_absolute() {
        return target.to_path_buf();
    }
    containing_dir(link).join(target)
}

/// The directory holding `link`; `.` for a bare file name.
fn containing_dir(link: &Path) -> &Path {
    match link.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// A stable identity for the symlink at `link`.
///
/// The link's directory is canonicalized and the link's own file name is
/// appended, so the same link yields the same key however it was reached
/// (through a sibling-directory link, via `a/../a/`, ...). The link itself is
/// not followed.
///
/// # Errors
///
/// Returns an error if the containing directory cannot be canonicalized.
///
/// # Examples
///
/// ```no_run
/// use existsync::path::link_identity;
/// use std::path::Path;
///
/// let id = link_identity(Path::new("/tmp/../tmp/link")).unwrap();
/// assert!(id.is_absolute());
/// ```
pub fn link_identity(link: &Path) -> Result<PathBuf> {
    let dir = containing_dir(link);
    let canonical_dir = fs::canonicalize(dir).map_err(|e| Error::io(dir, e))?;

    Ok(match link.file_name() {
        Some(name) => canonical_dir.join(name),
        None => canonical_dir,
    })
}
