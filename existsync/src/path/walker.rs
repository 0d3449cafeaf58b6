//! Cycle-guarded symlink walking.
//!
//! The walker probes a path, follows it while it is a symlink, and stops at
//! the first concrete or absent entry. Each link's identity goes into a
//! visited set built fresh for the call; meeting a link twice is reported as
//! [`Error::CyclicSymlink`] instead of looping.

use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::probe::{FsProber, Prober};
use crate::path::resolve::resolve;
use crate::path::types::{Entry, Outcome, Resolution};

/// Resolves paths through symlink chains with cycle detection.
///
/// # Examples
///
/// ```no_run
/// use existsync::path::Walker;
/// use std::path::Path;
///
/// let walker = Walker::new();
/// let found = walker.exists(Path::new("./tmp/link-to-taco.js")).unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct Walker<P = FsProber> {
    prober: P,
}

impl Walker<FsProber> {
    /// Create a walker over the real filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: Prober> Walker<P> {
    /// Create a walker that uses the given prober.
    #[must_use]
    pub fn with_prober(prober: P) -> Self {
        Self { prober }
    }

    /// Check whether `path` resolves to an existing entry.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A symlink is revisited while resolving (`CyclicSymlink`)
    /// - The working directory is needed but unreadable (`CurrentDir`)
    /// - A lookup fails for a reason other than absence (`Io`)
    pub fn exists(&self, path: &Path) -> Result<bool> {
        self.trace(path).map(|resolution| resolution.exists())
    }

    /// Resolve `path` and report every path probed on the way.
    ///
    /// # Errors
    ///
    /// Same as [`Walker::exists`].
    pub fn trace(&self, path: &Path) -> Result<Resolution> {
        if path.as_os_str().is_empty() {
            return Ok(Resolution::new(Vec::new(), Outcome::Missing));
        }

        let mut current = absolutize(path)?;
        let mut visited = HashSet::new();
        let mut chain = Vec::new();

        loop {
            let entry = self.prober.probe(&current)?;
            log::debug!("probe {}: {entry:?}", current.display());

            match entry {
                Entry::Absent => {
                    chain.push(current);
                    return Ok(Resolution::new(chain, Outcome::Missing));
                }
                Entry::Concrete(kind) => {
                    chain.push(current);
                    return Ok(Resolution::new(chain, Outcome::Exists(kind)));
                }
                Entry::Symlink(target) => {
                    let identity = self.prober.link_identity(&current)?;
                    if !visited.insert(identity) {
                        return Err(Error::CyclicSymlink { path: current });
                    }

                    let next = resolve(&current, &target);
                    log::debug!("follow {} -> {}", current.display(), next.display());
                    chain.push(current);
                    current = next;
                }
            }
        }
    }
}

/// Anchor a relative query at the working directory.
///
/// This is the only place the working directory is read; every later hop
/// is resolved against a link's own directory.
fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = env::current_dir().map_err(Error::CurrentDir)?;
    Ok(cwd.join(path))
}
