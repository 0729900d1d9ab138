//! Path existence checks used by the build guards.
//!
//! A plain `Path::exists` folds every stat error into `false`. The guards in
//! [`crate::pipeline`] must never write over existing output, so a stat that
//! fails for any reason other than "not found" is kept apart as
//! [`PathState::Indeterminate`] and counts as existing.

use std::fs;
use std::io;
use std::path::Path;

/// Result of stat-ing a path.
#[derive(Debug)]
pub enum PathState {
    Exists,
    Missing,
    /// The stat failed with something other than `NotFound` (permissions,
    /// broken mount, ...).
    Indeterminate(io::Error),
}

impl PathState {
    /// `true` for `Exists` and `Indeterminate`.
    pub fn exists(&self) -> bool {
        !matches!(self, PathState::Missing)
    }
}

/// Stat `path`, following symlinks.
pub fn probe(path: &Path) -> PathState {
    match fs::metadata(path) {
        Ok(_) => PathState::Exists,
        Err(e) if e.kind() == io::ErrorKind::NotFound => PathState::Missing,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot stat path, treating it as existing");
            PathState::Indeterminate(e)
        }
    }
}

/// Shorthand for `probe(path).exists()`.
pub fn exists(path: &Path) -> bool {
    probe(path).exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn existing_directory() {
        let tmp = TempDir::new().unwrap();
        assert!(matches!(probe(tmp.path()), PathState::Exists));
        assert!(exists(tmp.path()));
    }

    #[test]
    fn existing_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("index.html");
        fs::write(&file, "").unwrap();
        assert!(exists(&file));
    }

    #[test]
    fn missing_path() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        assert!(matches!(probe(&missing), PathState::Missing));
        assert!(!exists(&missing));
    }

    #[test]
    fn indeterminate_counts_as_existing() {
        let state = PathState::Indeterminate(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(state.exists());
    }

    #[cfg(unix)]
    #[test]
    fn path_through_a_file_is_indeterminate() {
        // Stat-ing `file/child` fails with ENOTDIR, not ENOENT.
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("plain");
        fs::write(&file, "").unwrap();
        let state = probe(&file.join("child"));
        assert!(matches!(state, PathState::Indeterminate(_)));
        assert!(state.exists());
    }
}
