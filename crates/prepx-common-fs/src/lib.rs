//! File system utilities for prepx.
//!
//! Thin wrappers around `std::fs` that attach path context to every
//! failure. Scaffolding operations are sequenced from these primitives;
//! a failed call aborts the sequence and leaves whatever was already
//! created in place.

pub mod path;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Filesystem error with path context.
#[derive(Debug, Error)]
pub enum FsError {
    /// A symlink source (or other required path) does not exist.
    #[error("source not found: {path}")]
    SourceNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// Directory creation failed.
    #[error("failed to create directory: {path}")]
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Symlink creation failed, typically because the link path is occupied.
    #[error("failed to create symlink: {link} -> {target}")]
    Symlink {
        /// The link path that could not be created.
        link: PathBuf,
        /// The intended target.
        target: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Directory listing failed.
    #[error("failed to read directory: {path}")]
    ReadDir {
        /// The directory that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Result type alias using [`FsError`].
pub type Result<T> = std::result::Result<T, FsError>;

/// Ensure a directory exists, creating parents as needed.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| FsError::CreateDir {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    Ok(())
}

/// Fail with [`FsError::SourceNotFound`] unless `path` exists.
///
/// Follows symlinks, so a link whose target is gone counts as missing.
pub fn require_exists(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(FsError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Create a symbolic link at `link` pointing to `target`.
///
/// The target is not required to exist; callers that need that guarantee
/// go through [`require_exists`] first. Fails if `link` is already
/// occupied by anything.
pub fn symlink(target: impl AsRef<Path>, link: impl AsRef<Path>) -> Result<()> {
    let target = target.as_ref();
    let link = link.as_ref();
    symlink_impl(target, link).map_err(|e| FsError::Symlink {
        link: link.to_path_buf(),
        target: target.to_path_buf(),
        source: e,
    })
}

#[cfg(unix)]
fn symlink_impl(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink_impl(target: &Path, link: &Path) -> io::Result<()> {
    // Windows distinguishes file and directory links at creation time.
    if target.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    }
}

/// List the names of the immediate children of `dir`, sorted.
///
/// Symlinked children are reported by name like any other entry.
pub fn list_dir_names(dir: impl AsRef<Path>) -> Result<Vec<String>> {
    let dir = dir.as_ref();
    let read_dir = fs::read_dir(dir).map_err(|e| FsError::ReadDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut names = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| FsError::ReadDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_dir_creates_nested() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b/c");

        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());

        // Calling again on an existing directory is a no-op
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_require_exists() {
        let dir = tempdir().unwrap();
        assert!(require_exists(dir.path()).is_ok());

        let missing = dir.path().join("missing");
        match require_exists(&missing).unwrap_err() {
            FsError::SourceNotFound { path } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_symlink_to_directory() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("target");
        let link = dir.path().join("link");
        fs::create_dir(&target).unwrap();

        symlink(&target, &link).unwrap();
        assert!(link.is_symlink());
        assert_eq!(fs::read_link(&link).unwrap(), target);
    }

    #[test]
    fn test_symlink_allows_dangling_target() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("not_yet_created");
        let link = dir.path().join("link");

        symlink(&target, &link).unwrap();
        assert!(link.is_symlink());
        assert!(!link.exists());
    }

    #[test]
    fn test_symlink_fails_on_occupied_link_path() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("target");
        let link = dir.path().join("link");
        fs::create_dir(&target).unwrap();
        fs::write(&link, "occupied").unwrap();

        let err = symlink(&target, &link).unwrap_err();
        match err {
            FsError::Symlink { link: l, target: t, .. } => {
                assert_eq!(l, link);
                assert_eq!(t, target);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_list_dir_names_sorted() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("zeta")).unwrap();
        fs::create_dir(dir.path().join("alpha")).unwrap();
        fs::write(dir.path().join("beta"), "").unwrap();

        let names = list_dir_names(dir.path()).unwrap();
        assert_eq!(names, vec!["alpha", "beta", "zeta"]);
    }

    #[test]
    fn test_list_dir_names_missing_dir() {
        let dir = tempdir().unwrap();
        let result = list_dir_names(dir.path().join("missing"));
        assert!(matches!(result, Err(FsError::ReadDir { .. })));
    }
}
