//! Path manipulation utilities.

use std::path::{Component, Path, PathBuf};

/// Normalize a path by resolving `.` and `..` without hitting the filesystem.
pub fn normalize(path: impl AsRef<Path>) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();

    for component in path.as_ref().components() {
        match component {
            Component::Prefix(p) => parts.push(Component::Prefix(p)),
            Component::RootDir => {
                parts.clear();
                parts.push(Component::RootDir);
            }
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(Component::ParentDir),
            },
            Component::Normal(c) => parts.push(Component::Normal(c)),
        }
    }

    if parts.is_empty() {
        PathBuf::from(".")
    } else {
        parts.iter().collect()
    }
}

/// Make a path absolute against `base`, resolving dot components lexically.
///
/// Unlike `fs::canonicalize` this works for paths that do not exist yet,
/// which the scaffolder relies on: link targets are composed before they
/// are created.
pub fn absolutize(path: impl AsRef<Path>, base: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(base.as_ref().join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("a/b/../c"), PathBuf::from("a/c"));
        assert_eq!(normalize("a/./b"), PathBuf::from("a/b"));
        assert_eq!(normalize("../a/b"), PathBuf::from("../a/b"));
        assert_eq!(normalize("/a/../b"), PathBuf::from("/b"));
        assert_eq!(normalize(""), PathBuf::from("."));
        assert_eq!(normalize("."), PathBuf::from("."));
    }

    #[test]
    fn test_normalize_does_not_escape_root() {
        assert_eq!(normalize("/../a"), PathBuf::from("/a"));
    }

    #[test]
    fn test_absolutize_relative() {
        assert_eq!(
            absolutize("data/raw", "/work"),
            PathBuf::from("/work/data/raw")
        );
        assert_eq!(
            absolutize("../data", "/work/exp"),
            PathBuf::from("/work/data")
        );
    }

    #[test]
    fn test_absolutize_absolute_passthrough() {
        assert_eq!(
            absolutize("/data/./raw", "/elsewhere"),
            PathBuf::from("/data/raw")
        );
    }
}
