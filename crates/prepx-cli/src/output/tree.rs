//! Read-only directory tree rendering.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::CliError;

/// Render `folder` as an indented tree, one entry per line.
///
/// Symlinks are shown with their targets and never followed, so a link
/// into a large data folder stays a single line. `max_level` bounds how
/// many levels below the root are expanded.
pub fn render_tree(folder: &Path, max_level: Option<usize>) -> Result<String, CliError> {
    let mut walker = WalkDir::new(folder).sort_by_file_name();
    if let Some(level) = max_level {
        walker = walker.max_depth(level);
    }

    let mut out = String::new();
    for entry in walker {
        let entry = entry.map_err(|e| {
            CliError::io_with_path(
                format!("failed to read folder: {}", folder.display()),
                e.into(),
                folder,
            )
        })?;

        let depth = entry.depth();
        let name = if depth == 0 {
            entry.path().display().to_string()
        } else {
            entry.file_name().to_string_lossy().into_owned()
        };

        let indent = "  ".repeat(depth);
        if entry.path_is_symlink() {
            let target = fs::read_link(entry.path())
                .map(|t| t.display().to_string())
                .unwrap_or_else(|_| "?".into());
            let _ = writeln!(out, "{indent}{name} -> {target}");
        } else {
            let _ = writeln!(out, "{indent}{name}");
        }
    }

    Ok(out.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_renders_symlinks_with_targets() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("data");
        fs::create_dir(&data).unwrap();
        fs::create_dir(dir.path().join("run")).unwrap();
        prepx_common_fs::symlink(&data, dir.path().join("run/raw_data")).unwrap();

        let tree = render_tree(dir.path(), None).unwrap();
        assert!(tree.contains(&format!("raw_data -> {}", data.display())));
        assert!(tree.starts_with(&dir.path().display().to_string()));
    }

    #[test]
    fn test_max_level_bounds_descent() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b/c")).unwrap();

        let tree = render_tree(dir.path(), Some(1)).unwrap();
        let lines: Vec<&str> = tree.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "  a");
    }

    #[test]
    fn test_missing_folder_is_an_error() {
        let dir = tempdir().unwrap();
        let result = render_tree(&dir.path().join("missing"), None);
        assert!(result.is_err());
    }
}
