// src/output/paths.rs
//! Pure functions for path calculations.
//!
//! This module handles path arithmetic for report output without
//! performing any I/O operations.

use crate::error::AppError;
use std::path::{Component, Path, PathBuf};

/// Path of `path` relative to `root`, with forward slashes for markdown.
pub fn relative_display_path(path: &Path, root: &Path) -> Result<String, AppError> {
    let (path, root) = (without_cur_dir(path), without_cur_dir(root));
    let relative = match path.strip_prefix(&root) {
        Ok(stripped) => stripped.to_path_buf(),
        Err(_) => pathdiff::diff_paths(&path, &root).ok_or_else(|| {
            AppError::PathError(format!(
                "Could not calculate relative path from {} to {}",
                root.display(),
                path.display()
            ))
        })?,
    };

    // Ensure forward slashes for Markdown compatibility
    Ok(relative.to_string_lossy().replace('\\', "/"))
}

/// Drops `.` components so `./notes/a.ipynb` and `notes/a.ipynb` compare equal.
fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_display_path() {
        assert_eq!(
            relative_display_path(Path::new("root/sub/a.ipynb"), Path::new("root")).unwrap(),
            "sub/a.ipynb"
        );
        assert_eq!(
            relative_display_path(Path::new("root/a.ipynb"), Path::new("root/")).unwrap(),
            "a.ipynb"
        );
    }

    #[test]
    fn test_relative_display_path_through_current_dir() {
        assert_eq!(
            relative_display_path(Path::new("./a.ipynb"), Path::new(".")).unwrap(),
            "a.ipynb"
        );
    }

    #[test]
    fn test_relative_display_path_ignores_leading_current_dir() {
        assert_eq!(
            relative_display_path(Path::new("notes/sub/a.ipynb"), Path::new("./notes")).unwrap(),
            "sub/a.ipynb"
        );
    }

    #[test]
    fn test_relative_path_without_common_base_fails() {
        assert!(relative_display_path(Path::new("a.ipynb"), Path::new("/abs/root")).is_err());
    }
}
