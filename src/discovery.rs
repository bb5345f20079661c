//! Bundle discovery.
//!
//! Scans a single directory (no recursion) for files with the AppImage
//! extension.

use crate::error::{CliError, ErrorExt, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extension identifying a bundle
pub const BUNDLE_EXTENSION: &str = "AppImage";

/// Returns the bundles directly inside `root`, sorted by path.
///
/// Nested directories are not entered. The extension match is
/// case-sensitive.
pub fn find_bundles(root: &Path) -> Result<Vec<PathBuf>> {
    let metadata = std::fs::metadata(root).fs_context("reading bundle directory", root)?;
    if !metadata.is_dir() {
        return Err(CliError::NotADirectory {
            path: root.to_path_buf(),
        }
        .into());
    }

    let mut bundles = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() && !is_file_symlink(entry.path(), entry.file_type()) {
            continue;
        }
        if is_bundle(entry.path()) {
            log::debug!("Found bundle {}", entry.path().display());
            bundles.push(entry.into_path());
        }
    }
    bundles.sort();

    Ok(bundles)
}

/// Whether `path` carries the bundle extension
pub fn is_bundle(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(BUNDLE_EXTENSION)
}

fn is_file_symlink(path: &Path, file_type: std::fs::FileType) -> bool {
    file_type.is_symlink() && path.is_file()
}
