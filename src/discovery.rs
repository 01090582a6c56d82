//! Module discovery
//!
//! Enumerates the module directories directly under a modules source
//! directory, in lexicographic order so parse output is stable.

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::{Result, fs as fs_error};

/// Directory names that never hold a module
const RESERVED_DIRS: &[&str] = &["node_modules", "yarn.lock", "build", "dist", "__pycache__"];

fn is_module_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let Some(name) = entry.file_name().to_str() else {
        tracing::warn!(
            path = %entry.path().display(),
            "skipping directory with a non UTF-8 name"
        );
        return false;
    };
    !name.starts_with('.') && !RESERVED_DIRS.contains(&name)
}

/// Discover module directories under `source`
///
/// # Errors
///
/// Returns `ModuleError::NotFound` if `source` is missing or not a directory.
pub fn discover_modules(source: &Path) -> Result<impl Iterator<Item = PathBuf> + use<>> {
    if !source.is_dir() {
        return Err(fs_error::not_found(source));
    }

    let entries = WalkDir::new(source)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(is_module_dir)
        .map(DirEntry::into_path);

    Ok(entries)
}

/// Name of a discovered module directory
pub fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
