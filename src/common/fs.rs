//! File system helpers shared by the lifecycle operations

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::descriptor::DESCRIPTOR_FILE;
use crate::error::{self, Result};

/// Entries never copied between a module and an app
const INSTALL_EXCLUDES: [&str; 3] = [DESCRIPTOR_FILE, "node_modules", "yarn.lock"];

#[derive(Default, Clone)]
pub struct CopyOptions {
    pub exclude: Vec<String>,
}

impl CopyOptions {
    /// Skip the descriptor and package manager artifacts
    pub fn module_files() -> Self {
        Self {
            exclude: INSTALL_EXCLUDES.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn excludes(&self, name: &std::ffi::OsStr) -> bool {
        self.exclude
            .iter()
            .any(|excluded| name.to_str() == Some(excluded.as_str()))
    }
}

/// Copy a directory recursively, returning the number of files written
///
/// Symlinked files are copied as regular files. Symlinked directories are
/// never followed.
pub fn copy_dir_recursive<P1, P2>(src: P1, dst: P2, options: &CopyOptions) -> Result<usize>
where
    P1: AsRef<Path>,
    P2: AsRef<Path>,
{
    let src_ref = src.as_ref();
    let dst_ref = dst.as_ref();

    fs::create_dir_all(dst_ref).map_err(|e| error::fs::write_failed(dst_ref, e))?;

    let entries = fs::read_dir(src_ref).map_err(|e| error::fs::read_failed(src_ref, e))?;
    let mut copied = 0;
    for entry in entries {
        let entry = entry.map_err(|e| error::fs::read_failed(src_ref, e))?;
        let entry_path = entry.path();
        let file_name = entry.file_name();

        if options.excludes(&file_name) {
            continue;
        }

        let dst_path = dst_ref.join(&file_name);

        let file_type = entry
            .file_type()
            .map_err(|e| error::fs::read_failed(&entry_path, e))?;
        if file_type.is_dir() {
            copied += copy_dir_recursive(&entry_path, &dst_path, options)?;
        } else if file_type.is_symlink() && !entry_path.is_file() {
            tracing::warn!(path = %entry_path.display(), "skipping symlink that is not a file");
        } else {
            fs::copy(&entry_path, &dst_path).map_err(|e| error::fs::write_failed(&dst_path, e))?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Files under `dir` relative to it, skipping any `node_modules` tree
///
/// Symlinked files count as files; symlinked directories are not entered.
pub fn relative_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.file_name() != "node_modules")
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() || (e.path_is_symlink() && e.path().is_file()))
        .filter_map(|e| e.path().strip_prefix(dir).ok().map(Path::to_path_buf))
        .collect()
}

/// Delete `root/relative` and then every parent left empty, stopping at `root`
///
/// Returns whether the file existed.
pub fn remove_file_and_prune(root: &Path, relative: &Path) -> Result<bool> {
    let target = root.join(relative);
    if !target.is_file() {
        return Ok(false);
    }
    fs::remove_file(&target).map_err(|e| error::fs::write_failed(&target, e))?;

    let mut current = target.parent();
    while let Some(dir) = current {
        if !dir.starts_with(root) || dir == root {
            break;
        }
        let is_empty = fs::read_dir(dir)
            .map(|mut entries| entries.next().is_none())
            .unwrap_or(false);
        if !is_empty {
            break;
        }
        fs::remove_dir(dir).map_err(|e| error::fs::write_failed(dir, e))?;
        current = dir.parent();
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_skips_module_artifacts() {
        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        fs::write(src.path().join("meta.json"), "{}").unwrap();
        fs::write(src.path().join("index.js"), "").unwrap();
        fs::write(src.path().join("yarn.lock"), "").unwrap();
        fs::create_dir_all(src.path().join("node_modules/dep")).unwrap();
        fs::create_dir_all(src.path().join("screens")).unwrap();
        fs::write(src.path().join("screens/home.js"), "").unwrap();

        let copied =
            copy_dir_recursive(src.path(), dst.path().join("out"), &CopyOptions::module_files())
                .unwrap();

        assert_eq!(copied, 2);
        assert!(dst.path().join("out/index.js").exists());
        assert!(dst.path().join("out/screens/home.js").exists());
        assert!(!dst.path().join("out/meta.json").exists());
        assert!(!dst.path().join("out/yarn.lock").exists());
        assert!(!dst.path().join("out/node_modules").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_does_not_follow_directory_symlinks() {
        use std::os::unix::fs::symlink;

        let src = TempDir::new().unwrap();
        let dst = TempDir::new().unwrap();
        fs::create_dir_all(src.path().join("screens")).unwrap();
        fs::write(src.path().join("screens/home.js"), "home").unwrap();
        symlink(src.path(), src.path().join("screens/loop")).unwrap();
        symlink(src.path().join("screens/home.js"), src.path().join("alias.js")).unwrap();

        let copied =
            copy_dir_recursive(src.path(), dst.path().join("out"), &CopyOptions::default())
                .unwrap();

        assert_eq!(copied, 2);
        assert_eq!(
            fs::read_to_string(dst.path().join("out/alias.js")).unwrap(),
            "home"
        );
        assert!(!dst.path().join("out/screens/loop").exists());
        assert_eq!(
            relative_files(src.path()),
            vec![PathBuf::from("alias.js"), PathBuf::from("screens/home.js")]
        );
    }

    #[test]
    fn test_relative_files_sorted_without_node_modules() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("b/node_modules")).unwrap();
        fs::write(temp.path().join("b/node_modules/x.js"), "").unwrap();
        fs::write(temp.path().join("b/c.js"), "").unwrap();
        fs::write(temp.path().join("a.js"), "").unwrap();

        let files = relative_files(temp.path());
        assert_eq!(files, vec![PathBuf::from("a.js"), PathBuf::from("b/c.js")]);
    }

    #[test]
    fn test_remove_prunes_empty_parents() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("app");
        fs::create_dir_all(root.join("modules/a/screens")).unwrap();
        fs::write(root.join("modules/a/screens/home.js"), "").unwrap();
        fs::write(root.join("keep.js"), "").unwrap();

        let removed = remove_file_and_prune(&root, Path::new("modules/a/screens/home.js")).unwrap();

        assert!(removed);
        assert!(!root.join("modules").exists());
        assert!(root.join("keep.js").exists());
    }

    #[test]
    fn test_remove_missing_file() {
        let temp = TempDir::new().unwrap();
        assert!(!remove_file_and_prune(temp.path(), Path::new("nope.js")).unwrap());
    }
}
