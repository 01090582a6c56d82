//! Remove operation: uninstall modules from an app

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::common::fs::{relative_files, remove_file_and_prune};
use crate::descriptor::{DESCRIPTOR_FILE, read_descriptor};
use crate::error::{Result, fs as fs_error};
use crate::progress::ProgressReporter;
use crate::runner::ToolRunner;
use crate::ui;

use super::{BatchReport, run_batch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveState {
    /// Installed files deleted
    Removed { files: usize },
    /// The node package could not be removed; files were left in place
    Kept,
}

impl fmt::Display for RemoveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoveState::Removed { files } => write!(f, "{files} file(s) removed"),
            RemoveState::Kept => f.write_str("kept"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RemoveOptions {
    pub source: PathBuf,
    pub project: PathBuf,
}

pub struct RemoveOperation<'a> {
    runner: &'a dyn ToolRunner,
    options: RemoveOptions,
}

impl<'a> RemoveOperation<'a> {
    pub fn new(runner: &'a dyn ToolRunner, options: RemoveOptions) -> Self {
        Self { runner, options }
    }

    /// # Errors
    ///
    /// Returns `ModuleError::NotFound` when the source directory is missing.
    pub fn execute(
        &self,
        modules: &[String],
        progress: &mut dyn ProgressReporter,
    ) -> Result<BatchReport<RemoveState>> {
        if !self.options.source.is_dir() {
            return Err(fs_error::not_found(&self.options.source));
        }

        Ok(run_batch(modules, progress, |module, progress| {
            self.remove_module(module, progress)
        }))
    }

    fn remove_module(
        &self,
        module: &str,
        progress: &mut dyn ProgressReporter,
    ) -> Result<RemoveState> {
        let module_dir = self.options.source.join(module);
        let descriptor = read_descriptor(&module_dir)?;
        let target = descriptor.install_path(&self.options.project);
        tracing::debug!(module, target = %target.display(), "remove module");

        let installed_deps = target.join("node_modules");
        if installed_deps.is_dir() {
            fs::remove_dir_all(&installed_deps)
                .map_err(|e| fs_error::write_failed(&installed_deps, e))?;
        }

        let files = relative_files(&module_dir);

        if let Some(package_json) = files.iter().find(|f| f.ends_with("package.json")) {
            let name = package_name(&module_dir.join(package_json))?;
            progress.step("removing node package");
            if let Err(e) = self.runner.remove_node_package(&self.options.project, &name) {
                tracing::debug!(module, error = %e, "node package removal failed");
                progress.println(&ui::warning_line(format!(
                    "Failed removing module {module}. Is this module installed?"
                )));
                return Ok(RemoveState::Kept);
            }
        }

        progress.step("removing files");
        let mut removed = 0;
        for file in files
            .iter()
            .filter(|f| f.as_path() != Path::new(DESCRIPTOR_FILE))
        {
            if remove_file_and_prune(&target, file)? {
                removed += 1;
            }
        }
        prune_empty_ancestors(&target, &self.options.project)?;

        progress.println(&ui::valid_line(format!(
            "{module} removed from {}",
            self.options.project.display()
        )));
        Ok(RemoveState::Removed { files: removed })
    }
}

/// `name` field of a package.json
fn package_name(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| fs_error::read_failed(path, e))?;
    let json: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| fs_error::read_failed(path, e))?;
    json.get("name")
        .and_then(|n| n.as_str())
        .map(str::to_string)
        .ok_or_else(|| fs_error::read_failed(path, "package.json has no name"))
}

/// Remove `dir` and its parents while they are empty, never touching `project`
fn prune_empty_ancestors(dir: &Path, project: &Path) -> Result<()> {
    let mut current = Some(dir);
    while let Some(dir) = current {
        if dir == project || !dir.starts_with(project) {
            break;
        }
        let empty = fs::read_dir(dir)
            .map(|mut entries| entries.next().is_none())
            .unwrap_or(false);
        if !empty {
            break;
        }
        fs::remove_dir(dir).map_err(|e| fs_error::write_failed(dir, e))?;
        current = dir.parent();
    }
    Ok(())
}
