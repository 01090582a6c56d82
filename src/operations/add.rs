//! Add operation: install modules into an app
//!
//! Each module moves through
//! `Requested -> FilesCopied -> DependenciesInstalled | DependenciesFailed`.
//! Package manager failures are warnings; only an unreadable descriptor or
//! a copy failure fails the module.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::common::fs::{CopyOptions, copy_dir_recursive, relative_files};
use crate::descriptor::{ModuleDescriptor, read_descriptor};
use crate::error::{Result, fs as fs_error};
use crate::progress::ProgressReporter;
use crate::runner::ToolRunner;
use crate::ui;

use super::{BatchReport, join_posix, run_batch};

/// Django project directory inside an app
const BACKEND_DIR: &str = "backend";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallState {
    Requested,
    FilesCopied,
    DependenciesInstalled,
    DependenciesFailed,
}

impl fmt::Display for InstallState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InstallState::Requested => "requested",
            InstallState::FilesCopied => "files copied",
            InstallState::DependenciesInstalled => "dependencies installed",
            InstallState::DependenciesFailed => "dependencies failed",
        })
    }
}

#[derive(Debug, Clone)]
pub struct AddOptions {
    /// Directory holding the module sources
    pub source: PathBuf,
    /// App receiving the modules
    pub project: PathBuf,
}

pub struct AddOperation<'a> {
    runner: &'a dyn ToolRunner,
    options: AddOptions,
}

impl<'a> AddOperation<'a> {
    pub fn new(runner: &'a dyn ToolRunner, options: AddOptions) -> Self {
        Self { runner, options }
    }

    /// Install every module, continuing past failures
    ///
    /// # Errors
    ///
    /// Returns `ModuleError::NotFound` when the source directory is missing.
    pub fn execute(
        &self,
        modules: &[String],
        progress: &mut dyn ProgressReporter,
    ) -> Result<BatchReport<InstallState>> {
        if !self.options.source.is_dir() {
            return Err(fs_error::not_found(&self.options.source));
        }
        tracing::debug!(
            source = %self.options.source.display(),
            project = %self.options.project.display(),
            "adding modules"
        );

        Ok(run_batch(modules, progress, |module, progress| {
            self.add_module(module, progress)
        }))
    }

    fn add_module(&self, module: &str, progress: &mut dyn ProgressReporter) -> Result<InstallState> {
        let module_dir = self.options.source.join(module);
        let mut state = InstallState::Requested;
        tracing::debug!(module, ?state, dir = %module_dir.display(), "add module");

        let descriptor = read_descriptor(&module_dir)?;
        let target = descriptor.install_path(&self.options.project);

        progress.step("copying files");
        let copied = copy_dir_recursive(&module_dir, &target, &CopyOptions::module_files())?;
        state = InstallState::FilesCopied;
        tracing::debug!(module, copied, ?state, target = %target.display(), "files copied");

        let mut failures = 0;
        for file in relative_files(&module_dir) {
            let Some(file_name) = file.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let package_dir = file.parent().unwrap_or(Path::new(""));

            if file_name == "setup.py" && module_dir.join(package_dir).join("pyproject.toml").is_file()
            {
                progress.step("installing python package");
                let package = python_package_path(&descriptor.root, package_dir);
                let backend = self.options.project.join(BACKEND_DIR);
                if let Err(e) = self.runner.install_python_package(&backend, &package) {
                    progress.println(&ui::warning_line(format!(
                        "Failed installing module {module} with: {e}"
                    )));
                    failures += 1;
                }
            }

            if file_name == "package.json" {
                progress.step("installing node packages");
                match node_packages(&descriptor, &module_dir.join(&file), package_dir) {
                    Ok(packages) => {
                        if let Err(e) = self
                            .runner
                            .install_node_packages(&self.options.project, &packages)
                        {
                            progress.println(&ui::warning_line(format!(
                                "Failed adding module {module} with: {e}"
                            )));
                            failures += 1;
                        }
                    }
                    Err(e) => {
                        progress.println(&ui::warning_line(e));
                        failures += 1;
                    }
                }
            }
        }

        state = if failures == 0 {
            InstallState::DependenciesInstalled
        } else {
            InstallState::DependenciesFailed
        };
        progress.println(&ui::valid_line(format!(
            "{module} added to {}",
            target.display()
        )));
        tracing::debug!(module, ?state, "add finished");
        Ok(state)
    }
}

/// Editable-install path of a Python package, relative to the backend directory
fn python_package_path(root: &str, package_dir: &Path) -> String {
    let installed = join_posix(root, package_dir);
    match installed.strip_prefix("backend/") {
        Some(inside) => format!("./{inside}"),
        None if installed == BACKEND_DIR => ".".to_string(),
        None => format!("../{installed}"),
    }
}

/// `yarn add` arguments for a module's package.json
fn node_packages(
    descriptor: &ModuleDescriptor,
    package_json: &Path,
    package_dir: &Path,
) -> Result<Vec<String>> {
    let mut packages = vec![format!("file:./{}", join_posix(&descriptor.root, package_dir))];

    let candidates = descriptor
        .package_specs()
        .into_iter()
        .chain(package_json_specs(package_json)?);
    for spec in candidates {
        if !packages.contains(&spec) {
            packages.push(spec);
        }
    }
    Ok(packages)
}

/// `x-dependencies` declared in a package.json, as `name@range`
fn package_json_specs(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| fs_error::read_failed(path, e))?;
    let json: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| fs_error::read_failed(path, e))?;

    let Some(deps) = json.get("x-dependencies").and_then(|d| d.as_object()) else {
        return Ok(Vec::new());
    };
    Ok(deps
        .iter()
        .filter_map(|(name, range)| range.as_str().map(|r| format!("{name}@{r}")))
        .collect())
}
