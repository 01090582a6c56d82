//! Recording runner for tests

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::ToolRunner;
use crate::environment::Tool;
use crate::error::{ModuleError, Result};

/// Records every call as a command line and fails the ones matching a pattern
#[derive(Debug, Default)]
pub struct FakeRunner {
    calls: RefCell<Vec<String>>,
    failing: Vec<String>,
    versions: HashMap<Tool, String>,
    renders: Vec<PathBuf>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any call whose command line contains `pattern`
    pub fn failing_on(mut self, pattern: &str) -> Self {
        self.failing.push(pattern.to_string());
        self
    }

    pub fn with_version(mut self, tool: Tool, version: &str) -> Self {
        self.versions.insert(tool, version.to_string());
        self
    }

    /// Directories created whenever a cookiecutter template is rendered
    pub fn rendering(mut self, dir: impl Into<PathBuf>) -> Self {
        self.renders.push(dir.into());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, dir: &Path, command: String) -> Result<()> {
        let line = format!("{} @ {}", command, dir.display());
        self.calls.borrow_mut().push(line);
        if self.failing.iter().any(|p| command.contains(p.as_str())) {
            return Err(ModuleError::ExternalCommand {
                command,
                reason: "simulated failure".to_string(),
            });
        }
        Ok(())
    }
}

impl ToolRunner for FakeRunner {
    fn install_python_package(&self, backend_dir: &Path, package: &str) -> Result<()> {
        self.record(backend_dir, format!("pipenv install -e {package}"))
    }

    fn install_node_packages(&self, app_dir: &Path, packages: &[String]) -> Result<()> {
        self.record(app_dir, format!("yarn add {}", packages.join(" ")))
    }

    fn remove_node_package(&self, app_dir: &Path, package: &str) -> Result<()> {
        self.record(app_dir, format!("yarn remove {package}"))
    }

    fn yarn_install(&self, app_dir: &Path) -> Result<()> {
        self.record(app_dir, "yarn install".to_string())
    }

    fn prepare_python(&self, dir: &Path) -> Result<()> {
        self.record(dir, "pipenv install cookiecutter".to_string())
    }

    fn run_cookiecutter(&self, dir: &Path, template: &str, args: &[String]) -> Result<()> {
        self.record(
            dir,
            format!("pipenv run cookiecutter {template} {}", args.join(" ")),
        )?;
        for rendered in &self.renders {
            std::fs::create_dir_all(rendered)?;
        }
        Ok(())
    }

    fn init_repo(&self, dir: &Path) -> Result<()> {
        self.record(dir, "git init".to_string())
    }

    fn commit_paths(&self, dir: &Path, paths: &[&str], message: &str) -> Result<()> {
        self.record(dir, format!("git commit {} -m {message}", paths.join(" ")))
    }

    fn probe_version(&self, tool: Tool) -> Option<String> {
        self.calls
            .borrow_mut()
            .push(format!("{} --version", tool.program()));
        self.versions.get(&tool).cloned()
    }
}
