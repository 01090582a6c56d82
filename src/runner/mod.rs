//! External tool invocation
//!
//! Lifecycle operations never spawn processes themselves; they go through a
//! [`ToolRunner`]. [`SystemRunner`] shells out to the real package managers
//! and uses libgit2 for repository work.

mod system;

#[cfg(test)]
mod fake;

pub use system::SystemRunner;

#[cfg(test)]
pub use fake::FakeRunner;

use std::path::Path;

use crate::environment::Tool;
use crate::error::Result;

/// Operations the CLI delegates to external tools
pub trait ToolRunner {
    /// Install a local Python package in editable mode (`pipenv install -e`)
    fn install_python_package(&self, backend_dir: &Path, package: &str) -> Result<()>;

    /// Add node packages to an app (`yarn add`)
    fn install_node_packages(&self, app_dir: &Path, packages: &[String]) -> Result<()>;

    /// Remove a node package from an app (`yarn remove`)
    fn remove_node_package(&self, app_dir: &Path, package: &str) -> Result<()>;

    /// Install an app's node dependencies (`yarn install`)
    fn yarn_install(&self, app_dir: &Path) -> Result<()>;

    /// Pin the Python interpreter and install cookiecutter in `dir`
    fn prepare_python(&self, dir: &Path) -> Result<()>;

    /// Render a cookiecutter template from `dir`
    fn run_cookiecutter(&self, dir: &Path, template: &str, args: &[String]) -> Result<()>;

    /// Create an empty git repository
    fn init_repo(&self, dir: &Path) -> Result<()>;

    /// Stage `paths` and commit them to HEAD
    fn commit_paths(&self, dir: &Path, paths: &[&str], message: &str) -> Result<()>;

    /// Version reported by an installed tool, `None` if unavailable
    fn probe_version(&self, tool: Tool) -> Option<String>;
}
