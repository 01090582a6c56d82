//! Per-invocation context: working directory, repository root and configuration

use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigStore};
use crate::error::{ModuleError, Result};

/// Directory holding modules inside a modules repository
pub const MODULES_DIR: &str = "modules";

/// Directory of the generated demo app inside a modules repository
pub const DEMO_DIR: &str = "demo";

pub struct Context {
    pub cwd: PathBuf,
    pub config: Config,
    store: Box<dyn ConfigStore>,
}

impl Context {
    pub fn new(cwd: impl Into<PathBuf>, store: Box<dyn ConfigStore>) -> Result<Self> {
        let config = store.load()?;
        Ok(Self {
            cwd: cwd.into(),
            config,
            store,
        })
    }

    /// Build a context for the current process directory
    pub fn from_current_dir(store: Box<dyn ConfigStore>) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| ModuleError::Io {
            message: format!("Failed to get current directory: {e}"),
        })?;
        Self::new(cwd, store)
    }

    /// Root of the git repository containing the working directory
    ///
    /// # Errors
    ///
    /// Returns `ModuleError::NotInGitRepository` outside a repository.
    pub fn git_root(&self) -> Result<PathBuf> {
        let repo =
            git2::Repository::discover(&self.cwd).map_err(|_| ModuleError::NotInGitRepository)?;
        let workdir = repo.workdir().ok_or(ModuleError::NotInGitRepository)?;
        Ok(dunce::simplified(workdir).to_path_buf())
    }

    /// Resolve a user-supplied path against the working directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }

    /// `path` resolved against the working directory, or `default` under the repository root
    pub fn resolve_or_repo(&self, path: Option<&Path>, default: &str) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(self.resolve(p)),
            None => Ok(self.git_root()?.join(default)),
        }
    }

    pub fn save_config(&self) -> Result<()> {
        self.store.save(&self.config)
    }
}
