//! Init operation: create a blank modules repository

use std::fs;
use std::path::{Path, PathBuf};

use crate::context::MODULES_DIR;
use crate::error::{Result, fs as fs_error, module};
use crate::runner::ToolRunner;

const GITIGNORE: &str = "logs
*.log
npm-debug.log*
yarn-debug.log*
yarn-error.log*
node_modules/
.npm
.DS_Store
.idea
demo
";

const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

pub struct InitOperation<'a> {
    runner: &'a dyn ToolRunner,
}

impl<'a> InitOperation<'a> {
    pub fn new(runner: &'a dyn ToolRunner) -> Self {
        Self { runner }
    }

    /// Create `parent/name` with a `.gitignore`, an empty modules directory
    /// and an initial commit
    ///
    /// # Errors
    ///
    /// Returns `ModuleError::AlreadyExists` when the directory exists and is
    /// not empty.
    pub fn execute(&self, parent: &Path, name: &str) -> Result<PathBuf> {
        let base = parent.join(name);
        let occupied = fs::read_dir(&base)
            .map(|mut entries| entries.next().is_some())
            .unwrap_or(false);
        if occupied {
            return Err(module::already_exists(name));
        }
        tracing::debug!(dir = %base.display(), "initializing modules repository");

        fs::create_dir_all(&base).map_err(|e| fs_error::write_failed(&base, e))?;
        self.runner.init_repo(&base)?;

        let gitignore = base.join(".gitignore");
        fs::write(&gitignore, GITIGNORE).map_err(|e| fs_error::write_failed(&gitignore, e))?;

        let modules = base.join(MODULES_DIR);
        fs::create_dir_all(&modules).map_err(|e| fs_error::write_failed(&modules, e))?;
        let keep = modules.join(".keep");
        fs::write(&keep, "").map_err(|e| fs_error::write_failed(&keep, e))?;

        self.runner
            .commit_paths(&base, &[".gitignore", MODULES_DIR], INITIAL_COMMIT_MESSAGE)?;
        Ok(base)
    }
}
