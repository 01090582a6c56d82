//! Commit operation: copy edited files from an app back into their modules

use std::fmt;
use std::path::PathBuf;

use crate::common::fs::{CopyOptions, copy_dir_recursive};
use crate::descriptor::read_descriptor;
use crate::error::{Result, fs as fs_error};
use crate::progress::ProgressReporter;
use crate::ui;

use super::{BatchReport, run_batch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitState {
    Committed { files: usize },
    /// The module is not installed in the app
    NotInstalled,
}

impl fmt::Display for CommitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommitState::Committed { files } => write!(f, "{files} file(s) copied"),
            CommitState::NotInstalled => f.write_str("not installed"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CommitOptions {
    /// App the files are copied from
    pub source: PathBuf,
    /// Directory holding the module sources
    pub modules: PathBuf,
}

pub struct CommitOperation {
    options: CommitOptions,
}

impl CommitOperation {
    pub fn new(options: CommitOptions) -> Self {
        Self { options }
    }

    /// # Errors
    ///
    /// Returns `ModuleError::NotFound` when the app directory is missing.
    pub fn execute(
        &self,
        modules: &[String],
        progress: &mut dyn ProgressReporter,
    ) -> Result<BatchReport<CommitState>> {
        if !self.options.source.is_dir() {
            return Err(fs_error::not_found(&self.options.source));
        }

        Ok(run_batch(modules, progress, |module, progress| {
            self.commit_module(module, progress)
        }))
    }

    fn commit_module(
        &self,
        module: &str,
        progress: &mut dyn ProgressReporter,
    ) -> Result<CommitState> {
        let module_dir = self.options.modules.join(module);
        let descriptor = read_descriptor(&module_dir)?;
        let installed = descriptor.install_path(&self.options.source);

        if !installed.is_dir() {
            progress.println(&ui::warning_line(format!(
                "{module} is not installed at {}",
                installed.display()
            )));
            return Ok(CommitState::NotInstalled);
        }

        progress.step("copying files");
        let files = copy_dir_recursive(&installed, &module_dir, &CopyOptions::module_files())?;
        tracing::debug!(module, files, from = %installed.display(), "module committed");
        progress.println(&ui::valid_line(format!("{module} updated ({files} files)")));
        Ok(CommitState::Committed { files })
    }
}
