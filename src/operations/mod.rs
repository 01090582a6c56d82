//! Lifecycle operations on modules
//!
//! This module provides the high-level operations behind each command:
//! - ParseOperation: discover, read and validate every module of a source
//! - AddOperation / RemoveOperation: install modules into an app and back out
//! - CommitOperation: copy edited files from an app back into the module
//! - CreateOperation: scaffold a new module
//! - InitOperation / DemoOperation: bootstrap a modules repository and its demo app
//!
//! External tools are only reached through [`crate::runner::ToolRunner`].

pub mod add;
pub mod commit;
pub mod create;
pub mod demo;
pub mod init;
pub mod parse;
pub mod remove;

pub use add::{AddOperation, AddOptions, InstallState};
pub use commit::{CommitOperation, CommitOptions, CommitState};
pub use create::{CreateOperation, CreateOptions};
pub use demo::DemoOperation;
pub use init::InitOperation;
pub use parse::ParseOperation;
pub use remove::{RemoveOperation, RemoveOptions, RemoveState};

use std::path::{Component, Path};

use crate::descriptor::root_components;
use crate::error::{ModuleError, Result};
use crate::progress::ProgressReporter;
use crate::ui;

/// What happened to one module of a batch
#[derive(Debug)]
pub struct ModuleOutcome<S> {
    pub module: String,
    pub result: Result<S>,
}

/// Outcomes of a batch, in the order the modules were requested
#[derive(Debug)]
pub struct BatchReport<S> {
    pub outcomes: Vec<ModuleOutcome<S>>,
}

impl<S> BatchReport<S> {
    /// Number of modules that could not be processed at all
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    /// Turn per-module failures into a single command error
    pub fn into_result(self) -> Result<Self> {
        match self.failed() {
            0 => Ok(self),
            failed => Err(ModuleError::ModulesFailed { failed }),
        }
    }
}

/// Run `step` for each module; a failing module is reported and the batch continues
pub(crate) fn run_batch<S>(
    modules: &[String],
    progress: &mut dyn ProgressReporter,
    mut step: impl FnMut(&str, &mut dyn ProgressReporter) -> Result<S>,
) -> BatchReport<S> {
    let total = modules.len();
    let mut outcomes = Vec::with_capacity(total);

    for (index, module) in modules.iter().enumerate() {
        progress.start_module(module, index + 1, total);
        let result = step(module, progress);
        if let Err(e) = &result {
            tracing::debug!(module = %module, error = %e, "module failed");
            progress.println(&ui::invalid_line(format!("{module}: {e}")));
        }
        progress.finish_module();
        outcomes.push(ModuleOutcome {
            module: module.clone(),
            result,
        });
    }

    progress.finish();
    BatchReport { outcomes }
}

/// Join a descriptor root and a module-relative path with forward slashes
///
/// `.` and empty segments are dropped so `./modules/a/` and `modules/a`
/// produce the same result.
pub(crate) fn join_posix(root: &str, relative: &Path) -> String {
    let root_parts = root_components(root).into_iter();
    let rel_parts = relative.components().filter_map(|c| match c {
        Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
        _ => None,
    });
    root_parts
        .map(str::to_string)
        .chain(rel_parts)
        .collect::<Vec<_>>()
        .join("/")
}
