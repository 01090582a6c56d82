//! Remove command implementation

use crate::cli::RemoveArgs;
use crate::context::{Context, DEMO_DIR, MODULES_DIR};
use crate::environment::{Tool, check_environment};
use crate::error::Result;
use crate::operations::{RemoveOperation, RemoveOptions};
use crate::runner::ToolRunner;
use crate::ui;

use super::helpers::{batch_progress, finish_batch};

/// Run remove command
pub fn run(
    ctx: &mut Context,
    runner: &dyn ToolRunner,
    args: RemoveArgs,
    refresh_env: bool,
) -> Result<()> {
    check_environment(ctx, runner, &[Tool::Yarn], refresh_env)?;

    let options = RemoveOptions {
        source: ctx.resolve_or_repo(args.source.as_deref(), MODULES_DIR)?,
        project: ctx.resolve_or_repo(args.project.as_deref(), DEMO_DIR)?,
    };

    ui::section(format!(
        "Removing modules from {}",
        options.project.display()
    ));
    let mut progress = batch_progress(args.modules.len());
    let report = RemoveOperation::new(runner, options).execute(&args.modules, &mut progress)?;
    finish_batch(report, "removed")?;
    Ok(())
}
