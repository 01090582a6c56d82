//! Commit command implementation

use crate::cli::CommitArgs;
use crate::context::{Context, DEMO_DIR, MODULES_DIR};
use crate::error::Result;
use crate::operations::{CommitOperation, CommitOptions};
use crate::ui;

use super::helpers::{batch_progress, finish_batch};

/// Run commit command
pub fn run(ctx: &Context, args: CommitArgs) -> Result<()> {
    let options = CommitOptions {
        source: ctx.resolve_or_repo(args.source.as_deref(), DEMO_DIR)?,
        modules: ctx.git_root()?.join(MODULES_DIR),
    };

    ui::section(format!(
        "Updating modules from {}",
        options.source.display()
    ));
    let mut progress = batch_progress(args.modules.len());
    let report = CommitOperation::new(options).execute(&args.modules, &mut progress)?;
    finish_batch(report, "updated")?;
    Ok(())
}
