//! Init command implementation

use crate::cli::InitArgs;
use crate::context::Context;
use crate::error::Result;
use crate::operations::InitOperation;
use crate::runner::ToolRunner;
use crate::ui;

/// Run init command
pub fn run(ctx: &Context, runner: &dyn ToolRunner, args: InitArgs) -> Result<()> {
    let base = InitOperation::new(runner).execute(&ctx.cwd, &args.name)?;
    ui::valid(format!("Modules repository initialized at {}", base.display()));
    Ok(())
}
