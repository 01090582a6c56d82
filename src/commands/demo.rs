//! Demo command implementation

use crate::cli::DemoArgs;
use crate::context::{Context, DEMO_DIR};
use crate::environment::{Tool, check_environment};
use crate::error::Result;
use crate::operations::DemoOperation;
use crate::runner::ToolRunner;

/// Run demo command
pub fn run(
    ctx: &mut Context,
    runner: &dyn ToolRunner,
    args: DemoArgs,
    refresh_env: bool,
) -> Result<()> {
    check_environment(ctx, runner, &[Tool::Pipenv, Tool::Yarn], refresh_env)?;

    let dir = ctx.git_root()?.join(DEMO_DIR);
    DemoOperation::new(runner, args.source.as_deref()).execute(&dir)?;
    Ok(())
}
