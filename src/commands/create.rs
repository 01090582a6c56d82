//! Create command implementation

use crate::cli::CreateArgs;
use crate::context::{Context, MODULES_DIR};
use crate::error::Result;
use crate::operations::{CreateOperation, CreateOptions};
use crate::ui;

/// Run create command
pub fn run(ctx: &Context, args: CreateArgs) -> Result<()> {
    let target = ctx.resolve_or_repo(args.target.as_deref(), MODULES_DIR)?;

    ui::section(format!(
        "Generating {} module ({})",
        args.name, args.module_type
    ));
    let options = CreateOptions {
        name: args.name,
        module_type: args.module_type,
        target,
        search_description: args.search_description,
        acceptance_criteria: args.acceptance_criteria,
    };
    let dir = CreateOperation::new(options).execute()?;

    ui::valid(format!("Module created at {}", dir.display()));
    Ok(())
}
