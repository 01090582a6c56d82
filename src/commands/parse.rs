//! Parse command implementation
//!
//! Validates every module of a source directory, prints the findings and
//! optionally writes the surviving modules to a JSON snapshot.

use crate::cli::ParseArgs;
use crate::context::{Context, MODULES_DIR};
use crate::error::{ModuleError, Result};
use crate::operations::ParseOperation;
use crate::reporter;
use crate::ui;

/// Run parse command
pub fn run(ctx: &Context, args: ParseArgs) -> Result<()> {
    let source = ctx.resolve_or_repo(args.source.as_deref(), MODULES_DIR)?;
    let result = ParseOperation::new(source).execute()?;

    reporter::print_report(&result)?;

    if let Some(dest) = args.write {
        let dest = ctx.resolve(&dest);
        if reporter::write_snapshot(&result, &dest)? {
            ui::valid(format!("Modules written to {}", dest.display()));
        } else {
            ui::warn(format!("No valid modules, {} not written", dest.display()));
        }
    }

    if result.has_errors() {
        return Err(ModuleError::ValidationFailed {
            errors: result.errors.len(),
        });
    }
    Ok(())
}
