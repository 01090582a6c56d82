//! Configuration commands: `config get|set`, `optin` and `optout`

use crate::cli::{ConfigAction, ConfigArgs};
use crate::context::Context;
use crate::error::{Result, config as config_error};
use crate::ui;

/// Environment variables marking a non-interactive CI run
const CI_ENV_VARS: [&str; 2] = ["CI", "CIRCLE_JOB"];

pub const OPT_IN_NOTICE: &str =
    "Some data is collected on the use of the Crowdbotics CLI. To opt out, please run \"cb optout\".";

/// Run config command
pub fn run(ctx: &mut Context, args: ConfigArgs) -> Result<()> {
    match args.action {
        ConfigAction::Get { key } => {
            let value = ctx
                .config
                .get(&key)
                .ok_or_else(|| config_error::unknown_key(&key))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            ctx.config.set(&key, &value)?;
            ctx.save_config()?;
            ui::valid(format!("{key} set to {value}"));
        }
    }
    Ok(())
}

/// Run optin command
pub fn opt_in(ctx: &mut Context) -> Result<()> {
    set_opted_in(ctx, true)
}

/// Run optout command
pub fn opt_out(ctx: &mut Context) -> Result<()> {
    set_opted_in(ctx, false)
}

fn set_opted_in(ctx: &mut Context, opted_in: bool) -> Result<()> {
    let state = if opted_in { "in" } else { "out" };
    if ctx.config.opted_in == opted_in {
        ui::valid(format!("You are already opted {state} for analytics"));
        return Ok(());
    }
    ctx.config.opted_in = opted_in;
    ctx.config.has_asked_opt_in = true;
    ctx.save_config()?;
    if opted_in {
        ui::valid("Successfully opted in of analytics");
    } else {
        ui::valid("Successfully opted out of analytics");
    }
    Ok(())
}

/// Whether the process runs for a person rather than a CI job
pub fn is_user_environment() -> bool {
    CI_ENV_VARS.iter().all(|var| std::env::var_os(var).is_none())
}

/// Record the default opt-in on the first run and tell the user about it
///
/// Returns whether the notice was shown.
pub fn first_run_notice(ctx: &mut Context, user_environment: bool) -> Result<bool> {
    if ctx.config.has_asked_opt_in || !user_environment {
        return Ok(false);
    }
    ctx.config.opted_in = true;
    ctx.config.has_asked_opt_in = true;
    ctx.save_config()?;
    eprintln!("{OPT_IN_NOTICE}");
    Ok(true)
}
