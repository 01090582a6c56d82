//! cb - Crowdbotics modules CLI
//!
//! Validates module descriptors, scaffolds new modules and moves modules in
//! and out of a demo app through the external package managers.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod config;
mod context;
mod descriptor;
mod discovery;
mod environment;
mod error;
mod logging;
mod operations;
mod progress;
mod reporter;
mod runner;
mod ui;
mod validator;

use cli::{Cli, Commands};
use config::FileConfigStore;
use context::Context;
use error::Result;
use runner::SystemRunner;

fn run(cli: Cli) -> Result<()> {
    let store = FileConfigStore::default_location()?;
    tracing::debug!(config = %store.path().display(), "using configuration file");
    let mut ctx = Context::from_current_dir(Box::new(store))?;
    let runner = SystemRunner;

    // Completions output is piped into files; keep it clean
    let shows_notice = !matches!(cli.command, Commands::Completions(_) | Commands::Version);
    if shows_notice {
        commands::config::first_run_notice(&mut ctx, commands::config::is_user_environment())?;
    }

    let refresh_env = cli.refresh_env;
    match cli.command {
        Commands::Parse(args) => commands::parse::run(&ctx, args),
        Commands::Create(args) => commands::create::run(&ctx, args),
        Commands::Add(args) => commands::add::run(&mut ctx, &runner, args, refresh_env),
        Commands::Remove(args) => commands::remove::run(&mut ctx, &runner, args, refresh_env),
        Commands::Commit(args) => commands::commit::run(&ctx, args),
        Commands::Init(args) => commands::init::run(&ctx, &runner, args),
        Commands::Demo(args) => commands::demo::run(&mut ctx, &runner, args, refresh_env),
        Commands::Config(args) => commands::config::run(&mut ctx, args),
        Commands::Optin => commands::config::opt_in(&mut ctx),
        Commands::Optout => commands::config::opt_out(&mut ctx),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        tracing::debug!(error = ?e, "command failed");
        ui::invalid(&e);
        std::process::exit(1);
    }
}
