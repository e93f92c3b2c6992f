//! Command dispatch logic for gradecase

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use gradecase_core::config::Config;
use gradecase_core::error::Result;
use tracing::debug;

mod command;

pub use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Init(args) => commands::init::execute(ctx, args),
            Commands::List => commands::list::execute(ctx),
            Commands::Show(args) => commands::show::execute(ctx, args.id),
            Commands::Add(args) => commands::add::execute(ctx, args),
            Commands::Remove(args) => commands::remove::execute(ctx, args.id),
            Commands::Difficulty(args) => commands::difficulty::execute(ctx, args),
            Commands::Weight(args) => commands::weight::execute(ctx, args),
            Commands::Edit(args) => commands::edit::execute(ctx, args),
            Commands::Recalc => commands::recalc::execute(ctx),
            Commands::Export(args) => commands::export::execute(ctx, args),
            Commands::Import(args) => commands::import::execute(ctx, args),
        }
    }
}
