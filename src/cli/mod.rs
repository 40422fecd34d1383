//! CLI module

pub mod actions;
pub mod args;
pub mod context;

pub use args::Cli;
pub use context::Context;

use anyhow::Result;

use crate::error::Error;

/// Dispatch a parsed command line to its action
pub fn run(cli: &Cli) -> Result<()> {
    if let Some(flag) = cli.unknown_flag() {
        return Err(Error::UnknownFlag {
            flag: flag.to_string(),
        }
        .into());
    }

    let ctx = Context::from_cli(cli)?;

    if cli.list {
        return actions::list::execute(&ctx);
    }
    if cli.dump {
        return actions::dump::execute(&ctx);
    }

    actions::run::execute(&ctx, cli.recipe(), cli.recipe_args(), cli.dry_run)
}
