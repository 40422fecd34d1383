//! List recipes

use anyhow::Result;

use crate::cli::context::Context;
use crate::lister::list_recipes;

/// Execute the list action
pub fn execute(ctx: &Context) -> Result<()> {
    print!("{}", list_recipes(&ctx.justfile));
    Ok(())
}
