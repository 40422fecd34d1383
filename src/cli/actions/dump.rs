//! Dump the generated Makefile

use anyhow::Result;

use crate::cli::context::Context;
use crate::generator::MakefileGenerator;

/// Execute the dump action: print the Makefile instead of running it
pub fn execute(ctx: &Context) -> Result<()> {
    let generator = MakefileGenerator::new(&ctx.config.make);
    print!("{}", generator.generate(&ctx.justfile));
    Ok(())
}
