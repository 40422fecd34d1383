//! Run a recipe through make

use anyhow::Result;

use crate::binding::map_args;
use crate::cli::context::Context;
use crate::error::Error;
use crate::generator::MakefileGenerator;
use crate::lister::list_recipes;
use crate::model::Justfile;
use crate::runner;

/// What a command line resolves to
#[derive(Debug, PartialEq, Eq)]
pub enum Target<'a> {
    /// Print the recipe listing
    List,
    /// Run the named recipe
    Recipe(&'a str),
}

/// Pick the recipe to run.
///
/// With no name given the first recipe runs, unless it only lists the
/// others. Naming the list-default recipe also just lists.
pub fn resolve_target<'a>(justfile: &'a Justfile, requested: Option<&'a str>) -> Result<Target<'a>, Error> {
    let name = match requested {
        Some(name) => justfile.resolve_alias(name),
        None => match justfile.recipes.first() {
            Some(first) => first.name.as_str(),
            None => return Err(Error::NoRecipes),
        },
    };

    if justfile.list_default().is_some_and(|r| r.name == name) {
        return Ok(Target::List);
    }

    Ok(Target::Recipe(name))
}

/// Execute the run action
pub fn execute(ctx: &Context, recipe: Option<&str>, args: &[String], dry_run: bool) -> Result<()> {
    let justfile = &ctx.justfile;

    let name = match resolve_target(justfile, recipe)? {
        Target::List => {
            print!("{}", list_recipes(justfile));
            return Ok(());
        }
        Target::Recipe(name) => name,
    };

    let recipe = justfile
        .find_recipe(name)
        .ok_or_else(|| Error::UnknownRecipe {
            name: name.to_string(),
        })?;
    let assignments = map_args(recipe, args)?;

    let makefile = MakefileGenerator::new(&ctx.config.make).generate(justfile);
    runner::run(
        &ctx.config.make,
        &makefile,
        &recipe.name,
        &assignments,
        &ctx.working_dir(),
        dry_run,
    )
}
