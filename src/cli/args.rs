//! CLI argument definitions using Clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jmake")]
#[command(about = "jmake - run justfile recipes via make")]
#[command(version, disable_version_flag = true)]
pub struct Cli {
    /// List available recipes
    #[arg(short, long)]
    pub list: bool,

    /// Print generated Makefile to stdout
    #[arg(short, long)]
    pub dump: bool,

    /// Specify justfile path
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Show make command without executing
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Show version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,

    /// Recipe to run followed by its arguments
    #[arg(
        value_name = "RECIPE",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

impl Cli {
    /// Recipe named on the command line, if any
    pub fn recipe(&self) -> Option<&str> {
        self.command.first().map(String::as_str)
    }

    /// Positional arguments following the recipe name
    pub fn recipe_args(&self) -> &[String] {
        self.command.get(1..).unwrap_or_default()
    }

    /// A leading positional that looks like a flag clap didn't recognise.
    ///
    /// Once a recipe name is seen every later token belongs to the recipe,
    /// so only the first positional is checked.
    pub fn unknown_flag(&self) -> Option<&str> {
        self.recipe().filter(|r| r.starts_with('-'))
    }
}
