//! Errors raised by the parse / bind / run pipeline

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("reading justfile: {0}")]
    Read(#[from] std::io::Error),

    #[error("unknown recipe: {name}")]
    UnknownRecipe { name: String },

    #[error("recipe '{recipe}' requires argument '{param}'")]
    MissingArgument { recipe: String, param: String },

    #[error("recipe '{recipe}' requires at least one argument for '{param}'")]
    MissingVariadic { recipe: String, param: String },

    #[error("unknown flag: {flag}")]
    UnknownFlag { flag: String },

    #[error("no recipes found in justfile")]
    NoRecipes,

    #[error("no justfile found in {} or any parent directory", .start.display())]
    JustfileNotFound { start: PathBuf },

    #[error("{program} exited with {status}")]
    BuildFailed { program: String, status: String },
}
