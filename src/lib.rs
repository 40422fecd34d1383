//! jmake - run justfile recipes via make
//!
//! Translates a justfile into an equivalent Makefile and optionally runs a
//! recipe through `make`.
//!
//! # Pipeline
//!
//! ```text
//! justfile text ─▶ parser ─▶ Justfile ─┬─▶ generator ─▶ Makefile text
//!                                      ├─▶ lister    ─▶ recipe listing
//!                                      └─▶ binding   ─▶ name=value assignments
//! ```
//!
//! # Example
//!
//! ```rust
//! use jmake::{parse_str, MakefileGenerator};
//!
//! let justfile = parse_str("greet name:\n\techo hello {{name}}\n");
//! let makefile = MakefileGenerator::default().generate(&justfile);
//! assert!(makefile.contains("greet:\n\techo hello $(name)\n"));
//! ```

pub mod binding;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod lister;
pub mod model;
pub mod parser;
pub mod runner;
pub mod utils;

pub use binding::map_args;
pub use error::{Error, Result};
pub use generator::{convert_line, MakefileGenerator};
pub use lister::list_recipes;
pub use model::{Alias, Config, Justfile, Param, Recipe, Variable, Variadic};
pub use parser::{parse_reader, parse_str};
