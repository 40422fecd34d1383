//! Core data models for jmake

mod config;
mod justfile;

pub use config::{Config, MakeConfig, MAKE_ENV};
pub use justfile::{Alias, Justfile, Param, Recipe, Variable, Variadic};
