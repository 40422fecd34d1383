//! Makefile generator
//!
//! Serializes a [`Justfile`] into GNU make syntax:
//!
//! ```text
//! # Generated by jmake from a justfile. Do not edit.
//! SHELL := /bin/bash
//!
//! export VERSION := 1.0
//! REV := $(shell git rev-parse HEAD)
//!
//! .PHONY: build deploy help
//! .DEFAULT_GOAL := help
//!
//! help:
//! 	@echo 'Available recipes:'
//! 	@echo '    build # Build it'
//!
//! build:
//! 	cargo build
//!
//! deploy: env ?= staging
//! deploy: build
//! 	./deploy $(env)
//! ```
//!
//! Recipe parameters never appear in rule headers. The argument binder
//! passes them as `name=value` on the make command line; parameters with a
//! default also get a target-specific `?=` so make fills in the default.

pub mod convert;

use std::fmt::Write;

use crate::lister::list_recipes;
use crate::model::{Justfile, MakeConfig, Recipe, Variable};

pub use convert::convert_line;

/// Name of the synthesized listing target
pub const HELP_TARGET: &str = "help";

const HEADER_COMMENT: &str = "# Generated by jmake from a justfile. Do not edit.";

/// Makefile generator
pub struct MakefileGenerator {
    /// Value of the `SHELL :=` line
    shell: String,
}

impl MakefileGenerator {
    pub fn new(config: &MakeConfig) -> Self {
        Self {
            shell: config.shell.clone(),
        }
    }

    /// Create a generator with a specific shell
    pub fn with_shell(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    /// Generate the full Makefile text.
    pub fn generate(&self, justfile: &Justfile) -> String {
        let list_default = justfile.list_default();
        let synthesize_help = !justfile
            .invocable_recipes()
            .any(|r| r.name == HELP_TARGET);

        if let Some(recipe) = list_default {
            log::debug!("recipe '{}' replaced by '{}'", recipe.name, HELP_TARGET);
        }

        let mut output = String::new();
        let _ = writeln!(output, "{}", HEADER_COMMENT);
        let _ = writeln!(output, "SHELL := {}", self.shell);

        if !justfile.variables.is_empty() {
            output.push('\n');
            for variable in &justfile.variables {
                let _ = writeln!(output, "{}", self.format_variable(variable));
            }
        }

        output.push('\n');
        let _ = writeln!(output, "{}", self.format_phony(justfile));
        let _ = writeln!(output, ".DEFAULT_GOAL := {}", self.default_goal(justfile));

        // With a list-default the help target leads, otherwise it trails
        if synthesize_help && list_default.is_some() {
            output.push('\n');
            output.push_str(&self.format_help(justfile));
        }

        for recipe in justfile.invocable_recipes() {
            output.push('\n');
            output.push_str(&self.format_recipe(recipe, justfile));
        }

        if synthesize_help && list_default.is_none() {
            output.push('\n');
            output.push_str(&self.format_help(justfile));
        }

        output
    }

    fn format_variable(&self, variable: &Variable) -> String {
        let value = if variable.backtick {
            format!("$(shell {})", variable.value)
        } else {
            variable.value.clone()
        };

        if variable.export {
            format!("export {} := {}", variable.name, value)
        } else {
            format!("{} := {}", variable.name, value)
        }
    }

    fn format_phony(&self, justfile: &Justfile) -> String {
        let mut targets: Vec<&str> = justfile
            .invocable_recipes()
            .map(|r| r.name.as_str())
            .collect();
        if !targets.contains(&HELP_TARGET) {
            targets.push(HELP_TARGET);
        }
        format!(".PHONY: {}", targets.join(" "))
    }

    fn default_goal<'a>(&self, justfile: &'a Justfile) -> &'a str {
        if justfile.list_default().is_some() {
            return HELP_TARGET;
        }
        justfile
            .recipes
            .first()
            .map(|r| r.name.as_str())
            .unwrap_or(HELP_TARGET)
    }

    /// `help` target echoing the recipe listing
    fn format_help(&self, justfile: &Justfile) -> String {
        let mut output = format!("{}:\n", HELP_TARGET);
        for line in list_recipes(justfile).lines() {
            let _ = writeln!(output, "\t@echo '{}'", escape_echo(line));
        }
        output
    }

    fn format_recipe(&self, recipe: &Recipe, justfile: &Justfile) -> String {
        let mut output = String::new();

        for param in recipe.params.iter().filter(|p| p.has_default()) {
            let _ = writeln!(output, "{}: {} ?= {}", recipe.name, param.name, param.default);
        }

        let prerequisites: Vec<&str> = recipe
            .dependencies
            .iter()
            .map(|dep| resolve_dependency(justfile, dep))
            .collect();

        if prerequisites.is_empty() {
            let _ = writeln!(output, "{}:", recipe.name);
        } else {
            let _ = writeln!(output, "{}: {}", recipe.name, prerequisites.join(" "));
        }

        for line in &recipe.lines {
            let _ = writeln!(output, "\t{}", convert_line(line));
        }

        output
    }
}

impl Default for MakefileGenerator {
    fn default() -> Self {
        Self::new(&MakeConfig::default())
    }
}

/// Resolve a dependency through aliases; the list-default recipe maps to `help`.
fn resolve_dependency<'a>(justfile: &'a Justfile, dep: &'a str) -> &'a str {
    let name = justfile.resolve_alias(dep);
    match justfile.list_default() {
        Some(recipe) if recipe.name == name => HELP_TARGET,
        _ => name,
    }
}

/// Quote a line for `echo '...'` inside a make recipe.
fn escape_echo(line: &str) -> String {
    line.replace('$', "$$").replace('\'', r"'\''")
}
