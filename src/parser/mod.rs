//! # Parser Module
//!
//! Recovers a [`Justfile`] from justfile text.
//!
//! ## Architecture Overview
//!
//! ```text
//! parser/
//! ├── mod.rs       - This file: ParseState state machine + entry points
//! ├── patterns.rs  - Regex patterns (SECTION_SEP_RE, RECIPE_HEADER_RE, etc.)
//! └── parsers.rs   - Line classification + header decomposition
//! ```
//!
//! ## Parsing State Machine
//!
//! | State | Meaning | Leaves when |
//! |-------|---------|-------------|
//! | Idle | No open recipe | A recipe header is classified |
//! | InBody | Collecting body lines | A line not indented by a tab or four spaces |
//!
//! In `InBody`, a non-empty line starting with `\t` or four spaces loses
//! that one indent unit and is appended to the open recipe. Any other line
//! closes the recipe and is then classified as if the parser were `Idle`.
//!
//! A comment line only documents a header that follows it immediately.
//! Blank lines, separators, aliases, variables and unknown lines all clear
//! the pending doc.
//!
//! ## Usage
//!
//! ```rust
//! use jmake::parser::parse_str;
//!
//! let justfile = parse_str("# Build it\nbuild:\n\tcargo build\n");
//! let build = justfile.find_recipe("build").unwrap();
//! assert_eq!(build.doc, "Build it");
//! assert_eq!(build.lines, vec!["cargo build"]);
//! ```
//!
//! Parsing never fails on content. [`parse_reader`] only fails when the
//! reader does.

pub mod parsers;
pub mod patterns;

use std::io::BufRead;

use crate::error::Result;
use crate::model::{Justfile, Recipe};

use parsers::{classify, LineKind};

/// Parser state threaded through every physical line.
#[derive(Debug, Default)]
pub struct ParseState {
    justfile: Justfile,
    /// Open recipe; `Some` means the parser is in the body state
    current: Option<Recipe>,
    /// Doc text waiting for the next recipe header
    pending_doc: Option<String>,
}

impl ParseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_body(&self) -> bool {
        self.current.is_some()
    }

    pub fn pending_doc(&self) -> Option<&str> {
        self.pending_doc.as_deref()
    }

    /// Feed one physical line (without its line terminator).
    pub fn feed_line(&mut self, line: &str) {
        if let Some(recipe) = self.current.as_mut() {
            if let Some(body) = strip_indent(line) {
                recipe.lines.push(body.to_string());
                return;
            }
            self.close_recipe();
        }

        let kind = classify(line.trim());
        log::trace!("{}: {:?}", kind.label(), line);

        match kind {
            LineKind::Comment(text) => self.pending_doc = Some(text),
            LineKind::Alias(alias) => {
                self.pending_doc = None;
                self.justfile.add_alias(alias);
            }
            LineKind::Variable(variable) => {
                self.pending_doc = None;
                self.justfile.add_variable(variable);
            }
            LineKind::Header(mut recipe) => {
                recipe.doc = self.pending_doc.take().unwrap_or_default();
                log::debug!("open recipe '{}'", recipe.name);
                self.current = Some(recipe);
            }
            LineKind::Blank | LineKind::Separator | LineKind::Unknown => {
                self.pending_doc = None;
            }
        }
    }

    /// Close any open recipe and return the document.
    pub fn finish(mut self) -> Justfile {
        self.close_recipe();
        self.justfile
    }

    fn close_recipe(&mut self) {
        if let Some(recipe) = self.current.take() {
            log::debug!(
                "close recipe '{}' ({} lines)",
                recipe.name,
                recipe.lines.len()
            );
            self.justfile.add_recipe(recipe);
        }
    }
}

/// Remove one indent unit (a tab or exactly four spaces) from a body line.
fn strip_indent(line: &str) -> Option<&str> {
    line.strip_prefix('\t')
        .or_else(|| line.strip_prefix("    "))
}

/// Parse justfile text.
pub fn parse_str(content: &str) -> Justfile {
    let mut state = ParseState::new();
    for line in content.lines() {
        state.feed_line(line);
    }
    state.finish()
}

/// Parse a justfile from a reader, failing only on read errors.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Justfile> {
    let mut state = ParseState::new();
    for line in reader.lines() {
        state.feed_line(&line?);
    }
    Ok(state.finish())
}
