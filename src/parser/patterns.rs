//! # Justfile Regex Patterns
//!
//! All regex patterns for classifying justfile lines.
//!
//! ## Pattern Order
//!
//! The patterns are tried in a fixed order by [`super::parsers::classify`]:
//!
//! | Order | Pattern | Example |
//! |-------|---------|---------|
//! | 1 | `SECTION_SEP_RE` | `# --- Build ---` |
//! | 2 | `#` prefix (no regex) | `# Build the project` |
//! | 3 | `ALIAS_RE` | `alias b := build` |
//! | 4 | `VARIABLE_RE` | `export VERSION := "1.0"` |
//! | 5 | `SETTING_RE` | `set shell := ["bash", "-c"]` |
//! | 6 | `RECIPE_HEADER_RE` | `deploy env="staging": build` |
//!
//! The separator must be tried before the generic comment, and the alias,
//! variable and setting patterns before the recipe header. Settings lines
//! are recognised only to be skipped.
//!
//! ## Parameter Patterns
//!
//! `VARIADIC_PARAM_RE` and `DEFAULT_PARAM_RE` decompose the parameter
//! tokens of a header. A token matching neither is a plain required
//! parameter.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches a decorative section comment: `# --- Section ---`
    pub static ref SECTION_SEP_RE: Regex = Regex::new(
        r#"^#\s*---.*---\s*$"#
    ).unwrap();

    /// Matches an alias: `alias name := target`
    ///
    /// Captures:
    /// - Group 1: alias name
    /// - Group 2: target recipe name
    pub static ref ALIAS_RE: Regex = Regex::new(
        r#"^alias\s+([a-zA-Z_][a-zA-Z0-9_-]*)\s*:=\s*([a-zA-Z_][a-zA-Z0-9_-]*)\s*$"#
    ).unwrap();

    /// Matches a variable assignment: `[export] name := value`
    ///
    /// Captures:
    /// - Group 1: `export ` keyword (optional)
    /// - Group 2: variable name
    /// - Group 3: raw value (quoted, bare or backtick command)
    pub static ref VARIABLE_RE: Regex = Regex::new(
        r#"^(export\s+)?([a-zA-Z_][a-zA-Z0-9_-]*)\s*:=\s*(.+)$"#
    ).unwrap();

    /// Matches a settings line: `set name ...`
    pub static ref SETTING_RE: Regex = Regex::new(
        r#"^set\s+[a-zA-Z_][a-zA-Z0-9_-]*(\s|:=|$)"#
    ).unwrap();

    /// Matches a recipe header: `name param...: dep...`
    ///
    /// Colons inside quoted parameter defaults do not end the parameter
    /// list. A `:` followed directly by `=` is an assignment, not a header.
    ///
    /// Captures:
    /// - Group 1: recipe name
    /// - Group 2: parameter tokens (optional, leading whitespace included)
    /// - Group 3: dependency tokens (optional)
    pub static ref RECIPE_HEADER_RE: Regex = Regex::new(
        r#"^([a-zA-Z_][a-zA-Z0-9_-]*)(\s+(?:[^:"']|"[^"]*"|'[^']*')+)?:([^=].*)?$"#
    ).unwrap();

    /// Matches a variadic parameter token: `*ARGS` or `+FILES`
    ///
    /// Captures:
    /// - Group 1: marker (`*` or `+`)
    /// - Group 2: parameter name
    pub static ref VARIADIC_PARAM_RE: Regex = Regex::new(
        r#"^([*+])([a-zA-Z_][a-zA-Z0-9_-]*)$"#
    ).unwrap();

    /// Matches a parameter token with a default: `env="staging"`
    ///
    /// Captures:
    /// - Group 1: parameter name
    /// - Group 2: default value (quotes still attached)
    pub static ref DEFAULT_PARAM_RE: Regex = Regex::new(
        r#"^([a-zA-Z_][a-zA-Z0-9_-]*)=(.+)$"#
    ).unwrap();
}
