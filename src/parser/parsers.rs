//! # Line Classification
//!
//! Turns one trimmed, non-body justfile line into a [`LineKind`].
//!
//! ## Method Naming Convention
//!
//! - `try_parse_*` - Returns `Option<_>`, `None` when the line is some other kind
//! - `parse_*` - Always succeeds (header decomposition)
//!
//! Classification never fails: a line matching no pattern becomes
//! [`LineKind::Unknown`] and is skipped by the state machine.

use super::patterns::*;
use crate::model::{Alias, Param, Recipe, Variable, Variadic};
use crate::utils::strings::{strip_backticks, strip_quotes};

/// Classification of a trimmed line outside any recipe body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    /// `# --- Section ---`, never documentation
    Separator,
    /// Comment text after `#`, trimmed
    Comment(String),
    Alias(Alias),
    Variable(Variable),
    /// A new recipe with an empty doc and no body yet
    Header(Recipe),
    Unknown,
}

impl LineKind {
    pub fn label(&self) -> &'static str {
        match self {
            LineKind::Blank => "blank",
            LineKind::Separator => "separator",
            LineKind::Comment(_) => "comment",
            LineKind::Alias(_) => "alias",
            LineKind::Variable(_) => "variable",
            LineKind::Header(_) => "header",
            LineKind::Unknown => "unknown",
        }
    }
}

/// Classify a trimmed line. Matchers run in priority order; the first hit wins.
pub fn classify(line: &str) -> LineKind {
    if line.is_empty() {
        return LineKind::Blank;
    }
    if SECTION_SEP_RE.is_match(line) {
        return LineKind::Separator;
    }
    if let Some(text) = line.strip_prefix('#') {
        return LineKind::Comment(text.trim().to_string());
    }
    if let Some(alias) = try_parse_alias(line) {
        return LineKind::Alias(alias);
    }
    if let Some(variable) = try_parse_variable(line) {
        return LineKind::Variable(variable);
    }
    if SETTING_RE.is_match(line) {
        return LineKind::Unknown;
    }
    if let Some(recipe) = try_parse_header(line) {
        return LineKind::Header(recipe);
    }
    LineKind::Unknown
}

/// Try to parse `alias name := target`.
pub fn try_parse_alias(line: &str) -> Option<Alias> {
    let caps = ALIAS_RE.captures(line)?;
    Some(Alias {
        name: caps[1].to_string(),
        target: caps[2].to_string(),
    })
}

/// Try to parse `[export] name := value`.
///
/// A value wrapped in backticks is stored without them and flagged as a
/// command; otherwise one layer of matching quotes is removed.
pub fn try_parse_variable(line: &str) -> Option<Variable> {
    let caps = VARIABLE_RE.captures(line)?;
    let export = caps.get(1).is_some();
    let raw = caps[3].trim();

    let (value, backtick) = match strip_backticks(raw) {
        Some(command) => (command.to_string(), true),
        None => (strip_quotes(raw), false),
    };

    Some(Variable {
        name: caps[2].to_string(),
        value,
        export,
        backtick,
    })
}

/// Try to parse a recipe header `name param...: dep...`.
pub fn try_parse_header(line: &str) -> Option<Recipe> {
    let caps = RECIPE_HEADER_RE.captures(line)?;

    let mut recipe = Recipe::new(&caps[1]);
    if let Some(params) = caps.get(2) {
        recipe.params = parse_params(params.as_str());
    }
    if let Some(deps) = caps.get(3) {
        recipe.dependencies = parse_deps(deps.as_str());
    }

    Some(recipe)
}

/// Decompose the parameter part of a header into [`Param`]s.
///
/// - `*name` / `+name` - variadic
/// - `name=value` - default value, one layer of quotes stripped
/// - anything else - required parameter named by the token
pub fn parse_params(s: &str) -> Vec<Param> {
    s.split_whitespace().map(parse_param).collect()
}

fn parse_param(token: &str) -> Param {
    if let Some(caps) = VARIADIC_PARAM_RE.captures(token) {
        // The pattern only admits `*` or `+`
        let variadic: Variadic = caps[1].parse().unwrap_or_default();
        return Param::new(&caps[2]).with_variadic(variadic);
    }

    if let Some(caps) = DEFAULT_PARAM_RE.captures(token) {
        return Param::new(&caps[1]).with_default(strip_quotes(&caps[2]));
    }

    Param::new(token)
}

/// Split the dependency part of a header on whitespace.
pub fn parse_deps(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_string).collect()
}
