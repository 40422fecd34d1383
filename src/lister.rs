//! Human-readable recipe listing

use std::fmt::Write;

use crate::model::{Justfile, Recipe};

/// First line of every listing
pub const LIST_HEADING: &str = "Available recipes:";

const LIST_INDENT: &str = "    ";

/// Render `name param...`, e.g. `deploy env="staging" *ARGS`.
pub fn recipe_signature(recipe: &Recipe) -> String {
    let mut signature = recipe.name.clone();
    for param in &recipe.params {
        signature.push(' ');
        signature.push_str(&param.to_string());
    }
    signature
}

/// List every invocable recipe in document order, docs aligned in one column.
///
/// The list-default recipe is left out: it is the listing.
pub fn list_recipes(justfile: &Justfile) -> String {
    let rows: Vec<(String, &str)> = justfile
        .invocable_recipes()
        .map(|r| (recipe_signature(r), r.doc.as_str()))
        .collect();

    let width = rows
        .iter()
        .filter(|(_, doc)| !doc.is_empty())
        .map(|(signature, _)| signature.chars().count())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    let _ = writeln!(output, "{}", LIST_HEADING);

    for (signature, doc) in &rows {
        if doc.is_empty() {
            let _ = writeln!(output, "{}{}", LIST_INDENT, signature);
        } else {
            let _ = writeln!(output, "{}{:<width$} # {}", LIST_INDENT, signature, doc, width = width);
        }
    }

    output
}
