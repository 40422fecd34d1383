//! Justfile data structures
//!
//! The parser produces a [`Justfile`]; the generator, lister and argument
//! binder only ever borrow it.

/// Native invocations that list every recipe. A first recipe whose only
/// body line is one of these is replaced by a synthetic `help` target.
const LIST_INVOCATIONS: &[&str] = &["just --list", "just -l"];

/// Variadic marker of a recipe parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variadic {
    #[default]
    None,
    /// `*name` - collects zero or more trailing arguments
    ZeroOrMore,
    /// `+name` - collects one or more trailing arguments
    OneOrMore,
}

impl Variadic {
    /// Prefix used in the source syntax (`*`, `+` or nothing)
    pub fn marker(&self) -> &'static str {
        match self {
            Variadic::None => "",
            Variadic::ZeroOrMore => "*",
            Variadic::OneOrMore => "+",
        }
    }
}

impl std::str::FromStr for Variadic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Variadic::None),
            "*" => Ok(Variadic::ZeroOrMore),
            "+" => Ok(Variadic::OneOrMore),
            _ => Err(format!("Unknown variadic marker: {}", s)),
        }
    }
}

/// A recipe parameter
///
/// An empty `default` means the parameter is required.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Param {
    pub name: String,
    pub default: String,
    pub variadic: Variadic,
}

impl Param {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    pub fn with_variadic(mut self, variadic: Variadic) -> Self {
        self.variadic = variadic;
        self
    }

    pub fn has_default(&self) -> bool {
        !self.default.is_empty()
    }
}

impl std::fmt::Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.variadic.marker(), self.name)?;
        if self.has_default() {
            write!(f, "=\"{}\"", self.default)?;
        }
        Ok(())
    }
}

/// Top-level variable assignment
///
/// `value` never keeps its quotes or backticks; `backtick` records that it
/// is a shell command rather than a literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub value: String,
    pub export: bool,
    pub backtick: bool,
}

/// `alias name := target`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    pub name: String,
    pub target: String,
}

/// A recipe: header, doc comment and body lines with one indent level removed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Recipe {
    pub name: String,
    pub doc: String,
    pub params: Vec<Param>,
    pub dependencies: Vec<String>,
    pub lines: Vec<String>,
}

impl Recipe {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// True when every body line starts with `@`.
    pub fn is_silent(&self) -> bool {
        !self.lines.is_empty() && self.lines.iter().all(|l| l.starts_with('@'))
    }

    /// True when the body is a single call to the native recipe listing.
    pub fn is_list_default(&self) -> bool {
        match self.lines.as_slice() {
            [only] => {
                let command = only.trim_start_matches('@').trim();
                LIST_INVOCATIONS.contains(&command)
            }
            _ => false,
        }
    }
}

/// Parsed justfile
#[derive(Debug, Clone, Default)]
pub struct Justfile {
    pub variables: Vec<Variable>,
    pub recipes: Vec<Recipe>,
    pub aliases: Vec<Alias>,
}

impl Justfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_variable(&mut self, variable: Variable) {
        self.variables.push(variable);
    }

    pub fn add_recipe(&mut self, recipe: Recipe) {
        self.recipes.push(recipe);
    }

    pub fn add_alias(&mut self, alias: Alias) {
        self.aliases.push(alias);
    }

    /// Resolve an alias to its target. The first matching alias wins;
    /// names that are not aliases come back unchanged.
    pub fn resolve_alias<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.target.as_str())
            .unwrap_or(name)
    }

    pub fn find_recipe(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    /// The first recipe, if it only lists the other recipes.
    pub fn list_default(&self) -> Option<&Recipe> {
        self.recipes.first().filter(|r| r.is_list_default())
    }

    /// Recipes that are real targets (everything except the list-default).
    pub fn invocable_recipes(&self) -> impl Iterator<Item = &Recipe> {
        let skip = usize::from(self.list_default().is_some());
        self.recipes.iter().skip(skip)
    }
}
