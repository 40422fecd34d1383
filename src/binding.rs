//! Bind positional command-line arguments to recipe parameters
//!
//! Each bound parameter becomes a `name=value` make variable assignment.
//! Parameters left unbound fall back to their default through the
//! generated `?=` line, so no assignment is produced for them.

use crate::error::{Error, Result};
use crate::model::{Recipe, Variadic};

/// Map `args` onto `recipe`'s parameters, left to right.
///
/// Extra arguments past the last parameter are ignored.
pub fn map_args(recipe: &Recipe, args: &[String]) -> Result<Vec<String>> {
    let mut assignments = Vec::new();
    let mut remaining = args;

    for param in &recipe.params {
        match param.variadic {
            Variadic::None => match remaining.split_first() {
                Some((value, rest)) => {
                    assignments.push(format!("{}={}", param.name, value));
                    remaining = rest;
                }
                None if param.has_default() => {}
                None => {
                    return Err(Error::MissingArgument {
                        recipe: recipe.name.clone(),
                        param: param.name.clone(),
                    })
                }
            },
            Variadic::OneOrMore if remaining.is_empty() => {
                return Err(Error::MissingVariadic {
                    recipe: recipe.name.clone(),
                    param: param.name.clone(),
                })
            }
            Variadic::ZeroOrMore | Variadic::OneOrMore => {
                if !remaining.is_empty() {
                    assignments.push(format!("{}={}", param.name, remaining.join(" ")));
                    remaining = &[];
                }
            }
        }
    }

    if !remaining.is_empty() {
        log::debug!(
            "recipe '{}' ignores {} extra argument(s)",
            recipe.name,
            remaining.len()
        );
    }

    Ok(assignments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Param;

    fn recipe(name: &str, params: Vec<Param>) -> Recipe {
        let mut recipe = Recipe::new(name);
        recipe.params = params;
        recipe
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_positional_args() {
        let r = recipe("deploy", vec![Param::new("env"), Param::new("tag")]);
        let got = map_args(&r, &args(&["prod", "v1.0"])).unwrap();
        assert_eq!(got, vec!["env=prod", "tag=v1.0"]);
    }

    #[test]
    fn test_variadic_star_collects_all() {
        let r = recipe(
            "cli",
            vec![Param::new("ARGS").with_variadic(Variadic::ZeroOrMore)],
        );
        let got = map_args(&r, &args(&["--verbose", "run"])).unwrap();
        assert_eq!(got, vec!["ARGS=--verbose run"]);
    }

    #[test]
    fn test_variadic_star_no_args_is_ok() {
        let r = recipe(
            "cli",
            vec![Param::new("ARGS").with_variadic(Variadic::ZeroOrMore)],
        );
        assert!(map_args(&r, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_variadic_plus_requires_one() {
        let r = recipe(
            "run",
            vec![Param::new("FILES").with_variadic(Variadic::OneOrMore)],
        );
        let err = map_args(&r, &[]).unwrap_err();
        assert!(matches!(err, Error::MissingVariadic { .. }));
        assert!(err.to_string().contains("run"));
        assert!(err.to_string().contains("FILES"));

        let got = map_args(&r, &args(&["a.txt"])).unwrap();
        assert_eq!(got, vec!["FILES=a.txt"]);
    }

    #[test]
    fn test_missing_required_arg() {
        let r = recipe("deploy", vec![Param::new("env")]);
        let err = map_args(&r, &[]).unwrap_err();
        match err {
            Error::MissingArgument { recipe, param } => {
                assert_eq!(recipe, "deploy");
                assert_eq!(param, "env");
            }
            other => panic!("Expected MissingArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_default_used_when_no_arg() {
        let r = recipe("deploy", vec![Param::new("env").with_default("staging")]);
        assert!(map_args(&r, &[]).unwrap().is_empty());

        let got = map_args(&r, &args(&["prod"])).unwrap();
        assert_eq!(got, vec!["env=prod"]);
    }

    #[test]
    fn test_positional_then_variadic() {
        let r = recipe(
            "test",
            vec![
                Param::new("target"),
                Param::new("FLAGS").with_variadic(Variadic::ZeroOrMore),
            ],
        );
        let got = map_args(&r, &args(&["unit", "-v", "--nocapture"])).unwrap();
        assert_eq!(got, vec!["target=unit", "FLAGS=-v --nocapture"]);

        let got = map_args(&r, &args(&["unit"])).unwrap();
        assert_eq!(got, vec!["target=unit"]);
    }

    #[test]
    fn test_extra_args_ignored() {
        let r = recipe("greet", vec![Param::new("name")]);
        let got = map_args(&r, &args(&["ada", "extra", "more"])).unwrap();
        assert_eq!(got, vec!["name=ada"]);
    }

    #[test]
    fn test_no_params() {
        let r = recipe("build", vec![]);
        assert!(map_args(&r, &args(&["ignored"])).unwrap().is_empty());
    }
}
