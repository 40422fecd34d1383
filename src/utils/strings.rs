//! String utility functions

/// Strip one layer of matching surrounding quotes from a value.
///
/// Single and double quotes are both accepted, but only when the same quote
/// character opens and closes the value. Anything else comes back trimmed
/// and otherwise untouched.
///
/// # Examples
///
/// ```
/// use jmake::utils::strings::strip_quotes;
///
/// assert_eq!(strip_quotes("'hello'"), "hello");
/// assert_eq!(strip_quotes("\"world\""), "world");
/// assert_eq!(strip_quotes("\"'nested'\""), "'nested'");
/// assert_eq!(strip_quotes("no quotes"), "no quotes");
/// ```
pub fn strip_quotes(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.len() >= 2
        && ((trimmed.starts_with('\'') && trimmed.ends_with('\''))
            || (trimmed.starts_with('"') && trimmed.ends_with('"')))
    {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.to_string()
    }
}

/// Return the text between a pair of backticks wrapping the whole value.
pub fn strip_backticks(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('`') && trimmed.ends_with('`') {
        Some(&trimmed[1..trimmed.len() - 1])
    } else {
        None
    }
}
