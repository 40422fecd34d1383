//! Body line conversion from justfile to Makefile syntax
//!
//! | justfile | Makefile |
//! |----------|----------|
//! | `{{NAME}}` | `$(NAME)` |
//! | `` `cmd` `` | `$(shell cmd)` |
//!
//! The line is scanned once, left to right. Text produced by one
//! substitution is never rescanned, so a backtick inside `{{ }}` or braces
//! inside backticks are carried over as they are. An unterminated span is
//! copied literally.

const INTERP_OPEN: &str = "{{";
const INTERP_CLOSE: &str = "}}";
const BACKTICK: char = '`';

/// Convert one recipe body line.
pub fn convert_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + 8);
    let mut rest = line;

    while !rest.is_empty() {
        if let Some(after_open) = rest.strip_prefix(INTERP_OPEN) {
            if let Some(end) = after_open.find(INTERP_CLOSE) {
                out.push_str("$(");
                out.push_str(after_open[..end].trim());
                out.push(')');
                rest = &after_open[end + INTERP_CLOSE.len()..];
                continue;
            }
        } else if let Some(after_tick) = rest.strip_prefix(BACKTICK) {
            if let Some(end) = after_tick.find(BACKTICK) {
                out.push_str("$(shell ");
                out.push_str(&after_tick[..end]);
                out.push(')');
                rest = &after_tick[end + BACKTICK.len_utf8()..];
                continue;
            }
        }

        // Plain text (or an unterminated span): copy one char and move on
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        rest = chars.as_str();
    }

    out
}
