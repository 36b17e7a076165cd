//! Placeholder substitution for display templates.
//!
//! Templates use `{{.Name}}` placeholders resolved against a single
//! [`SubstitutionMap`]. The engine is a character walk with no control flow,
//! filters, or nesting: plain text passes through verbatim and substitution
//! can never fail.
//!
//! # Degradation rules
//!
//! - A placeholder whose name is absent from the map renders as the literal
//!   marker [`NO_VALUE`], never an error.
//! - Malformed placeholders (unclosed, empty, or non-identifier names) pass
//!   through verbatim.
//!
//! # Example
//!
//! ```rust
//! use parlance_render::template::{substitute, SubstitutionMap};
//!
//! let mut vars = SubstitutionMap::new();
//! vars.insert("Name".to_string(), "world".to_string());
//!
//! assert_eq!(substitute("hello {{.Name}}", &vars), "hello world");
//! assert_eq!(substitute("hello {{.Missing}}", &vars), "hello <no value>");
//! ```

use std::collections::HashMap;

/// Placeholder name to replacement value.
pub type SubstitutionMap = HashMap<String, String>;

/// Literal marker emitted for placeholders absent from the substitution map.
pub const NO_VALUE: &str = "<no value>";

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Substitutes placeholders, passing each resolved value through `decorate`.
///
/// Only resolved values are decorated; surrounding template text and the
/// [`NO_VALUE`] marker are emitted as-is.
pub fn substitute_with<F>(template: &str, vars: &SubstitutionMap, mut decorate: F) -> String
where
    F: FnMut(&str) -> String,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{.") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 3..];
        match after.find("}}") {
            Some(end) if is_placeholder_name(&after[..end]) => {
                match vars.get(&after[..end]) {
                    Some(value) => out.push_str(&decorate(value)),
                    None => out.push_str(NO_VALUE),
                }
                rest = &after[end + 2..];
            }
            _ => {
                // Malformed placeholder passes through verbatim.
                out.push_str("{{.");
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Substitutes placeholders with their plain values.
pub fn substitute(template: &str, vars: &SubstitutionMap) -> String {
    substitute_with(template, vars, |value| value.to_string())
}
