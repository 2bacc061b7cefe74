//! Variable interpolation for dotfile templates.
//!
//! Templates use `${variable}` syntax. `$$` escapes a literal `$`, so
//! shell text like `$${HOME}` renders as `${HOME}`.

use std::collections::HashMap;

use crate::error::{KitbagError, Result};

/// Render a template, substituting `${var}` references from `vars`.
///
/// Unknown variables and unclosed references are errors: a dotfile with a
/// leftover marker is worse than a failed run.
pub fn render(input: &str, vars: &HashMap<String, String>) -> Result<String> {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }

        match chars.peek() {
            Some('$') => {
                chars.next();
                out.push('$');
            }
            Some('{') => {
                chars.next();
                let mut name = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }
                if !closed {
                    return Err(KitbagError::Template {
                        message: format!("unclosed variable reference: ${{{}", name),
                    });
                }
                let value = vars.get(&name).ok_or_else(|| KitbagError::Template {
                    message: format!("unknown variable: {}", name),
                })?;
                out.push_str(value);
            }
            _ => out.push('$'),
        }
    }

    Ok(out)
}

/// Convenience constructor for variable maps.
pub fn vars<const N: usize>(pairs: [(&str, &str); N]) -> HashMap<String, String> {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_variables() {
        let v = vars([("user", "alice")]);
        assert_eq!(render("hello ${user}!", &v).unwrap(), "hello alice!");
    }

    #[test]
    fn multiple_occurrences() {
        let v = vars([("x", "1")]);
        assert_eq!(render("${x}${x}${x}", &v).unwrap(), "111");
    }

    #[test]
    fn dollar_dollar_escapes() {
        let v = vars([]);
        assert_eq!(render("path is $${HOME}", &v).unwrap(), "path is ${HOME}");
    }

    #[test]
    fn bare_dollar_passes_through() {
        let v = vars([]);
        assert_eq!(render("costs $5", &v).unwrap(), "costs $5");
        assert_eq!(render("trailing $", &v).unwrap(), "trailing $");
    }

    #[test]
    fn unknown_variable_errors() {
        let v = vars([]);
        let err = render("${missing}", &v).unwrap_err();
        assert!(matches!(err, KitbagError::Template { .. }));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn unclosed_reference_errors() {
        let v = vars([("user", "a")]);
        assert!(render("${user", &v).is_err());
    }

    #[test]
    fn empty_input() {
        let v = vars([]);
        assert_eq!(render("", &v).unwrap(), "");
    }
}
