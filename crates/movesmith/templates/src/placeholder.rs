//! `{{key}}` placeholder substitution.
//!
//! Single pass, left to right: substituted values are copied as-is and never
//! re-scanned, so a parameter containing `{{name}}` stays literal.

use tracing::warn;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Replace every `{{key}}` in `template` with its bound value.
///
/// Keys are matched after trimming surrounding whitespace. A placeholder
/// whose key has no binding is left verbatim. An opening `{{` with no
/// closing `}}` is copied through unchanged.
pub fn substitute(template: &str, bindings: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        let Some(end) = after_open.find(CLOSE) else {
            out.push_str(&rest[start..]);
            return out;
        };

        let key = after_open[..end].trim();
        match lookup(bindings, key) {
            Some(value) => out.push_str(value),
            None => {
                warn!(placeholder = key, "unbound template placeholder left verbatim");
                out.push_str(&rest[start..start + OPEN.len() + end + CLOSE.len()]);
            }
        }
        rest = &after_open[end + CLOSE.len()..];
    }

    out.push_str(rest);
    out
}

/// Placeholder keys in order of appearance, duplicates included.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut keys = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        let after_open = &rest[start + OPEN.len()..];
        let Some(end) = after_open.find(CLOSE) else {
            break;
        };
        keys.push(after_open[..end].trim());
        rest = &after_open[end + CLOSE.len()..];
    }

    keys
}

fn lookup<'a>(bindings: &[(&str, &'a str)], key: &str) -> Option<&'a str> {
    bindings
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| *value)
}
