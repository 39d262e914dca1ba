//! Literal/anchor declaration scanner.
//!
//! A pattern is a keyword literal followed by at least one whitespace
//! character and a captured name. Scanning is plain text: keywords inside
//! comments, strings or longer identifiers match too. Matches never overlap;
//! after a hit the scan resumes at the end of the captured name.

/// Shape of the name captured after the keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capture {
    /// A single identifier: `[A-Za-z0-9_]+` (Unicode alphanumerics allowed).
    Identifier,
    /// `<address>::<identifier>`, where the address is itself identifier
    /// characters (`0x1`, `0xCAFE`, `my_addr`).
    Qualified,
}

/// Keyword plus capture shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeclarationPattern {
    pub keyword: &'static str,
    pub capture: Capture,
}

/// `module 0x1::Name`
pub const MODULE_DECLARATION: DeclarationPattern = DeclarationPattern {
    keyword: "module",
    capture: Capture::Qualified,
};

/// `struct Name`
pub const STRUCT_DECLARATION: DeclarationPattern = DeclarationPattern {
    keyword: "struct",
    capture: Capture::Identifier,
};

/// `fun name`, with any visibility qualifier (`public`, `public entry`,
/// `public(friend)`) ahead of it left unconsumed.
pub const FUNCTION_DECLARATION: DeclarationPattern = DeclarationPattern {
    keyword: "fun",
    capture: Capture::Identifier,
};

impl DeclarationPattern {
    /// Every captured name in `source`, in order of appearance.
    pub fn scan<'a>(&self, source: &'a str) -> Vec<&'a str> {
        let mut names = Vec::new();
        let mut cursor = 0;

        while let Some(offset) = source[cursor..].find(self.keyword) {
            let keyword_start = cursor + offset;
            match self.capture_after(source, keyword_start + self.keyword.len()) {
                Some((start, end)) => {
                    names.push(&source[start..end]);
                    cursor = end;
                }
                // Keywords are ASCII, so one byte forward is a char boundary.
                None => cursor = keyword_start + 1,
            }
        }

        names
    }

    /// Byte range of the name following a keyword that ends at `pos`.
    fn capture_after(&self, source: &str, pos: usize) -> Option<(usize, usize)> {
        let start = skip_whitespace(source, pos)?;
        let first_end = identifier_end(source, start)?;

        match self.capture {
            Capture::Identifier => Some((start, first_end)),
            Capture::Qualified => {
                let rest = source[first_end..].strip_prefix("::")?;
                let name_start = source.len() - rest.len();
                let name_end = identifier_end(source, name_start)?;
                Some((start, name_end))
            }
        }
    }
}

/// Position after one or more whitespace characters at `pos`.
fn skip_whitespace(source: &str, pos: usize) -> Option<usize> {
    let rest = &source[pos..];
    let trimmed = rest.trim_start();
    if trimmed.len() == rest.len() {
        return None;
    }
    Some(pos + (rest.len() - trimmed.len()))
}

/// End of a non-empty identifier run starting at `pos`.
fn identifier_end(source: &str, pos: usize) -> Option<usize> {
    let rest = &source[pos..];
    let len = rest
        .char_indices()
        .find(|(_, c)| !is_identifier_char(*c))
        .map(|(i, _)| i)
        .unwrap_or(rest.len());
    (len > 0).then_some(pos + len)
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_module_captures_qualified_name() {
        let src = "module 0x1::Coin {\n}\nmodule   my_addr::Vault {}";
        assert_eq!(MODULE_DECLARATION.scan(src), vec!["0x1::Coin", "my_addr::Vault"]);
    }

    #[test]
    fn pattern_module_requires_qualifier() {
        assert!(MODULE_DECLARATION.scan("module Coin {}").is_empty());
        assert!(MODULE_DECLARATION.scan("module 0x1:: Coin").is_empty());
    }

    #[test]
    fn pattern_requires_whitespace_after_keyword() {
        assert!(STRUCT_DECLARATION.scan("structFoo").is_empty());
        assert_eq!(STRUCT_DECLARATION.scan("struct\n\tFoo has key"), vec!["Foo"]);
    }

    #[test]
    fn pattern_function_with_and_without_visibility() {
        let src = "fun helper() {}\npublic fun get() {}\npublic entry fun run() {}\npublic(friend) fun f2() {}";
        assert_eq!(
            FUNCTION_DECLARATION.scan(src),
            vec!["helper", "get", "run", "f2"]
        );
    }

    #[test]
    fn pattern_is_not_word_bounded() {
        // "fun" inside a longer word still anchors a match.
        assert_eq!(FUNCTION_DECLARATION.scan("let defun x"), vec!["x"]);
    }

    #[test]
    fn pattern_matches_inside_comments() {
        let src = "// struct Ghost has key\nstruct Real has key {}";
        assert_eq!(STRUCT_DECLARATION.scan(src), vec!["Ghost", "Real"]);
    }

    #[test]
    fn pattern_resumes_after_capture() {
        // The captured "fun" is consumed, so "foo" is not reached through it.
        assert_eq!(FUNCTION_DECLARATION.scan("fun fun foo"), vec!["fun"]);
    }

    #[test]
    fn pattern_handles_unicode_text() {
        let src = "// héllo wörld\nstruct Ünïcode {}";
        assert_eq!(STRUCT_DECLARATION.scan(src), vec!["Ünïcode"]);
    }

    #[test]
    fn pattern_keyword_at_end_of_input() {
        assert!(STRUCT_DECLARATION.scan("struct").is_empty());
        assert!(STRUCT_DECLARATION.scan("struct   ").is_empty());
    }
}
