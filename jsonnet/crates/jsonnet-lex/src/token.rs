//! Token classes and the keyword/atom table.
//!
//! The lexer does not build token values. Each scan produces a [`Token`],
//! which is just a class and the number of bytes it covers, so that a
//! renderer can paint the span and move on.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Highlighting class of a scanned span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// Reserved words and the `$` sigil.
    Keyword,
    /// Literal atoms: `true`, `false`, `null`.
    Atom,
    /// Line comments, block comments and their delimiters.
    Comment,
    /// String content, string delimiters and text blocks.
    String,
    /// A recognised escape sequence inside a string.
    StringEscape,
    /// An `import`/`importstr` prefix and the string that follows it.
    Meta,
    /// Numeric literals.
    Number,
    /// Runs of operator characters.
    Operator,
    /// Identifiers, whitespace and punctuation with no special highlighting.
    Plain,
    /// A malformed escape or text-block line.
    Error,
}

impl TokenClass {
    /// Every class, in declaration order.
    pub const ALL: [TokenClass; 10] = [
        TokenClass::Keyword,
        TokenClass::Atom,
        TokenClass::Comment,
        TokenClass::String,
        TokenClass::StringEscape,
        TokenClass::Meta,
        TokenClass::Number,
        TokenClass::Operator,
        TokenClass::Plain,
        TokenClass::Error,
    ];

    /// Stable lower-case name, accepted back by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            TokenClass::Keyword => "keyword",
            TokenClass::Atom => "atom",
            TokenClass::Comment => "comment",
            TokenClass::String => "string",
            TokenClass::StringEscape => "string-escape",
            TokenClass::Meta => "meta",
            TokenClass::Number => "number",
            TokenClass::Operator => "operator",
            TokenClass::Plain => "plain",
            TokenClass::Error => "error",
        }
    }

    /// Style name used by editor themes, or `None` for unstyled text.
    ///
    /// ```
    /// use jsonnet_lex::TokenClass;
    ///
    /// assert_eq!(TokenClass::StringEscape.style_name(), Some("string-2"));
    /// assert_eq!(TokenClass::Plain.style_name(), None);
    /// ```
    pub fn style_name(self) -> Option<&'static str> {
        match self {
            TokenClass::StringEscape => Some("string-2"),
            TokenClass::Plain => None,
            other => Some(other.name()),
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a token class name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown token class '{0}'")]
pub struct ParseTokenClassError(pub String);

impl FromStr for TokenClass {
    type Err = ParseTokenClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        TokenClass::ALL
            .iter()
            .copied()
            .find(|class| class.name() == normalized)
            .ok_or_else(|| ParseTokenClassError(s.to_string()))
    }
}

/// One classified span produced by a single scan call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Highlighting class of the span.
    pub class: TokenClass,
    /// Number of bytes consumed from the front of the scanned slice.
    pub len: usize,
}

impl Token {
    /// Creates a token.
    pub fn new(class: TokenClass, len: usize) -> Self {
        Self { class, len }
    }
}

/// Identifier spellings with a dedicated class. Matching is exact and
/// case-sensitive.
pub const KEYWORDS: &[(&str, TokenClass)] = &[
    ("local", TokenClass::Keyword),
    ("self", TokenClass::Keyword),
    ("super", TokenClass::Keyword),
    ("assert", TokenClass::Keyword),
    ("function", TokenClass::Keyword),
    ("if", TokenClass::Keyword),
    ("then", TokenClass::Keyword),
    ("else", TokenClass::Keyword),
    ("for", TokenClass::Keyword),
    ("in", TokenClass::Keyword),
    ("tailstrict", TokenClass::Keyword),
    ("error", TokenClass::Keyword),
    ("true", TokenClass::Atom),
    ("false", TokenClass::Atom),
    ("null", TokenClass::Atom),
];

/// Looks up an identifier in [`KEYWORDS`].
///
/// ```
/// use jsonnet_lex::{keyword_class, TokenClass};
///
/// assert_eq!(keyword_class("local"), Some(TokenClass::Keyword));
/// assert_eq!(keyword_class("null"), Some(TokenClass::Atom));
/// assert_eq!(keyword_class("localx"), None);
/// ```
pub fn keyword_class(ident: &str) -> Option<TokenClass> {
    KEYWORDS
        .iter()
        .find(|(spelling, _)| *spelling == ident)
        .map(|&(_, class)| class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_keyword_is_classified() {
        for word in [
            "local", "self", "super", "assert", "function", "if", "then", "else", "for", "in",
            "tailstrict", "error",
        ] {
            assert_eq!(keyword_class(word), Some(TokenClass::Keyword), "{}", word);
        }
    }

    #[test]
    fn test_atoms() {
        assert_eq!(keyword_class("true"), Some(TokenClass::Atom));
        assert_eq!(keyword_class("false"), Some(TokenClass::Atom));
        assert_eq!(keyword_class("null"), Some(TokenClass::Atom));
    }

    #[test]
    fn test_lookup_is_exact_and_case_sensitive() {
        assert_eq!(keyword_class("Local"), None);
        assert_eq!(keyword_class("localx"), None);
        assert_eq!(keyword_class("loc"), None);
        assert_eq!(keyword_class("import"), None);
        assert_eq!(keyword_class("NULL"), None);
    }

    #[test]
    fn test_table_has_no_duplicates() {
        for (i, (a, _)) in KEYWORDS.iter().enumerate() {
            assert!(KEYWORDS[i + 1..].iter().all(|(b, _)| a != b), "{}", a);
        }
        assert_eq!(KEYWORDS.len(), 15);
    }

    #[test]
    fn test_class_names_round_trip() {
        for class in TokenClass::ALL {
            assert_eq!(class.name().parse::<TokenClass>(), Ok(class));
        }
    }

    #[test]
    fn test_class_parse_accepts_underscores_and_case() {
        assert_eq!("String_Escape".parse::<TokenClass>(), Ok(TokenClass::StringEscape));
        assert_eq!(" KEYWORD ".parse::<TokenClass>(), Ok(TokenClass::Keyword));
    }

    #[test]
    fn test_class_parse_rejects_unknown() {
        let err = "bogus".parse::<TokenClass>().unwrap_err();
        assert_eq!(err.to_string(), "unknown token class 'bogus'");
    }

    #[test]
    fn test_style_names() {
        assert_eq!(TokenClass::Keyword.style_name(), Some("keyword"));
        assert_eq!(TokenClass::Meta.style_name(), Some("meta"));
        assert_eq!(TokenClass::Error.style_name(), Some("error"));
        assert_eq!(TokenClass::Plain.style_name(), None);
    }
}
