//! jsonnet-lex - Resumable tokenizer for Jsonnet syntax highlighting
//!
//! This crate classifies Jsonnet source text into highlighting spans. It
//! does not parse: there is no AST and no error recovery beyond marking a
//! malformed character as [`TokenClass::Error`].
//!
//! # Overview
//!
//! The scanner is resumable. A driver calls [`scan`] with the unconsumed
//! part of the current line and a [`LexerState`] carried over from the
//! previous call; each call consumes one token and may open or close a
//! comment, string or text block. Because the state survives line
//! boundaries, constructs spanning several lines are classified correctly
//! one line at a time.
//!
//! # Example Usage
//!
//! ```
//! use jsonnet_lex::{reset, scan, TokenClass};
//!
//! let mut state = reset();
//! let line = "import 'lib.libsonnet'";
//!
//! let token = scan(&mut state, line, 0);
//! assert_eq!(token.class, TokenClass::Meta);
//! assert_eq!(&line[..token.len], "import '");
//! assert!(state.string().is_some_and(|s| s.is_import));
//! ```
//!
//! Whole documents go through a [`Highlighter`]:
//!
//! ```
//! use jsonnet_lex::{highlight, TokenClass};
//!
//! let lines = highlight("local x = 1;\n/* done */");
//! assert_eq!(lines[0].spans[0].class, TokenClass::Keyword);
//! assert!(lines[1].spans.iter().all(|s| s.class == TokenClass::Comment));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token classes and the keyword table
//! - [`state`] - Persistent lexer state
//! - [`lexer`] - Scanner implementation
//! - [`cursor`] - Character cursor over one line
//! - [`chars`] - Character classes and indentation
//! - [`highlight`] - Line-by-line document driver
//!
//! # Token Classes
//!
//! - **Keyword**: `local`, `self`, `super`, `assert`, `function`, `if`,
//!   `then`, `else`, `for`, `in`, `tailstrict`, `error`, and `$`
//! - **Atom**: `true`, `false`, `null`
//! - **Comment**: `// ...`, `# ...`, `/* ... */`
//! - **String**: `"..."`, `'...'`, `@"..."`, `@'...'`, `||| ... |||`
//! - **StringEscape**: `\n`, `\uXXXX`, ... and doubled quotes in verbatim strings
//! - **Meta**: `import "..."`, `importstr '...'`
//! - **Number**: `0`, `1.5`, `.5`, `5.`, `1e10`
//! - **Operator**: runs of `- + / * = < > ! & ~ ^ | $ %`
//! - **Plain**: identifiers, whitespace and punctuation
//! - **Error**: malformed escapes and text-block lines

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod highlight;
pub mod lexer;
pub mod state;
pub mod token;

mod edge_cases;

pub use chars::line_indentation;
pub use cursor::Cursor;
pub use highlight::{coalesce, highlight, highlight_with, HighlightedLine, Highlighter, Span};
pub use lexer::{reset, scan, Lexer};
pub use state::{LexerState, StringState, TextBlockState};
pub use token::{keyword_class, ParseTokenClassError, Token, TokenClass, KEYWORDS};

/// Name under which editors register this highlighting mode.
pub const MODE_NAME: &str = "jsonnet";

/// MIME type of Jsonnet source.
pub const MIME_TYPE: &str = "text/x-jsonnet";

#[cfg(test)]
mod tests {
    use super::*;

    /// Collects `(class, text)` for every token of a document, one token
    /// per scan call.
    fn lex_all(source: &str) -> Vec<(TokenClass, String)> {
        let mut state = reset();
        let mut tokens = Vec::new();
        for line in source.lines() {
            let indentation = chars::line_indentation(line, 4);
            let mut rest = line;
            while !rest.is_empty() {
                let token = scan(&mut state, rest, indentation);
                tokens.push((token.class, rest[..token.len].to_string()));
                rest = &rest[token.len..];
            }
        }
        tokens
    }

    fn has(tokens: &[(TokenClass, String)], class: TokenClass, text: &str) -> bool {
        tokens.iter().any(|(c, t)| *c == class && t == text)
    }

    #[test]
    fn test_small_library() {
        let source = r#"
            local utils = import "utils.libsonnet";
            {
              name: "demo",
              replicas: 3,
              enabled: true,
              ports: [p + 1 for p in [80, 443]],
              greet(who):: 'hello ' + who,
            }
        "#;
        let tokens = lex_all(source);

        assert!(has(&tokens, TokenClass::Keyword, "local"));
        assert!(has(&tokens, TokenClass::Meta, "import \""));
        assert!(has(&tokens, TokenClass::Number, "3"));
        assert!(has(&tokens, TokenClass::Number, "443"));
        assert!(has(&tokens, TokenClass::Atom, "true"));
        assert!(has(&tokens, TokenClass::Keyword, "for"));
        assert!(has(&tokens, TokenClass::Keyword, "in"));
        assert!(has(&tokens, TokenClass::Operator, "+"));
        assert!(has(&tokens, TokenClass::String, "'"));
        assert!(has(&tokens, TokenClass::Plain, "greet"));
        assert!(!tokens.iter().any(|(c, _)| *c == TokenClass::Error));
    }

    #[test]
    fn test_text_block_in_object() {
        let source = "{\n  script: |||\n    #!/bin/sh\n    echo \"hi\"\n  |||,\n}";
        let tokens = lex_all(source);

        assert!(has(&tokens, TokenClass::String, "|||"));
        assert!(has(&tokens, TokenClass::String, "    #!/bin/sh"));
        assert!(has(&tokens, TokenClass::String, "    echo \"hi\""));
        assert!(has(&tokens, TokenClass::String, "  |||"));
        assert!(has(&tokens, TokenClass::Plain, "}"));
    }

    #[test]
    fn test_assert_and_error() {
        let tokens = lex_all("assert self.x > 0 : error 'bad';");
        assert!(has(&tokens, TokenClass::Keyword, "assert"));
        assert!(has(&tokens, TokenClass::Keyword, "self"));
        assert!(has(&tokens, TokenClass::Keyword, "error"));
        assert!(has(&tokens, TokenClass::Operator, ">"));
    }

    #[test]
    fn test_malformed_escape_continues() {
        let tokens = lex_all(r#""a\qb" + 1"#);
        assert!(has(&tokens, TokenClass::Error, "\\"));
        assert!(has(&tokens, TokenClass::String, "q"));
        assert!(has(&tokens, TokenClass::Number, "1"));
    }

    #[test]
    fn test_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_metadata() {
        assert_eq!(MODE_NAME, "jsonnet");
        assert_eq!(MIME_TYPE, "text/x-jsonnet");
    }
}
