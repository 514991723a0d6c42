//! Core lexer implementation.
//!
//! This module contains the `Lexer` struct, the mode dispatch and the
//! public [`scan`] entry point.

use crate::cursor::Cursor;
use crate::state::LexerState;
use crate::token::{Token, TokenClass};

/// Lexer for one scan call.
///
/// A `Lexer` borrows the persistent [`LexerState`] and the unconsumed
/// part of the current line. It lives for exactly one token; the state is
/// what survives between calls.
pub struct Lexer<'a> {
    /// Character cursor over the unconsumed line text.
    pub cursor: Cursor<'a>,

    /// Mode carried over from the previous scan call.
    pub state: &'a mut LexerState,

    /// Indentation of the line being scanned, in columns.
    pub line_indentation: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the start of `remaining_line`.
    pub fn new(
        state: &'a mut LexerState,
        remaining_line: &'a str,
        line_indentation: usize,
    ) -> Self {
        Self {
            cursor: Cursor::new(remaining_line),
            state,
            line_indentation,
        }
    }

    /// Scans one token and returns it.
    ///
    /// The active mode is tried first: block comment, then text block,
    /// then string. With no mode active the top-level rules apply.
    pub fn next_token(&mut self) -> Token {
        if self.cursor.is_at_end() {
            return Token::new(TokenClass::Plain, 0);
        }

        let class = match *self.state {
            LexerState::BlockComment => self.lex_block_comment_body(),
            LexerState::TextBlock(block) => self.lex_text_block_line(block),
            LexerState::StringLiteral(string) => self.lex_string_body(string),
            LexerState::Normal => self.lex_top_level(),
        };

        let len = self.cursor.position();
        debug_assert!(len > 0, "scan made no progress in {:?}", self.state);
        Token::new(class, len)
    }

    /// Top-level dispatch when no multi-token construct is open.
    fn lex_top_level(&mut self) -> TokenClass {
        if let Some(class) = self.lex_comment_start() {
            return class;
        }
        if let Some(class) = self.lex_import() {
            return class;
        }
        if let Some(class) = self.lex_string_start() {
            return class;
        }
        if let Some(class) = self.lex_text_block_start() {
            return class;
        }
        if self.cursor.match_char('$') {
            return TokenClass::Keyword;
        }
        if self.lex_number() {
            return TokenClass::Number;
        }
        if self.lex_operator() {
            return TokenClass::Operator;
        }
        if let Some(class) = self.lex_identifier() {
            return class;
        }

        self.cursor.advance();
        TokenClass::Plain
    }
}

/// Returns the state for the start of a new document.
pub fn reset() -> LexerState {
    LexerState::new()
}

/// Scans one token from the front of `remaining_line`.
///
/// `state` is updated in place when the token opens or closes a comment,
/// string or text block. `line_indentation` is the column width of the
/// current line's leading whitespace and only matters inside text blocks.
///
/// Every call on a non-empty slice consumes at least one character. An
/// empty slice yields a zero-length [`TokenClass::Plain`] token and leaves
/// `state` untouched.
///
/// # Example
///
/// ```
/// use jsonnet_lex::{reset, scan, TokenClass};
///
/// let mut state = reset();
/// let line = "local x = 1;";
/// let token = scan(&mut state, line, 0);
/// assert_eq!(token.class, TokenClass::Keyword);
/// assert_eq!(&line[..token.len], "local");
/// ```
pub fn scan(state: &mut LexerState, remaining_line: &str, line_indentation: usize) -> Token {
    Lexer::new(state, remaining_line, line_indentation).next_token()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scans a single line to the end and returns `(class, text)` pairs.
    fn scan_line(state: &mut LexerState, line: &str) -> Vec<(TokenClass, String)> {
        let indentation = crate::chars::line_indentation(line, 4);
        let mut rest = line;
        let mut tokens = Vec::new();
        while !rest.is_empty() {
            let token = scan(state, rest, indentation);
            tokens.push((token.class, rest[..token.len].to_string()));
            rest = &rest[token.len..];
        }
        tokens
    }

    fn classes(line: &str) -> Vec<(TokenClass, String)> {
        scan_line(&mut reset(), line)
    }

    fn tok(class: TokenClass, text: &str) -> (TokenClass, String) {
        (class, text.to_string())
    }

    #[test]
    fn test_empty_slice_is_zero_length() {
        let mut state = LexerState::BlockComment;
        let token = scan(&mut state, "", 0);
        assert_eq!(token, Token::new(TokenClass::Plain, 0));
        assert_eq!(state, LexerState::BlockComment);
    }

    #[test]
    fn test_local_binding() {
        assert_eq!(
            classes("local x = 1;"),
            vec![
                tok(TokenClass::Keyword, "local"),
                tok(TokenClass::Plain, " "),
                tok(TokenClass::Plain, "x"),
                tok(TokenClass::Plain, " "),
                tok(TokenClass::Operator, "="),
                tok(TokenClass::Plain, " "),
                tok(TokenClass::Number, "1"),
                tok(TokenClass::Plain, ";"),
            ]
        );
    }

    #[test]
    fn test_dollar_is_keyword() {
        assert_eq!(
            classes("$.a"),
            vec![
                tok(TokenClass::Keyword, "$"),
                tok(TokenClass::Plain, "."),
                tok(TokenClass::Plain, "a"),
            ]
        );
    }

    #[test]
    fn test_object_with_atoms() {
        let tokens = classes("{ a: true, b: null }");
        assert!(tokens.contains(&tok(TokenClass::Atom, "true")));
        assert!(tokens.contains(&tok(TokenClass::Atom, "null")));
        assert!(tokens.contains(&tok(TokenClass::Plain, "{")));
        assert!(tokens.contains(&tok(TokenClass::Plain, ":")));
    }

    #[test]
    fn test_fallback_consumes_one_multibyte_char() {
        assert_eq!(classes("é"), vec![tok(TokenClass::Plain, "é")]);
    }

    #[test]
    fn test_state_carries_across_lines() {
        let mut state = reset();
        scan_line(&mut state, "x = \"abc");
        assert!(state.string().is_some());
        let tokens = scan_line(&mut state, "def\" + 1");
        assert_eq!(tokens[3], tok(TokenClass::String, "\""));
        assert!(state.is_normal());
        assert!(tokens.contains(&tok(TokenClass::Number, "1")));
    }

    #[test]
    fn test_text_block_opener_before_operator() {
        assert_eq!(classes("|||")[0], tok(TokenClass::String, "|||"));
        assert_eq!(classes("||")[0], tok(TokenClass::Operator, "||"));
    }
}
