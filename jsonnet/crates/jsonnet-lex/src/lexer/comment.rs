//! Comment lexing.
//!
//! Line comments (`//` and `#`) run to the end of the line. Block comments
//! are emitted piecewise: the opener, then one character per call until
//! the closing `*/`.

use log::trace;

use crate::state::LexerState;
use crate::token::TokenClass;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a line comment or the opener of a block comment.
    pub fn lex_comment_start(&mut self) -> Option<TokenClass> {
        if self.cursor.starts_with("//") || self.cursor.starts_with("#") {
            self.cursor.skip_to_end();
            return Some(TokenClass::Comment);
        }

        if self.cursor.eat_str("/*") {
            trace!("entering block comment");
            *self.state = LexerState::BlockComment;
            return Some(TokenClass::Comment);
        }

        None
    }

    /// Lexes inside an open block comment.
    pub fn lex_block_comment_body(&mut self) -> TokenClass {
        if self.cursor.eat_str("*/") {
            trace!("leaving block comment");
            *self.state = LexerState::Normal;
        } else {
            self.cursor.advance();
        }
        TokenClass::Comment
    }
}

#[cfg(test)]
mod tests {
    use crate::{reset, scan, LexerState, TokenClass};

    #[test]
    fn test_line_comment_slash() {
        let mut state = reset();
        let token = scan(&mut state, "// note: \"not a string\"", 0);
        assert_eq!(token.class, TokenClass::Comment);
        assert_eq!(token.len, 23);
        assert!(state.is_normal());
    }

    #[test]
    fn test_line_comment_hash() {
        let mut state = reset();
        let token = scan(&mut state, "# comment", 0);
        assert_eq!(token.class, TokenClass::Comment);
        assert_eq!(token.len, 9);
    }

    #[test]
    fn test_block_comment_opener_only() {
        let mut state = reset();
        let token = scan(&mut state, "/* a */", 0);
        assert_eq!(token.class, TokenClass::Comment);
        assert_eq!(token.len, 2);
        assert_eq!(state, LexerState::BlockComment);
    }

    #[test]
    fn test_block_comment_body_one_char_at_a_time() {
        let mut state = LexerState::BlockComment;
        let token = scan(&mut state, "ab */", 0);
        assert_eq!(token.class, TokenClass::Comment);
        assert_eq!(token.len, 1);
        assert_eq!(state, LexerState::BlockComment);
    }

    #[test]
    fn test_block_comment_close() {
        let mut state = LexerState::BlockComment;
        let token = scan(&mut state, "*/x", 0);
        assert_eq!(token.class, TokenClass::Comment);
        assert_eq!(token.len, 2);
        assert!(state.is_normal());
    }

    #[test]
    fn test_block_comment_ignores_strings_and_openers() {
        let mut state = LexerState::BlockComment;
        for line in ["\"", "/*", "|||"] {
            let token = scan(&mut state, line, 0);
            assert_eq!(token.class, TokenClass::Comment);
            assert_eq!(token.len, 1);
            assert_eq!(state, LexerState::BlockComment);
        }
    }
}
