//! Text block lexing.
//!
//! A text block opens with `|||`. The indentation of its first content
//! line becomes the block's indent; every later line indented at least
//! that far is content, and a line with less indentation must be the
//! closing `|||`.

use log::{debug, trace};

use crate::state::{LexerState, TextBlockState};
use crate::token::TokenClass;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes the `|||` opener of a text block.
    pub fn lex_text_block_start(&mut self) -> Option<TokenClass> {
        if !self.cursor.eat_str("|||") {
            return None;
        }
        trace!("entering text block");
        *self.state = LexerState::TextBlock(TextBlockState::default());
        Some(TokenClass::String)
    }

    /// Lexes a line inside an open text block.
    pub fn lex_text_block_line(&mut self, block: TextBlockState) -> TokenClass {
        let indent = match block.indent {
            Some(indent) => indent,
            None => {
                debug!("text block indent captured at {}", self.line_indentation);
                *self.state = LexerState::TextBlock(TextBlockState {
                    indent: Some(self.line_indentation),
                });
                self.line_indentation
            },
        };

        if self.line_indentation >= indent {
            self.cursor.skip_to_end();
            return TokenClass::String;
        }

        if self.lex_text_block_close() {
            trace!("leaving text block");
            *self.state = LexerState::Normal;
            return TokenClass::String;
        }

        self.cursor.advance();
        TokenClass::Error
    }

    /// Consumes optional whitespace followed by `|||`, or nothing at all.
    fn lex_text_block_close(&mut self) -> bool {
        let rest = self.cursor.remaining();
        let body = rest.trim_start();
        if body.starts_with("|||") {
            self.cursor.advance_bytes(rest.len() - body.len() + 3);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{reset, scan, LexerState, TextBlockState, TokenClass};

    fn block(indent: Option<usize>) -> LexerState {
        LexerState::TextBlock(TextBlockState { indent })
    }

    #[test]
    fn test_opener() {
        let mut state = reset();
        let token = scan(&mut state, "|||", 0);
        assert_eq!(token.class, TokenClass::String);
        assert_eq!(token.len, 3);
        assert_eq!(state, block(None));
    }

    #[test]
    fn test_first_line_captures_indent() {
        let mut state = block(None);
        let token = scan(&mut state, "  line one", 2);
        assert_eq!(token.class, TokenClass::String);
        assert_eq!(token.len, 10);
        assert_eq!(state, block(Some(2)));
    }

    #[test]
    fn test_deeper_line_is_content() {
        let mut state = block(Some(2));
        let token = scan(&mut state, "      nested |||", 6);
        assert_eq!(token.class, TokenClass::String);
        assert_eq!(token.len, 16);
        assert_eq!(state, block(Some(2)));
    }

    #[test]
    fn test_closer_at_lower_indent() {
        let mut state = block(Some(2));
        let token = scan(&mut state, "|||", 0);
        assert_eq!(token.class, TokenClass::String);
        assert_eq!(token.len, 3);
        assert!(state.is_normal());
    }

    #[test]
    fn test_closer_with_leading_whitespace_and_suffix() {
        let mut state = block(Some(4));
        let line = "  |||,";
        let token = scan(&mut state, line, 2);
        assert_eq!(token.class, TokenClass::String);
        assert_eq!(&line[..token.len], "  |||");
        assert!(state.is_normal());

        let token = scan(&mut state, &line[5..], 2);
        assert_eq!(token.class, TokenClass::Plain);
    }

    #[test]
    fn test_malformed_dedent_is_error_per_char() {
        let mut state = block(Some(4));
        let token = scan(&mut state, "  oops", 2);
        assert_eq!(token.class, TokenClass::Error);
        assert_eq!(token.len, 1);
        assert_eq!(state, block(Some(4)));

        let token = scan(&mut state, " oops", 2);
        assert_eq!(token.class, TokenClass::Error);
        assert_eq!(token.len, 1);
    }

    #[test]
    fn test_error_then_closer_on_same_line() {
        let mut state = block(Some(4));
        let token = scan(&mut state, "x|||", 0);
        assert_eq!(token.class, TokenClass::Error);
        let token = scan(&mut state, "|||", 0);
        assert_eq!(token.class, TokenClass::String);
        assert!(state.is_normal());
    }

    #[test]
    fn test_indent_is_fixed_after_first_line() {
        let mut state = block(None);
        scan(&mut state, "    first", 4);
        scan(&mut state, "        second", 8);
        assert_eq!(state, block(Some(4)));
    }
}
