//! String literal lexing.
//!
//! Jsonnet has four string flavours: `"..."`, `'...'`, and the verbatim
//! `@"..."` and `@'...'`. A literal is emitted piecewise: the opener, then
//! one character or one escape per call, then the closing quote. Strings
//! opened by `import`/`importstr` are classed as meta throughout.

use log::trace;

use crate::chars::{is_simple_escape, starts_with_unicode_escape};
use crate::state::{LexerState, StringState};
use crate::token::TokenClass;
use crate::Lexer;

/// Matches one of the four string openers at the front of `text`.
///
/// Returns the opener's length in bytes and the flavour it opens.
fn match_opener(text: &str) -> Option<(usize, StringState)> {
    let (len, single_quote, raw) = if text.starts_with('"') {
        (1, false, false)
    } else if text.starts_with('\'') {
        (1, true, false)
    } else if text.starts_with("@\"") {
        (2, false, true)
    } else if text.starts_with("@'") {
        (2, true, true)
    } else {
        return None;
    };

    Some((
        len,
        StringState {
            is_import: false,
            single_quote,
            raw,
        },
    ))
}

/// Matches `import` or `importstr`, optional whitespace and a string
/// opener. Returns the byte length of the whole prefix.
fn match_import(text: &str) -> Option<(usize, StringState)> {
    let after_import = text.strip_prefix("import")?;
    let candidates = match after_import.strip_prefix("str") {
        Some(after_str) => [Some(after_str), Some(after_import)],
        None => [Some(after_import), None],
    };

    candidates.into_iter().flatten().find_map(|rest| {
        let body = rest.trim_start();
        let (opener_len, string) = match_opener(body)?;
        let len = text.len() - body.len() + opener_len;
        Some((
            len,
            StringState {
                is_import: true,
                ..string
            },
        ))
    })
}

impl<'a> Lexer<'a> {
    /// Lexes `import "`, `importstr '` and friends as a single meta token.
    pub fn lex_import(&mut self) -> Option<TokenClass> {
        let (len, string) = match_import(self.cursor.remaining())?;
        self.cursor.advance_bytes(len);
        trace!("entering import string {:?}", string);
        *self.state = LexerState::StringLiteral(string);
        Some(TokenClass::Meta)
    }

    /// Lexes a bare string opener.
    pub fn lex_string_start(&mut self) -> Option<TokenClass> {
        let (len, string) = match_opener(self.cursor.remaining())?;
        self.cursor.advance_bytes(len);
        trace!("entering string {:?}", string);
        *self.state = LexerState::StringLiteral(string);
        Some(TokenClass::String)
    }

    /// Lexes inside an open string literal.
    ///
    /// Consumes one escape sequence, the closing quote, or one character.
    pub fn lex_string_body(&mut self, string: StringState) -> TokenClass {
        let class = if string.is_import {
            TokenClass::Meta
        } else {
            TokenClass::String
        };

        if string.raw {
            if self.cursor.eat_str(string.doubled_delimiter()) {
                return TokenClass::StringEscape;
            }
        } else if self.cursor.current_char() == '\\' {
            return self.lex_escape();
        }

        if self.cursor.match_char(string.delimiter()) {
            trace!("leaving string");
            *self.state = LexerState::Normal;
            return class;
        }

        self.cursor.advance();
        class
    }

    /// Lexes a backslash escape in a non-verbatim string.
    ///
    /// Handles: `\\`, `\"`, `\'`, `\b`, `\f`, `\n`, `\r`, `\t`, `\0` and
    /// `\uXXXX`. Any other backslash is a one-character error.
    fn lex_escape(&mut self) -> TokenClass {
        if is_simple_escape(self.cursor.peek_char(1)) {
            self.cursor.advance_bytes(2);
            return TokenClass::StringEscape;
        }

        if starts_with_unicode_escape(self.cursor.remaining()) {
            self.cursor.advance_bytes(6);
            return TokenClass::StringEscape;
        }

        self.cursor.advance();
        TokenClass::Error
    }
}
