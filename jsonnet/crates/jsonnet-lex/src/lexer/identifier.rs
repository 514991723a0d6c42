//! Identifier and keyword lexing.

use crate::chars::{is_ident_continue, is_ident_start};
use crate::token::{keyword_class, TokenClass};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier and classifies it through the keyword table.
    ///
    /// Identifiers start with a letter or underscore, followed by letters,
    /// digits or underscores. Spellings missing from the table are
    /// [`TokenClass::Plain`].
    pub fn lex_identifier(&mut self) -> Option<TokenClass> {
        if !is_ident_start(self.cursor.current_char()) {
            return None;
        }

        let start = self.cursor.position();
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(start);

        Some(keyword_class(text).unwrap_or(TokenClass::Plain))
    }
}

#[cfg(test)]
mod tests {
    use crate::{reset, scan, TokenClass};

    fn lex_ident(source: &str) -> (TokenClass, usize) {
        let mut state = reset();
        let token = scan(&mut state, source, 0);
        (token.class, token.len)
    }

    #[test]
    fn test_simple_identifier() {
        assert_eq!(lex_ident("foo"), (TokenClass::Plain, 3));
        assert_eq!(lex_ident("foo_bar_123 x"), (TokenClass::Plain, 11));
        assert_eq!(lex_ident("_hidden"), (TokenClass::Plain, 7));
    }

    #[test]
    fn test_keywords() {
        assert_eq!(lex_ident("local"), (TokenClass::Keyword, 5));
        assert_eq!(lex_ident("self.x"), (TokenClass::Keyword, 4));
        assert_eq!(lex_ident("function("), (TokenClass::Keyword, 8));
        assert_eq!(lex_ident("tailstrict"), (TokenClass::Keyword, 10));
    }

    #[test]
    fn test_atoms() {
        assert_eq!(lex_ident("true"), (TokenClass::Atom, 4));
        assert_eq!(lex_ident("false,"), (TokenClass::Atom, 5));
        assert_eq!(lex_ident("null"), (TokenClass::Atom, 4));
    }

    #[test]
    fn test_near_keywords_are_plain() {
        assert_eq!(lex_ident("localx"), (TokenClass::Plain, 6));
        assert_eq!(lex_ident("Self"), (TokenClass::Plain, 4));
        assert_eq!(lex_ident("nullable"), (TokenClass::Plain, 8));
    }

    #[test]
    fn test_digit_does_not_start_identifier() {
        assert_eq!(lex_ident("1abc"), (TokenClass::Number, 1));
    }
}
