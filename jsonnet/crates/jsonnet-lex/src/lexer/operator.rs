//! Operator lexing.
//!
//! Operators are not split into individual tokens: any run of characters
//! from [`OPERATOR_CHARS`](crate::chars::OPERATOR_CHARS) is one span.

use crate::chars::is_operator_char;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes the maximal run of operator characters.
    pub fn lex_operator(&mut self) -> bool {
        self.cursor.eat_while(is_operator_char) > 0
    }
}

#[cfg(test)]
mod tests {
    use crate::{reset, scan, TokenClass};

    fn lex_op(source: &str) -> (TokenClass, usize) {
        let mut state = reset();
        let token = scan(&mut state, source, 0);
        (token.class, token.len)
    }

    #[test]
    fn test_single_operators() {
        for op in ["-", "+", "/", "*", "=", "<", ">", "!", "&", "~", "^", "|", "%"] {
            assert_eq!(lex_op(op), (TokenClass::Operator, 1), "{}", op);
        }
    }

    #[test]
    fn test_maximal_run() {
        assert_eq!(lex_op("== 1"), (TokenClass::Operator, 2));
        assert_eq!(lex_op("!=x"), (TokenClass::Operator, 2));
        assert_eq!(lex_op("<=>"), (TokenClass::Operator, 3));
        assert_eq!(lex_op("+$"), (TokenClass::Operator, 2));
    }

    #[test]
    fn test_run_swallows_comment_lookalikes() {
        assert_eq!(lex_op("+//x"), (TokenClass::Operator, 3));
        assert_eq!(lex_op("&&|||"), (TokenClass::Operator, 5));
    }

    #[test]
    fn test_comment_and_text_block_win_at_start() {
        assert_eq!(lex_op("//x").0, TokenClass::Comment);
        assert_eq!(lex_op("/*").0, TokenClass::Comment);
        assert_eq!(lex_op("|||").0, TokenClass::String);
        assert_eq!(lex_op("$+").0, TokenClass::Keyword);
    }

    #[test]
    fn test_non_operators() {
        for c in [".", ",", ";", ":", "(", "[", "{", "@", "?"] {
            assert_eq!(lex_op(c), (TokenClass::Plain, 1), "{}", c);
        }
    }
}
