//! Number literal lexing.
//!
//! Accepted forms: `123`, `123.456`, `.456`, `5.`, each with an optional
//! exponent (`e`/`E`, optional sign, digits). A trailing `.` is left alone
//! when an identifier follows it, so `5.x` reads as `5`, `.`, `x`.

use crate::chars::is_ident_start;
use crate::Lexer;

/// Returns the number of ASCII digits at the front of `bytes`.
fn digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Returns the length of an exponent suffix at the front of `bytes`, or 0.
fn exponent(bytes: &[u8]) -> usize {
    match bytes.first() {
        Some(b'e' | b'E') => {},
        _ => return 0,
    }
    let sign = usize::from(matches!(bytes.get(1), Some(b'+' | b'-')));
    match digits(&bytes[1 + sign..]) {
        0 => 0,
        n => 1 + sign + n,
    }
}

/// Returns the length of the number literal at the front of `text`, or 0.
///
/// ```
/// use jsonnet_lex::lexer::number_len;
///
/// assert_eq!(number_len("5.5e-3"), 6);
/// assert_eq!(number_len(".5"), 2);
/// assert_eq!(number_len("5."), 2);
/// assert_eq!(number_len("5.x"), 1);
/// assert_eq!(number_len(".x"), 0);
/// ```
pub fn number_len(text: &str) -> usize {
    let bytes = text.as_bytes();

    let mut len = if bytes.first() == Some(&b'.') {
        match digits(&bytes[1..]) {
            0 => return 0,
            n => 1 + n,
        }
    } else {
        let int = digits(bytes);
        if int == 0 {
            return 0;
        }
        if bytes.get(int) == Some(&b'.') {
            let frac = digits(&bytes[int + 1..]);
            let after_dot = int + 1 + frac;
            let member_access = frac == 0
                && exponent(&bytes[after_dot..]) == 0
                && text[after_dot..].chars().next().is_some_and(is_ident_start);
            if member_access {
                int
            } else {
                after_dot
            }
        } else {
            int
        }
    };

    len += exponent(&bytes[len..]);
    len
}

impl<'a> Lexer<'a> {
    /// Lexes a number literal. Returns false, consuming nothing, if the
    /// text does not start with one.
    pub fn lex_number(&mut self) -> bool {
        let len = number_len(self.cursor.remaining());
        self.cursor.advance_bytes(len);
        len > 0
    }
}
