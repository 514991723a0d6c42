//! Character cursor over the unconsumed part of one line.
//!
//! The scanner only ever sees the suffix of the current line that the
//! driver has not painted yet, so the cursor has no notion of line or
//! column. Its position is the number of bytes consumed so far, which is
//! exactly the length of the token being produced.

/// A cursor for traversing a line slice character by character.
///
/// # Example
///
/// ```
/// use jsonnet_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("local x");
/// assert!(cursor.eat_str("local"));
/// assert_eq!(cursor.current_char(), ' ');
/// assert_eq!(cursor.position(), 5);
/// ```
pub struct Cursor<'a> {
    /// The line slice being traversed.
    source: &'a str,

    /// Current byte position in the slice.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Returns the current character, or `'\0'` at the end of the slice.
    ///
    /// ```
    /// use jsonnet_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.current_char(), 'a');
    /// ```
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead, or `'\0'` past the
    /// end.
    ///
    /// ```
    /// use jsonnet_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("aβc");
    /// assert_eq!(cursor.peek_char(1), 'β');
    /// assert_eq!(cursor.peek_char(2), 'c');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.remaining();

        // Fast path for ASCII
        if let Some(&b) = rest.as_bytes().get(offset) {
            if rest.as_bytes()[..=offset].is_ascii() {
                return b as char;
            }
        }

        rest.chars().nth(offset).unwrap_or('\0')
    }

    /// Advances past the current character. Does nothing at the end.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.remaining().chars().next() {
            self.position += c.len_utf8();
        }
    }

    /// Advances by `count` bytes, clamped to the end of the slice.
    ///
    /// Callers must land on a character boundary; every caller advances
    /// past ASCII text it has just matched.
    #[inline]
    pub fn advance_bytes(&mut self, count: usize) {
        let remaining = self.source.len() - self.position;
        self.position += count.min(remaining);
        debug_assert!(self.source.is_char_boundary(self.position));
    }

    /// Moves to the end of the slice.
    pub fn skip_to_end(&mut self) {
        self.position = self.source.len();
    }

    /// Returns true if every character has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns true if the unconsumed text starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Consumes `expected` if the unconsumed text starts with it.
    ///
    /// ```
    /// use jsonnet_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("*/ rest");
    /// assert!(!cursor.eat_str("/*"));
    /// assert!(cursor.eat_str("*/"));
    /// assert_eq!(cursor.remaining(), " rest");
    /// ```
    pub fn eat_str(&mut self, expected: &str) -> bool {
        if self.starts_with(expected) {
            self.position += expected.len();
            true
        } else {
            false
        }
    }

    /// Consumes the current character if it is `expected`.
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds and returns how many
    /// bytes were consumed.
    ///
    /// ```
    /// use jsonnet_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("+-* x");
    /// assert_eq!(cursor.eat_while(|c| "+-*".contains(c)), 3);
    /// assert_eq!(cursor.current_char(), ' ');
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let start = self.position;
        while let Some(c) = self.remaining().chars().next() {
            if !predicate(c) {
                break;
            }
            self.position += c.len_utf8();
        }
        self.position - start
    }

    /// Returns the current byte position, i.e. the bytes consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the text between `start` and the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the unconsumed text.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}
