//! Character classes used by the scanner.
//!
//! Identifiers, digits and escapes are ASCII-only in Jsonnet; whitespace
//! follows Unicode `White_Space`.

/// Characters that may appear in an operator run.
pub const OPERATOR_CHARS: &str = "-+/*=<>!&~^|$%";

/// Characters that may follow a backslash as a one-character escape.
pub const SIMPLE_ESCAPES: &str = "\\\"'bfnrt0";

/// Checks if a character can start an identifier.
///
/// ```
/// use jsonnet_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('α'));
/// ```
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier.
///
/// ```
/// use jsonnet_lex::chars::is_ident_continue;
///
/// assert!(is_ident_continue('Z'));
/// assert!(is_ident_continue('9'));
/// assert!(!is_ident_continue('-'));
/// ```
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character belongs to the operator set.
pub fn is_operator_char(c: char) -> bool {
    OPERATOR_CHARS.contains(c)
}

/// Checks if `\` followed by `c` is a complete escape sequence.
pub fn is_simple_escape(c: char) -> bool {
    SIMPLE_ESCAPES.contains(c)
}

/// Returns true if `text` begins with `\u` and four hex digits.
///
/// ```
/// use jsonnet_lex::chars::starts_with_unicode_escape;
///
/// assert!(starts_with_unicode_escape("\\u00e9 rest"));
/// assert!(!starts_with_unicode_escape("\\u00g9"));
/// assert!(!starts_with_unicode_escape("\\u12"));
/// ```
pub fn starts_with_unicode_escape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() >= 6 && bytes.starts_with(b"\\u") && bytes[2..6].iter().all(u8::is_ascii_hexdigit)
}

/// Returns the column width of the leading whitespace of `line`.
///
/// Tabs advance to the next multiple of `tab_width`; every other
/// whitespace character counts as one column. A line that is entirely
/// whitespace has the width of the whole line.
///
/// ```
/// use jsonnet_lex::chars::line_indentation;
///
/// assert_eq!(line_indentation("    x", 4), 4);
/// assert_eq!(line_indentation("\tx", 4), 4);
/// assert_eq!(line_indentation(" \tx", 4), 4);
/// assert_eq!(line_indentation("  \t", 8), 8);
/// assert_eq!(line_indentation("x  ", 4), 0);
/// ```
pub fn line_indentation(line: &str, tab_width: usize) -> usize {
    let tab_width = tab_width.max(1);
    let mut column = 0;
    for c in line.chars() {
        match c {
            '\t' => column += tab_width - column % tab_width,
            c if c.is_whitespace() => column += 1,
            _ => break,
        }
    }
    column
}
