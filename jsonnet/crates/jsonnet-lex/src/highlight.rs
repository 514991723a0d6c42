//! Document driver.
//!
//! [`scan`] classifies one token at a time. A [`Highlighter`] owns the
//! [`LexerState`] of one document, feeds it line by line and collects the
//! resulting spans, the way an editor's rendering loop would.

use crate::chars::line_indentation;
use crate::lexer::scan;
use crate::state::LexerState;
use crate::token::TokenClass;

/// Default tab stop used when measuring indentation.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// A classified byte range within one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// Highlighting class.
    pub class: TokenClass,
}

impl Span {
    /// Returns the text this span covers in `line`.
    pub fn text<'a>(&self, line: &'a str) -> &'a str {
        &line[self.start..self.end]
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true for a zero-length span.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// One line of a highlighted document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedLine<'a> {
    /// 1-based line number.
    pub number: usize,
    /// Line text without its terminator.
    pub text: &'a str,
    /// Spans covering `text` from start to end.
    pub spans: Vec<Span>,
}

/// Line-at-a-time highlighter for one document.
///
/// # Example
///
/// ```
/// use jsonnet_lex::{Highlighter, TokenClass};
///
/// let mut highlighter = Highlighter::new();
/// let spans = highlighter.highlight_line("x: |||");
/// assert_eq!(spans.last().map(|s| s.class), Some(TokenClass::String));
/// assert!(highlighter.state().text_block().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Highlighter {
    state: LexerState,
    tab_width: usize,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a highlighter at the start of a document.
    pub fn new() -> Self {
        Self::with_tab_width(DEFAULT_TAB_WIDTH)
    }

    /// Creates a highlighter that expands tabs to `tab_width` columns when
    /// measuring indentation.
    pub fn with_tab_width(tab_width: usize) -> Self {
        Self {
            state: LexerState::new(),
            tab_width: tab_width.max(1),
        }
    }

    /// Tab stop used when measuring indentation.
    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    /// State carried into the next line.
    pub fn state(&self) -> LexerState {
        self.state
    }

    /// Consumes the highlighter and returns the state left at end of input.
    pub fn finish(self) -> LexerState {
        self.state
    }

    /// Scans `line` to its end. `line` must not contain a line terminator.
    ///
    /// Empty lines produce no spans and leave the state untouched.
    pub fn highlight_line(&mut self, line: &str) -> Vec<Span> {
        let indentation = line_indentation(line, self.tab_width);
        let mut spans = Vec::new();
        let mut start = 0;

        while start < line.len() {
            let token = scan(&mut self.state, &line[start..], indentation);
            debug_assert!(token.len > 0);
            let end = start + token.len;
            spans.push(Span {
                start,
                end,
                class: token.class,
            });
            start = end;
        }

        spans
    }
}

/// Merges adjacent spans of the same class.
///
/// ```
/// use jsonnet_lex::{coalesce, Span, TokenClass};
///
/// let spans = [
///     Span { start: 0, end: 1, class: TokenClass::String },
///     Span { start: 1, end: 2, class: TokenClass::String },
///     Span { start: 2, end: 4, class: TokenClass::StringEscape },
/// ];
/// let merged = coalesce(&spans);
/// assert_eq!(merged.len(), 2);
/// assert_eq!((merged[0].start, merged[0].end), (0, 2));
/// ```
pub fn coalesce(spans: &[Span]) -> Vec<Span> {
    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if last.class == span.class && last.end == span.start => {
                last.end = span.end;
            },
            _ => merged.push(*span),
        }
    }
    merged
}

/// Highlights a whole document with the default tab width.
///
/// Lines are split on `\n` and `\r\n`.
pub fn highlight(source: &str) -> Vec<HighlightedLine<'_>> {
    highlight_with(&mut Highlighter::new(), source)
}

/// Highlights a whole document with the given highlighter, leaving the
/// end-of-document state in it.
pub fn highlight_with<'a>(
    highlighter: &mut Highlighter,
    source: &'a str,
) -> Vec<HighlightedLine<'a>> {
    source
        .lines()
        .enumerate()
        .map(|(index, text)| HighlightedLine {
            number: index + 1,
            text,
            spans: highlighter.highlight_line(text),
        })
        .collect()
}
