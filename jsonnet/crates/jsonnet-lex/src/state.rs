//! Persistent lexer state.
//!
//! A [`LexerState`] is threaded through every [`scan`](crate::scan) call of
//! one document. The lexical contexts that outlive a single token (a block
//! comment, a text block, a string literal) are mutually exclusive, so they
//! are variants of one enum rather than independent flags.

/// State of an open `|||` text block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextBlockState {
    /// Indentation of the first content line. Unset until that line is
    /// scanned, fixed afterwards.
    pub indent: Option<usize>,
}

/// Flavour of an open string literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringState {
    /// The literal was opened by `import` or `importstr`.
    pub is_import: bool,
    /// The literal is delimited by `'` rather than `"`.
    pub single_quote: bool,
    /// The literal is verbatim (`@"..."` or `@'...'`).
    pub raw: bool,
}

impl StringState {
    /// The quote character that closes this literal.
    pub fn delimiter(&self) -> char {
        if self.single_quote {
            '\''
        } else {
            '"'
        }
    }

    /// The doubled delimiter that escapes a quote in a verbatim literal.
    pub fn doubled_delimiter(&self) -> &'static str {
        if self.single_quote {
            "''"
        } else {
            "\"\""
        }
    }
}

/// Lexical mode carried from one scan call to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LexerState {
    /// Top-level code.
    #[default]
    Normal,
    /// Inside `/* ... */`.
    BlockComment,
    /// Inside a `|||` text block.
    TextBlock(TextBlockState),
    /// Inside a quoted or verbatim string literal.
    StringLiteral(StringState),
}

impl LexerState {
    /// Creates the state for the start of a document.
    pub fn new() -> Self {
        Self::Normal
    }

    /// Returns true when no multi-token construct is open.
    pub fn is_normal(&self) -> bool {
        matches!(self, LexerState::Normal)
    }

    /// Returns true while inside a block comment.
    pub fn in_block_comment(&self) -> bool {
        matches!(self, LexerState::BlockComment)
    }

    /// The open text block, if any.
    pub fn text_block(&self) -> Option<TextBlockState> {
        match self {
            LexerState::TextBlock(block) => Some(*block),
            _ => None,
        }
    }

    /// The open string literal, if any.
    pub fn string(&self) -> Option<StringState> {
        match self {
            LexerState::StringLiteral(string) => Some(*string),
            _ => None,
        }
    }
}
