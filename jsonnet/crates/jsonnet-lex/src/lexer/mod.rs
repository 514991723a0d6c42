//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Lexer struct, mode dispatch and the `scan` entry point
//! - `comment` - Line and block comments
//! - `text_block` - `|||` text blocks
//! - `string` - String literals, import strings and escapes
//! - `number` - Number literals
//! - `operator` - Operator runs
//! - `identifier` - Identifiers and keywords

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;
mod text_block;

pub use self::core::{reset, scan, Lexer};
pub use self::number::number_len;
