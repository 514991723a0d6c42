//! Common types and utilities for jsonnet-hl commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::io::Read;
use std::path::Path;

use owo_colors::AnsiColors;

use crate::error::{HlError, Result};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for token dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `line:start-end class "text"` row per span
    Text,
    /// A JSON array of span records
    Json,
}

impl OutputFormat {
    /// Parse a string into an OutputFormat.
    ///
    /// # Arguments
    /// * `s` - The string to parse (case-insensitive)
    ///
    /// # Returns
    /// * `Option<OutputFormat>` - The parsed format or None if invalid
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Canonical name of this format.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

// ============================================================================
// Input Utilities
// ============================================================================

/// File name that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Returns true when `path` names standard input.
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Name used for `path` in diagnostics.
pub fn display_name(path: &Path) -> String {
    if is_stdin(path) {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

/// Read a whole Jsonnet source, from standard input when `path` is `-`.
///
/// # Arguments
/// * `path` - Path to the source file, or `-`
///
/// # Returns
/// * `Result<String>` - The source text or an error
pub fn read_source(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(|e| HlError::FileOperation(format!("<stdin>: {}", e)))?;
        return Ok(source);
    }

    if !path.exists() {
        return Err(HlError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }

    if !path.is_file() {
        return Err(HlError::Validation(format!(
            "{} {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    std::fs::read_to_string(path)
        .map_err(|e| HlError::FileOperation(format!("{}: {}", path.display(), e)))
}

/// Fail when no input files were given.
pub fn require_inputs<T>(inputs: &[T]) -> Result<()> {
    if inputs.is_empty() {
        return Err(HlError::Validation(
            error_messages::NO_INPUT_FILES.to_string(),
        ));
    }
    Ok(())
}

// ============================================================================
// Colours
// ============================================================================

/// Parse a theme colour name such as `"green"` or `"bright black"`.
///
/// Case is ignored and `_` or `-` may separate words.
pub fn parse_color(name: &str) -> Option<AnsiColors> {
    let normalized = name
        .trim()
        .to_lowercase()
        .replace(['_', '-'], " ");
    let words: Vec<&str> = normalized.split_whitespace().collect();

    let (bright, base) = match words.as_slice() {
        ["bright", base] => (true, *base),
        [base] => (false, *base),
        _ => return None,
    };

    let color = match (bright, base) {
        (false, "black") => AnsiColors::Black,
        (false, "red") => AnsiColors::Red,
        (false, "green") => AnsiColors::Green,
        (false, "yellow") => AnsiColors::Yellow,
        (false, "blue") => AnsiColors::Blue,
        (false, "magenta" | "purple") => AnsiColors::Magenta,
        (false, "cyan") => AnsiColors::Cyan,
        (false, "white") => AnsiColors::White,
        (false, "default") => AnsiColors::Default,
        (true, "black") => AnsiColors::BrightBlack,
        (true, "red") => AnsiColors::BrightRed,
        (true, "green") => AnsiColors::BrightGreen,
        (true, "yellow") => AnsiColors::BrightYellow,
        (true, "blue") => AnsiColors::BrightBlue,
        (true, "magenta" | "purple") => AnsiColors::BrightMagenta,
        (true, "cyan") => AnsiColors::BrightCyan,
        (true, "white") => AnsiColors::BrightWhite,
        _ => return None,
    };
    Some(color)
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
///
/// These constants provide consistent error messages across all commands.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format:";

    /// Error when config has invalid format.
    pub const INVALID_CONFIG_FORMAT: &str = "Invalid format in configuration:";

    /// Error when a theme names a colour that does not exist.
    pub const UNKNOWN_COLOR: &str = "Unknown colour:";

    /// Error when the tab width is zero.
    pub const ZERO_TAB_WIDTH: &str = "tab_width must be at least 1";

    /// Error when `check` found problems.
    pub const PROBLEMS_FOUND: &str = "problem(s) found";

    /// Error when files failed to process.
    pub const FILES_FAILED: &str = "file(s) failed to process";
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("text"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_str("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str(" txt "), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_str("yaml"), None);
        assert_eq!(OutputFormat::Json.name(), "json");
    }

    #[test]
    fn test_parse_color_names() {
        assert!(matches!(parse_color("green"), Some(AnsiColors::Green)));
        assert!(matches!(parse_color("Bright Black"), Some(AnsiColors::BrightBlack)));
        assert!(matches!(parse_color("bright_red"), Some(AnsiColors::BrightRed)));
        assert!(matches!(parse_color("bright-cyan"), Some(AnsiColors::BrightCyan)));
        assert!(matches!(parse_color("purple"), Some(AnsiColors::Magenta)));
        assert!(matches!(parse_color("default"), Some(AnsiColors::Default)));
    }

    #[test]
    fn test_parse_color_rejects_unknown() {
        assert!(parse_color("chartreuse").is_none());
        assert!(parse_color("bright default").is_none());
        assert!(parse_color("very bright red").is_none());
        assert!(parse_color("").is_none());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("-")), "<stdin>");
        assert_eq!(display_name(Path::new("a.jsonnet")), "a.jsonnet");
    }

    #[test]
    fn test_read_source_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("main.jsonnet");
        std::fs::write(&path, "{ a: 1 }\n").unwrap();
        assert_eq!(read_source(&path).unwrap(), "{ a: 1 }\n");
    }

    #[test]
    fn test_read_source_missing_file() {
        let result = read_source(Path::new("/nonexistent/main.jsonnet"));
        match result {
            Err(HlError::Validation(msg)) => assert!(msg.contains("does not exist")),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_source_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = read_source(temp_dir.path());
        assert!(matches!(result, Err(HlError::Validation(_))));
    }

    #[test]
    fn test_require_inputs() {
        assert!(require_inputs::<PathBuf>(&[]).is_err());
        assert!(require_inputs(&[PathBuf::from("a.jsonnet")]).is_ok());
    }
}
