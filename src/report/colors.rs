//! Centralized color scheme for consistent output formatting
//!
//! Based on Rust compiler diagnostics design (RFC 1644)

use colored::{ColoredString, Colorize};

/// Per-file status symbols
pub struct StatusSymbol;

impl StatusSymbol {
    /// File rewritten and written back
    pub fn modified() -> &'static str {
        "✅"
    }

    /// File could not be processed
    pub fn failed() -> &'static str {
        "❌"
    }
}

/// Structural element colors
pub struct StructureColors;

impl StructureColors {
    /// File path in a status line
    pub fn file_path(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Count/statistics numbers
    pub fn count(text: &str) -> ColoredString {
        text.white().bold()
    }

    /// Label for a modified file
    pub fn modified_label(text: &str) -> ColoredString {
        text.green().bold()
    }

    /// Label for a failed file
    pub fn error_label(text: &str) -> ColoredString {
        text.red().bold()
    }
}

/// Box drawing characters for the summary footer
pub struct BoxChars;

impl BoxChars {
    /// Light separator line
    pub fn light_line(width: usize) -> String {
        "─".repeat(width)
    }
}
