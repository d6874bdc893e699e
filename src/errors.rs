//! Error types for puzzle-input validation with error codes and helpful messages.
//!
//! The searches themselves are infallible (an absent word is a result, not
//! an error), so every error here belongs to the boundary where a grid or a
//! word enters the crate.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (G001-G006) for documentation lookup:
//!
//! - G001: `EmptyBoard` (Board has no rows)
//! - G002: `EmptyRow` (A board row has no columns)
//! - G003: `RaggedRow` (Row width differs from the first row)
//! - G004: `InvalidBoardChar` (Board character is not an uppercase letter)
//! - G005: `EmptyWord` (Search word is empty)
//! - G006: `InvalidWordChar` (Word character is not an uppercase letter)

use std::io;

/// Custom error type for grid and word validation
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("board has no rows")]
    EmptyBoard,

    #[error("row {row} is empty")]
    EmptyRow { row: usize },

    #[error("row {row} has {actual} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid board character '{invalid_char}' at row {row}, column {col}")]
    InvalidBoardChar {
        invalid_char: char,
        row: usize,
        col: usize,
    },

    #[error("empty search word")]
    EmptyWord,

    #[error("word \"{word}\" contains invalid character '{invalid_char}'")]
    InvalidWordChar { word: String, invalid_char: char },
}

impl From<PuzzleError> for io::Error {
    fn from(pe: PuzzleError) -> Self {
        // String version is the least fragile (no Send/Sync bounds issues)
        io::Error::new(io::ErrorKind::InvalidInput, pe.to_string())
    }
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::EmptyBoard => "G001",
            PuzzleError::EmptyRow { .. } => "G002",
            PuzzleError::RaggedRow { .. } => "G003",
            PuzzleError::InvalidBoardChar { .. } => "G004",
            PuzzleError::EmptyWord => "G005",
            PuzzleError::InvalidWordChar { .. } => "G006",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::EmptyBoard => Some("Provide at least one row of letters (e.g., 'CATS/OREN')"),
            PuzzleError::EmptyRow { .. } => Some("Every row must contain at least one letter"),
            PuzzleError::RaggedRow { .. } => Some("All rows of the grid must have the same number of letters"),
            PuzzleError::InvalidBoardChar { .. } => Some("The grid may only contain uppercase letters A-Z"),
            PuzzleError::EmptyWord => Some("Provide a non-empty word to search for"),
            PuzzleError::InvalidWordChar { .. } => Some("Words may only contain uppercase letters A-Z"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
