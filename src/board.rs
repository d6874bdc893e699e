//! `board` — validation of puzzle input before it reaches the graph.
//!
//! The graph and the searches assume a well-formed puzzle: a rectangular
//! grid of uppercase letters and non-empty uppercase words. This module is
//! the place where that assumption is established, so everything past it can
//! stay validation-free. Input is not normalized here — callers that accept
//! mixed-case text (like the CLI) uppercase it *before* validation.
//!
//! A [`Board`] is just the validated matrix; build a
//! [`Graph`](crate::graph::Graph) from it with [`Board::grid`].

use crate::errors::PuzzleError;

/// A validated rectangular grid of uppercase letters.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Vec<Vec<char>>,
}

impl Board {
    /// Validate `rows` into a board.
    ///
    /// # Errors
    /// Returns a [`PuzzleError`] if there are no rows, a row is empty, row
    /// widths differ, or any character is not an uppercase ASCII letter.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, PuzzleError> {
        if rows.is_empty() {
            return Err(PuzzleError::EmptyBoard);
        }

        let expected = rows[0].as_ref().chars().count();
        let mut grid: Vec<Vec<char>> = Vec::with_capacity(rows.len());

        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.is_empty() {
                return Err(PuzzleError::EmptyRow { row: r });
            }

            let chars: Vec<char> = row.chars().collect();
            if chars.len() != expected {
                return Err(PuzzleError::RaggedRow {
                    row: r,
                    expected,
                    actual: chars.len(),
                });
            }

            for (c, &ch) in chars.iter().enumerate() {
                if !ch.is_ascii_uppercase() {
                    return Err(PuzzleError::InvalidBoardChar {
                        invalid_char: ch,
                        row: r,
                        col: c,
                    });
                }
            }

            grid.push(chars);
        }

        Ok(Self { grid })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.grid[0].len()
    }

    /// The validated character matrix, ready for graph construction.
    #[must_use]
    pub fn grid(&self) -> &[Vec<char>] {
        &self.grid
    }
}

/// Check that a search word is non-empty uppercase ASCII text.
///
/// # Errors
/// Returns [`PuzzleError::EmptyWord`] or [`PuzzleError::InvalidWordChar`].
pub fn validate_word(word: &str) -> Result<(), PuzzleError> {
    if word.is_empty() {
        return Err(PuzzleError::EmptyWord);
    }

    if let Some(invalid_char) = word.chars().find(|c| !c.is_ascii_uppercase()) {
        return Err(PuzzleError::InvalidWordChar {
            word: word.to_string(),
            invalid_char,
        });
    }

    Ok(())
}
