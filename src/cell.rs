use std::fmt;
use std::fmt::{Display, Formatter};

/// One position of the letter grid: a letter plus its row/column coordinates.
///
/// Equality and hashing are structural over all three fields, so two cells
/// compare equal only when they hold the same letter at the same position.
/// Cells are created once by [`Graph`](crate::graph::Graph) and never mutated;
/// the searches only hold `&Cell` references into the graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    value: char,
    row: usize,
    col: usize,
}

impl Cell {
    pub(crate) fn new(value: char, row: usize, col: usize) -> Self {
        Self { value, row, col }
    }

    /// The letter held at this position.
    #[must_use]
    pub fn value(&self) -> char {
        self.value
    }

    /// Row index of this cell.
    #[must_use]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index of this cell.
    #[must_use]
    pub fn col(&self) -> usize {
        self.col
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.value, self.row, self.col)
    }
}
