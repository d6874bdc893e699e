//! The letter grid viewed as a graph: one [`Cell`] per position, with
//! 8-directional adjacency (horizontal, vertical, both diagonals).
//!
//! A `Graph` is built once per loaded puzzle and immutable afterwards, so
//! any number of searches may read it concurrently without coordination.
//! Neighbor enumeration has a fixed deterministic order; that order decides
//! which path the searches find first among ties, so it must never change
//! between calls.

use crate::cell::Cell;

/// Relative (row, col) offsets of the eight neighbors, in the fixed order
/// the searches depend on.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Adjacency graph over a rectangular character matrix.
///
/// # Preconditions
///
/// The input matrix must have at least one row and one column and uniform
/// row width. Shape validation is the caller's responsibility (see
/// [`Board`](crate::board::Board)); a ragged matrix produces undefined
/// indexing behavior here, not an error.
#[derive(Debug)]
pub struct Graph {
    rows: usize,
    cols: usize,
    /// Row-major cell storage; index of (r, c) is `r * cols + c`.
    cells: Vec<Cell>,
}

impl Graph {
    /// Build the graph from a rectangular character matrix.
    #[must_use]
    pub fn new(board: &[Vec<char>]) -> Self {
        let rows = board.len();
        let cols = board.first().map_or(0, Vec::len);

        let mut cells = Vec::with_capacity(rows * cols);
        for (r, row) in board.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                cells.push(Cell::new(value, r, c));
            }
        }

        Self { rows, cols, cells }
    }

    /// Number of rows in the grid.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the grid.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Direct cell lookup.
    ///
    /// # Panics
    /// Panics if `row`/`col` lie outside the grid. That is a programming
    /// error (neighbor enumeration always bounds-checks first), so we fail
    /// fast rather than absorb it.
    #[must_use]
    pub fn cell_at(&self, row: usize, col: usize) -> &Cell {
        assert!(
            row < self.rows && col < self.cols,
            "cell_at({row}, {col}) out of range for {}x{} grid",
            self.rows,
            self.cols
        );
        &self.cells[row * self.cols + col]
    }

    /// All cells in row-major order. Drives the start-cell order of every
    /// search, so the iteration order is part of the contract.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The in-bounds 8-directional neighbors of `cell`, in the fixed order
    /// of [`NEIGHBOR_OFFSETS`].
    pub fn neighbors<'g>(&'g self, cell: &Cell) -> impl Iterator<Item = &'g Cell> {
        let (row, col) = (cell.row(), cell.col());
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < self.rows && c < self.cols).then(|| &self.cells[r * self.cols + c])
        })
    }
}
