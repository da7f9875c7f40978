//! Win and draw detection for tic-tac-toe.

use super::types::{Board, Cell, Mark};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

impl Board {
    /// Checks for a winner on the board.
    ///
    /// Returns the mark on the first completed line in [`LINES`] order,
    /// `None` if no line is complete.
    #[instrument(skip(self))]
    pub fn check_win(&self) -> Option<Mark> {
        LINES.iter().find_map(|&[a, b, c]| {
            match (self.get(a), self.get(b), self.get(c)) {
                (Some(Cell::Occupied(p1)), Some(Cell::Occupied(p2)), Some(Cell::Occupied(p3)))
                    if p1 == p2 && p2 == p3 =>
                {
                    Some(p1)
                }
                _ => None,
            }
        })
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        self.cells().iter().all(|c| *c != Cell::Empty)
    }
}
