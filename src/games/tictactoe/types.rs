//! Core domain types for tic-tac-toe.

use std::fmt;
use tracing::{debug, instrument};

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Mark {
    /// Mark X (moves first from the console entry point).
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order (0-8). Once a cell is occupied it
/// never becomes empty again; [`Board::make_move`] is the only way to
/// write to it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `mark` at `position` if the position is on the board and empty.
    ///
    /// Returns `false` without touching the board when the position is out
    /// of range or already occupied.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, position: usize, mark: Mark) -> bool {
        match self.cells.get_mut(position) {
            Some(cell) if *cell == Cell::Empty => {
                *cell = Cell::Occupied(mark);
                true
            }
            Some(_) => {
                debug!("Cell already occupied");
                false
            }
            None => {
                debug!("Position out of range");
                false
            }
        }
    }

    /// Gets the cell at the given position (0-8).
    pub fn get(&self, position: usize) -> Option<Cell> {
        self.cells.get(position).copied()
    }

    /// Checks if a cell is on the board and empty.
    pub fn is_empty(&self, position: usize) -> bool {
        matches!(self.get(position), Some(Cell::Empty))
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Positions of all empty cells, in ascending order.
    pub fn open_positions(&self) -> Vec<usize> {
        (0..CELLS).filter(|&pos| self.is_empty(pos)).collect()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Formats the board as a human-readable 3x3 grid.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f, "-----------")?;
            }
            let symbols: Vec<String> = cells
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => " ".to_string(),
                    Cell::Occupied(mark) => mark.to_string(),
                })
                .collect();
            writeln!(f, " {} ", symbols.join(" | "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_move_on_every_empty_cell() {
        for pos in 0..CELLS {
            for mark in [Mark::X, Mark::O] {
                let mut board = Board::new();
                assert!(board.make_move(pos, mark));
                assert_eq!(board.get(pos), Some(Cell::Occupied(mark)));

                // Second write at the same cell fails with either mark.
                assert!(!board.make_move(pos, mark));
                assert!(!board.make_move(pos, mark.opponent()));
                assert_eq!(board.get(pos), Some(Cell::Occupied(mark)));
                assert_eq!(board.occupied_count(), 1);
            }
        }
    }

    #[test]
    fn test_make_move_out_of_range() {
        let mut board = Board::new();
        for pos in [9, 10, 100, usize::MAX] {
            assert!(!board.make_move(pos, Mark::X));
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_open_positions() {
        let mut board = Board::new();
        board.make_move(0, Mark::X);
        board.make_move(4, Mark::O);
        assert_eq!(board.open_positions(), vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_render() {
        let mut board = Board::new();
        board.make_move(0, Mark::X);
        board.make_move(4, Mark::O);
        board.make_move(8, Mark::X);
        let expected = " X |   |   \n-----------\n   | O |   \n-----------\n   |   | X \n";
        assert_eq!(board.render(), expected);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }
}
