//! Board module - manages the game grid
//!
//! The board is a 5x5 grid of cells, each permanently colored or not.
//! Uses a flat array with direct (row, col) indexing for O(1) access.
//! Coordinates are 1-indexed on both axes; row 1 is the resting edge that
//! tapped tiles fall toward, columns only matter for adjacency checks.

use arrayvec::ArrayVec;

use crate::types::{
    Cell, Coordinate, Line, GAME_OVER_COLORED_COUNT, GRID_CELLS, GRID_LINES, UNIT_SCORE,
    WHITE_BLOCK_SCORE,
};

/// The game board - 25 cells in row-major order from (1,1)
///
/// Constructed once per game session and never resized. Cells mutate only
/// through [`Board::mark_colored`] and the score writes done by
/// [`Board::final_score`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major ((row-1) * 5 + (col-1))
    cells: [Cell; GRID_CELLS],
}

impl Board {
    /// Create a new board with every cell uncolored and unscored
    pub fn new() -> Self {
        let mut cells = [Cell::new(Coordinate::new(Line::One, Line::One)); GRID_CELLS];
        for row in Line::ALL {
            for col in Line::ALL {
                let at = Coordinate::new(row, col);
                cells[Self::index(at)] = Cell::new(at);
            }
        }
        Self { cells }
    }

    /// Calculate flat index from a coordinate
    ///
    /// Row-major order means flat iteration visits rows in ascending order,
    /// which the scoring pass relies on.
    #[inline(always)]
    fn index(at: Coordinate) -> usize {
        at.row.offset() * GRID_LINES + at.col.offset()
    }

    /// Get the cell at a coordinate
    ///
    /// Coordinates are a closed 5x5 domain, so lookup cannot fail.
    pub fn get(&self, at: Coordinate) -> Cell {
        self.cells[Self::index(at)]
    }

    /// Replace the cell at a coordinate
    pub fn set(&mut self, at: Coordinate, cell: Cell) {
        debug_assert_eq!(cell.at, at, "cell written to a foreign coordinate");
        self.cells[Self::index(at)] = cell;
    }

    /// Mark the cell at a coordinate as colored and return the updated cell
    ///
    /// Idempotent: a second call leaves the board unchanged.
    pub fn mark_colored(&mut self, at: Coordinate) -> Cell {
        let mut cell = self.get(at);
        cell.colored = true;
        self.set(at, cell);
        cell
    }

    /// All colored cells, in grid order (ascending row, then column)
    pub fn colored_cells(&self) -> ArrayVec<Cell, GRID_CELLS> {
        self.cells.iter().copied().filter(|c| c.colored).collect()
    }

    /// All uncolored cells that sit below a colored block
    ///
    /// These are the cells that earn the white-block score during final
    /// scoring.
    pub fn white_cells_with_score(&self) -> ArrayVec<Cell, GRID_CELLS> {
        self.cells
            .iter()
            .copied()
            .filter(|c| !c.colored && self.is_below_colored_block(c.at))
            .collect()
    }

    /// True if any cell at a strictly greater row in the same column is
    /// colored, even with uncolored gaps in between
    ///
    /// Always false at row 5 (nothing farther out to check).
    pub fn is_below_colored_block(&self, at: Coordinate) -> bool {
        let mut row = at.row;
        while let Some(next) = row.succ() {
            if self.get(Coordinate::new(next, at.col)).colored {
                return true;
            }
            row = next;
        }
        false
    }

    /// The colored cell directly supporting this coordinate, if any
    ///
    /// Checks only the adjacent cell one row toward the resting edge.
    /// `None` at row 1 (nothing to rest on) or when the neighbor is
    /// uncolored.
    pub fn is_above_colored_block(&self, at: Coordinate) -> Option<Cell> {
        let below = self.get(at.toward_edge()?);
        below.colored.then_some(below)
    }

    /// True if the adjacent cell one row toward the resting edge exists and
    /// is not colored
    ///
    /// False at row 1: a cell on the resting edge is not above anything.
    pub fn is_above_uncolored_block(&self, at: Coordinate) -> bool {
        match at.toward_edge() {
            Some(below) => !self.get(below).colored,
            None => false,
        }
    }

    /// True if both lateral neighbors (same row, col-1 and col+1) are colored
    ///
    /// False at either column extreme.
    pub fn is_between_two_colored_blocks(&self, at: Coordinate) -> bool {
        let (Some(left), Some(right)) = (at.col.pred(), at.col.succ()) else {
            return false;
        };
        self.get(Coordinate::new(at.row, left)).colored
            && self.get(Coordinate::new(at.row, right)).colored
    }

    /// True once enough cells are colored to end the game
    pub fn is_game_over(&self) -> bool {
        self.cells.iter().filter(|c| c.colored).count() >= GAME_OVER_COLORED_COUNT
    }

    /// Compute the final score, persisting per-cell scores into the board
    ///
    /// Scores are overwritten, not accumulated, so repeated calls on a
    /// finished board return the same total. Colored cells are visited in
    /// grid order, i.e. ascending row, so a cell resting on a colored stack
    /// reads its support's already-updated score and chains accumulate from
    /// the resting edge outward.
    pub fn final_score(&mut self) -> i32 {
        for cell in self.colored_cells() {
            let score = if cell.at.row == Line::One {
                UNIT_SCORE
            } else if let Some(support) = self.is_above_colored_block(cell.at) {
                support.score + UNIT_SCORE
            } else {
                UNIT_SCORE
            };
            self.set(cell.at, Cell { score, ..cell });
        }

        for cell in self.white_cells_with_score() {
            self.set(
                cell.at,
                Cell {
                    score: WHITE_BLOCK_SCORE,
                    ..cell
                },
            );
        }

        self.cells.iter().map(|c| c.score).sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
