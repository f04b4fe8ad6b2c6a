//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, headless tests).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed 5x5 grid:
//!
//! - **Rows**: 5, indexed 1-5. Row 1 is the resting edge; tapped tiles fall
//!   toward it and may rest there without support.
//! - **Columns**: 5, indexed 1-5. The lateral axis; no falling behavior, only
//!   adjacency checks.
//!
//! Both axes range over the same closed set of five positions, modeled by
//! [`Line`]. Because a [`Coordinate`] can only be built from two `Line` values,
//! out-of-range positions are unrepresentable and board lookups cannot fail.
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_LINES` | 5 | Positions per axis |
//! | `GRID_CELLS` | 25 | Total cells on the board |
//! | `GAME_OVER_COLORED_COUNT` | 10 | Colored tiles that end the game |
//! | `UNIT_SCORE` | 5 | Base score for a colored tile |
//! | `WHITE_BLOCK_SCORE` | 10 | Score for an uncolored tile under a colored one |
//! | `TAP_FLASH_MS` | 300 | Tap flash duration before the tile falls |
//! | `LANDING_FLASH_MS` | 120 | Highlight duration on the landed tile |
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_pixels_types::{Coordinate, Line};
//!
//! let at = Coordinate::new(Line::Three, Line::Two);
//! assert_eq!(at.row.raw(), 3);
//!
//! // Walking toward the resting edge stops at row 1.
//! assert_eq!(Line::Two.pred(), Some(Line::One));
//! assert_eq!(Line::One.pred(), None);
//! ```

/// Positions per axis (5 rows, 5 columns)
pub const GRID_LINES: usize = 5;

/// Total number of cells on the board
pub const GRID_CELLS: usize = GRID_LINES * GRID_LINES;

/// Number of colored tiles that ends the game
pub const GAME_OVER_COLORED_COUNT: usize = 10;

/// Base score awarded to a colored tile (and each link of a chain)
pub const UNIT_SCORE: i32 = 5;

/// Score awarded to an uncolored tile that sits below a colored one
pub const WHITE_BLOCK_SCORE: i32 = 10;

/// Tap flash duration before the tile falls (milliseconds)
pub const TAP_FLASH_MS: u32 = 300;

/// Highlight duration on the tile that just landed (milliseconds)
pub const LANDING_FLASH_MS: u32 = 120;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// One of the five discrete positions along either grid axis
///
/// Raw values run 1-5 to match the board's 1-indexed coordinates. `One` is the
/// resting edge on the row axis and the leftmost position on the column axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Line {
    One = 1,
    Two,
    Three,
    Four,
    Five,
}

impl Line {
    /// All positions in ascending order
    pub const ALL: [Line; GRID_LINES] = [Line::One, Line::Two, Line::Three, Line::Four, Line::Five];

    /// The far end of the axis
    pub const MAX: Line = Line::Five;

    /// Parse from a 1-based raw value
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pixels_types::Line;
    ///
    /// assert_eq!(Line::from_raw(1), Some(Line::One));
    /// assert_eq!(Line::from_raw(5), Some(Line::Five));
    /// assert_eq!(Line::from_raw(0), None);
    /// assert_eq!(Line::from_raw(6), None);
    /// ```
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            1 => Some(Line::One),
            2 => Some(Line::Two),
            3 => Some(Line::Three),
            4 => Some(Line::Four),
            5 => Some(Line::Five),
            _ => None,
        }
    }

    /// The 1-based raw value
    pub fn raw(self) -> u8 {
        self as u8
    }

    /// Zero-based offset for flat array indexing
    pub fn offset(self) -> usize {
        (self as u8 - 1) as usize
    }

    /// The previous position, or `None` at `One`
    pub fn pred(self) -> Option<Self> {
        Self::from_raw(self.raw().wrapping_sub(1))
    }

    /// The next position, or `None` at `Five`
    pub fn succ(self) -> Option<Self> {
        Self::from_raw(self.raw() + 1)
    }
}

/// A (row, col) pair identifying one grid cell
///
/// Equality is structural. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// Position along the falling axis; row 1 is the resting edge.
    pub row: Line,
    /// Position along the lateral axis.
    pub col: Line,
}

impl Coordinate {
    pub fn new(row: Line, col: Line) -> Self {
        Self { row, col }
    }

    /// The coordinate one row closer to the resting edge, if any
    pub fn toward_edge(self) -> Option<Self> {
        self.row.pred().map(|row| Self::new(row, self.col))
    }
}

/// One tile of the board
///
/// `colored` flips to true exactly once per game; `score` is meaningful only
/// after final scoring has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub at: Coordinate,
    pub colored: bool,
    pub score: i32,
}

impl Cell {
    /// A fresh uncolored, unscored cell
    pub fn new(at: Coordinate) -> Self {
        Self {
            at,
            colored: false,
            score: 0,
        }
    }
}

/// UI-level actions produced by the input layer
///
/// These drive the runner's cursor and session lifecycle; only `Tap` reaches
/// the turn resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Move the cursor one row away from the resting edge
    CursorUp,
    /// Move the cursor one row toward the resting edge
    CursorDown,
    /// Move the cursor one column left
    CursorLeft,
    /// Move the cursor one column right
    CursorRight,
    /// Tap the tile under the cursor
    Tap,
    /// Tear down the session and start a fresh game
    Restart,
}
