//! Core game logic module - pure, deterministic, and testable
//!
//! This module owns the board state and every rule that reads or mutates it.
//! It has **zero dependencies** on UI, timing, or I/O, making it:
//!
//! - **Deterministic**: the same tap sequence always produces the same board
//! - **Testable**: every predicate and the scoring pass are plain functions
//! - **Portable**: runs in any environment (terminal, headless tests, benches)
//!
//! # Game Rules
//!
//! The board is a fixed 5x5 grid. A tile, once colored, never reverts. The
//! game ends when 10 tiles are colored; the final score is then computed:
//!
//! - A colored tile on the resting edge (row 1), or resting on an uncolored
//!   tile, is worth the unit score (5).
//! - A colored tile resting on another colored tile is worth that support's
//!   score plus the unit score, so stacks pay out as chains: 5, 10, 15, ...
//! - Every uncolored tile with a colored tile somewhere farther out in its
//!   column is worth the white-block score (10).
//! - The final score is the sum over all 25 cells.
//!
//! # Example
//!
//! ```
//! use tui_pixels_core::Board;
//! use tui_pixels_types::{Coordinate, Line};
//!
//! let mut board = Board::new();
//! board.mark_colored(Coordinate::new(Line::One, Line::One));
//! board.mark_colored(Coordinate::new(Line::Two, Line::One));
//!
//! assert_eq!(board.colored_cells().len(), 2);
//! assert_eq!(board.final_score(), 15); // 5 + (5 + 5)
//! ```

pub mod board;

pub use tui_pixels_types as types;

pub use board::Board;
