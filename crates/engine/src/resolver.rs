//! TurnResolver: resolves one tap at a time against the board.
//!
//! Resolution is synchronous and strictly sequential. A tap that arrives
//! while the session is not idle is dropped before it can touch the board;
//! the caller is expected to gate input during any visual delay it adds on
//! top (the runner does this with its tap flash timer).

use crate::core::Board;
use crate::types::{Coordinate, Line};

/// Session phase
///
/// `Resolving` only exists inside [`TurnResolver::handle_tap`]; observers see
/// `Idle` or `GameOver` between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Resolving,
    GameOver,
}

/// Receiver for outbound game events
///
/// Implemented by the presentation layer. The resolver calls it during
/// `handle_tap` and keeps no reference to it afterwards.
pub trait EventSink {
    /// A tile finished falling and is now permanently colored.
    fn tile_colored(&mut self, at: Coordinate);

    /// The game ended; display the final score.
    fn game_ended(&mut self, final_score: i32);
}

/// Sink that discards all events, for tests and benches
pub struct NullSink;

impl EventSink for NullSink {
    fn tile_colored(&mut self, _at: Coordinate) {}
    fn game_ended(&mut self, _final_score: i32) {}
}

/// Result of one resolved tap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapOutcome {
    /// Where the tapped tile came to rest.
    pub landing: Coordinate,
    /// Whether this tap ended the game.
    pub game_over: bool,
    /// The final score, present only when `game_over` is true.
    pub final_score: Option<i32>,
}

/// Resolves taps into landing coordinates and owns the board for one session
#[derive(Debug)]
pub struct TurnResolver {
    board: Board,
    phase: Phase,
    final_score: Option<i32>,
}

impl TurnResolver {
    /// Start a fresh session with an empty board
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: Phase::Idle,
            final_score: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The finalized score, once the session has ended
    pub fn final_score(&self) -> Option<i32> {
        self.final_score
    }

    /// Resolve a tap at the given coordinate
    ///
    /// Returns `None` without touching the board unless the session is idle.
    /// Otherwise finds the landing coordinate, colors it, reports it to the
    /// sink, and ends the game if the board says so.
    pub fn handle_tap(&mut self, at: Coordinate, sink: &mut dyn EventSink) -> Option<TapOutcome> {
        if self.phase != Phase::Idle {
            return None;
        }
        self.phase = Phase::Resolving;

        let landing = self.landing_for(at);
        self.board.mark_colored(landing);
        sink.tile_colored(landing);

        let outcome = if self.board.is_game_over() {
            let score = self.board.final_score();
            self.phase = Phase::GameOver;
            self.final_score = Some(score);
            sink.game_ended(score);
            TapOutcome {
                landing,
                game_over: true,
                final_score: Some(score),
            }
        } else {
            self.phase = Phase::Idle;
            TapOutcome {
                landing,
                game_over: false,
                final_score: None,
            }
        };
        Some(outcome)
    }

    /// Fall simulation: where a tile tapped at `at` comes to rest
    ///
    /// Rule order matters and the tapped coordinate is checked first:
    /// a tile on the resting edge, on a colored support, or sandwiched
    /// between two colored neighbors never falls. Otherwise the scan walks
    /// row by row toward the edge and stops at the first row satisfying the
    /// same conditions; row 1 always does, so the scan terminates.
    fn landing_for(&self, at: Coordinate) -> Coordinate {
        if at.row == Line::One {
            return at;
        }
        if self.supported(at) {
            return at;
        }

        let mut probe = at;
        while let Some(next) = probe.toward_edge() {
            probe = next;
            if probe.row == Line::One || self.supported(probe) {
                break;
            }
        }
        probe
    }

    fn supported(&self, at: Coordinate) -> bool {
        self.board.is_above_colored_block(at).is_some()
            || self.board.is_between_two_colored_blocks(at)
    }
}

impl Default for TurnResolver {
    fn default() -> Self {
        Self::new()
    }
}
