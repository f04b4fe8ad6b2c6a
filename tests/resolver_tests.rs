//! Resolver tests - full tap-driven games and event delivery

use tui_pixels::engine::{EventSink, NullSink, Phase, TurnResolver};
use tui_pixels::types::Coordinate;
use tui_pixels::types::Line;

fn at(row: u8, col: u8) -> Coordinate {
    Coordinate::new(Line::from_raw(row).unwrap(), Line::from_raw(col).unwrap())
}

/// Records every event in delivery order.
#[derive(Default)]
struct Recorder {
    colored: Vec<Coordinate>,
    ended: Vec<i32>,
}

impl EventSink for Recorder {
    fn tile_colored(&mut self, at: Coordinate) {
        self.colored.push(at);
    }

    fn game_ended(&mut self, final_score: i32) {
        self.ended.push(final_score);
    }
}

/// The ten-tap reference game: three full stacks in columns 1-3, one tile
/// in column 5.
const TAPS: [(u8, u8); 10] = [
    (5, 1),
    (5, 1),
    (3, 2),
    (5, 3),
    (5, 3),
    (2, 2),
    (3, 3),
    (3, 2),
    (3, 1),
    (5, 5),
];

const LANDINGS: [(u8, u8); 10] = [
    (1, 1),
    (2, 1),
    (1, 2),
    (1, 3),
    (2, 3),
    (2, 2),
    (3, 3),
    (3, 2),
    (3, 1),
    (1, 5),
];

#[test]
fn test_reference_game_landings_and_score() {
    let mut resolver = TurnResolver::new();
    let mut events = Recorder::default();

    for (tap, expected) in TAPS.iter().zip(LANDINGS) {
        let outcome = resolver.handle_tap(at(tap.0, tap.1), &mut events).unwrap();
        assert_eq!(outcome.landing, at(expected.0, expected.1));
    }

    // Three chains of 5+10+15 plus a lone edge tile; no scored white cells: 95.
    assert_eq!(resolver.phase(), Phase::GameOver);
    assert_eq!(resolver.final_score(), Some(95));

    let expected: Vec<Coordinate> = LANDINGS.iter().map(|&(r, c)| at(r, c)).collect();
    assert_eq!(events.colored, expected);
    assert_eq!(events.ended, vec![95]);
}

#[test]
fn test_identical_tap_sequences_are_deterministic() {
    let run = || {
        let mut resolver = TurnResolver::new();
        let mut landings = Vec::new();
        for (row, col) in TAPS {
            let outcome = resolver.handle_tap(at(row, col), &mut NullSink).unwrap();
            landings.push(outcome.landing);
        }
        (landings, resolver.final_score())
    };

    assert_eq!(run(), run());
}

#[test]
fn test_tap_after_game_over_emits_nothing() {
    let mut resolver = TurnResolver::new();
    for (row, col) in TAPS {
        resolver.handle_tap(at(row, col), &mut NullSink);
    }
    assert_eq!(resolver.phase(), Phase::GameOver);

    let mut events = Recorder::default();
    assert_eq!(resolver.handle_tap(at(5, 4), &mut events), None);
    assert!(events.colored.is_empty());
    assert!(events.ended.is_empty());
}

#[test]
fn test_resting_edge_tap_always_colors_in_place() {
    // Rule 1 dominates: even a fully supported edge tile stays put.
    let mut resolver = TurnResolver::new();
    for col in Line::ALL {
        let tapped = Coordinate::new(Line::One, col);
        let outcome = resolver.handle_tap(tapped, &mut NullSink).unwrap();
        assert_eq!(outcome.landing, tapped);
    }
}

#[test]
fn test_tapping_colored_cell_changes_nothing() {
    let mut resolver = TurnResolver::new();
    resolver.handle_tap(at(1, 2), &mut NullSink);
    let before = resolver.board().clone();

    // The tile lands on itself; mark_colored is idempotent.
    let outcome = resolver.handle_tap(at(1, 2), &mut NullSink).unwrap();
    assert_eq!(outcome.landing, at(1, 2));
    assert_eq!(resolver.board(), &before);
    assert_eq!(resolver.board().colored_cells().len(), 1);
}

#[test]
fn test_final_score_visible_after_game_over() {
    let mut resolver = TurnResolver::new();
    assert_eq!(resolver.final_score(), None);

    for (row, col) in TAPS {
        resolver.handle_tap(at(row, col), &mut NullSink);
    }

    // The board keeps the per-cell scores the final pass wrote.
    assert_eq!(resolver.final_score(), Some(95));
    assert_eq!(resolver.board().get(at(3, 1)).score, 15);
}
