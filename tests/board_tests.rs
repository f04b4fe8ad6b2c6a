//! Board tests - predicates, coloring, and the scoring pass

use tui_pixels::core::Board;
use tui_pixels::types::{Coordinate, Line, GRID_CELLS};

fn at(row: u8, col: u8) -> Coordinate {
    Coordinate::new(Line::from_raw(row).unwrap(), Line::from_raw(col).unwrap())
}

#[test]
fn test_board_new_has_one_cell_per_coordinate() {
    let board = Board::new();
    let mut seen = Vec::with_capacity(GRID_CELLS);
    for row in Line::ALL {
        for col in Line::ALL {
            let cell = board.get(Coordinate::new(row, col));
            assert_eq!(cell.at, Coordinate::new(row, col));
            assert!(!seen.contains(&cell.at), "duplicate cell at {:?}", cell.at);
            seen.push(cell.at);
        }
    }
    assert_eq!(seen.len(), GRID_CELLS);
}

#[test]
fn test_below_colored_block_false_on_empty_board() {
    let board = Board::new();
    for row in Line::ALL {
        for col in Line::ALL {
            assert!(!board.is_below_colored_block(Coordinate::new(row, col)));
        }
    }
}

#[test]
fn test_below_colored_block_scans_whole_column() {
    let mut board = Board::new();
    board.mark_colored(at(3, 1));

    // Rows closer to the edge see the colored cell, even across the gap.
    assert!(board.is_below_colored_block(at(1, 1)));
    assert!(board.is_below_colored_block(at(2, 1)));

    // Rows farther out do not, and neither does any other column.
    assert!(!board.is_below_colored_block(at(3, 1)));
    assert!(!board.is_below_colored_block(at(4, 1)));
    assert!(!board.is_below_colored_block(at(5, 1)));
    assert!(!board.is_below_colored_block(at(1, 2)));
}

#[test]
fn test_below_colored_block_false_at_far_row() {
    let mut board = Board::new();
    for col in Line::ALL {
        board.mark_colored(Coordinate::new(Line::Five, col));
        assert!(!board.is_below_colored_block(Coordinate::new(Line::Five, col)));
    }
}

#[test]
fn test_white_cells_with_score() {
    let mut board = Board::new();
    board.mark_colored(at(2, 1));

    let white = board.white_cells_with_score();
    assert_eq!(white.len(), 1);
    assert_eq!(white[0].at, at(1, 1));

    // A second colored cell higher up in another column adds three more.
    board.mark_colored(at(4, 2));
    assert_eq!(board.white_cells_with_score().len(), 4);
}

#[test]
fn test_above_colored_block() {
    let board = Board::new();
    assert_eq!(board.is_above_colored_block(at(1, 1)), None);

    let mut board = Board::new();
    board.mark_colored(at(1, 1));
    let support = board.is_above_colored_block(at(2, 1)).unwrap();
    assert_eq!(support.at, at(1, 1));
    assert!(support.colored);

    // Only the directly adjacent row counts.
    assert_eq!(board.is_above_colored_block(at(3, 1)), None);
}

#[test]
fn test_above_uncolored_block() {
    let mut board = Board::new();
    board.mark_colored(at(3, 4));
    assert!(board.is_above_uncolored_block(at(3, 4)));

    // Resting-edge cells are not above anything.
    assert!(!board.is_above_uncolored_block(at(1, 4)));

    board.mark_colored(at(2, 4));
    assert!(!board.is_above_uncolored_block(at(3, 4)));
}

#[test]
fn test_between_two_colored_blocks() {
    let mut board = Board::new();
    assert!(!board.is_between_two_colored_blocks(at(2, 2)));

    board.mark_colored(at(2, 1));
    board.mark_colored(at(2, 3));
    assert!(board.is_between_two_colored_blocks(at(2, 2)));

    // Column extremes can never be sandwiched.
    assert!(!board.is_between_two_colored_blocks(at(2, 1)));
    assert!(!board.is_between_two_colored_blocks(at(2, 5)));

    // One colored neighbor is not enough.
    assert!(!board.is_between_two_colored_blocks(at(2, 4)));
}

#[test]
fn test_mark_colored_twice_is_one_state() {
    let mut board = Board::new();
    board.mark_colored(at(4, 4));
    let once = board.clone();
    board.mark_colored(at(4, 4));
    assert_eq!(board, once);
}

#[test]
fn test_game_over_at_threshold() {
    let mut board = Board::new();
    for (i, col) in Line::ALL.iter().enumerate() {
        board.mark_colored(Coordinate::new(Line::One, *col));
        board.mark_colored(Coordinate::new(Line::Three, *col));
        if i < 4 {
            assert!(!board.is_game_over(), "not over at {} cells", (i + 1) * 2);
        }
    }
    assert!(board.is_game_over());
}

#[test]
fn test_final_score_scenario_smaller() {
    let mut board = Board::new();
    for (row, col) in [
        (1, 1),
        (1, 3),
        (1, 5),
        (2, 1),
        (2, 2),
        (2, 3),
        (2, 5),
        (3, 3),
        (3, 4),
        (3, 5),
    ] {
        board.mark_colored(at(row, col));
    }

    assert!(board.is_game_over());
    assert_eq!(board.final_score(), 115);
}

#[test]
fn test_final_score_scenario_bigger() {
    let mut board = Board::new();
    for (row, col) in [
        (1, 3),
        (1, 5),
        (2, 3),
        (2, 5),
        (3, 3),
        (3, 5),
        (4, 3),
        (4, 4),
        (4, 5),
        (5, 4),
    ] {
        board.mark_colored(at(row, col));
    }

    assert!(board.is_game_over());
    assert_eq!(board.final_score(), 145);
}

#[test]
fn test_final_score_persists_cell_scores() {
    let mut board = Board::new();
    board.mark_colored(at(1, 2));
    board.mark_colored(at(2, 2));
    board.mark_colored(at(4, 2));

    let total = board.final_score();

    // Chain on the edge: 5 then 10. The floater restarts at 5.
    assert_eq!(board.get(at(1, 2)).score, 5);
    assert_eq!(board.get(at(2, 2)).score, 10);
    assert_eq!(board.get(at(4, 2)).score, 5);
    // The gap under the floater is a scored white cell.
    assert_eq!(board.get(at(3, 2)).score, 10);
    // Untouched cells contribute their default zero.
    assert_eq!(board.get(at(5, 2)).score, 0);
    assert_eq!(board.get(at(1, 1)).score, 0);

    assert_eq!(total, 30);
}
