//! GameView: maps board and session state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Board;
use crate::fb::{FrameBuffer, Glyph, Rgb};
use crate::types::{Coordinate, Line, GAME_OVER_COLORED_COUNT, GRID_LINES};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Presentation state owned by the runner, alongside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionView {
    /// Tile under the cursor.
    pub cursor: Coordinate,
    /// Tile currently flashing after a tap, if any.
    pub flash: Option<Coordinate>,
    /// Colored tiles so far, for the progress line.
    pub colored_count: usize,
    /// Final score once the session has ended.
    pub final_score: Option<i32>,
}

/// Background of an uncolored tile.
pub const EMPTY_BG: Rgb = Rgb::new(30, 30, 40);
/// Background of a permanently colored tile.
pub const COLORED_BG: Rgb = Rgb::new(60, 120, 230);
/// Background of the tap flash.
pub const FLASH_BG: Rgb = Rgb::new(240, 220, 90);

const BORDER_FG: Rgb = Rgb::new(200, 200, 200);
const TEXT_FG: Rgb = Rgb::new(220, 220, 220);
const CURSOR_FG: Rgb = Rgb::new(250, 250, 250);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// A lightweight terminal view of the 5x5 grid.
///
/// Row 1 is drawn at the bottom so tapped tiles visually fall downward.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x2 keeps tiles roughly square under typical glyph aspect ratios.
        Self {
            cell_w: 4,
            cell_h: 2,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Top-left framebuffer position of a tile, given the frame origin.
    fn tile_origin(&self, start_x: u16, start_y: u16, at: Coordinate) -> (u16, u16) {
        let x = start_x + 1 + (at.col.offset() as u16) * self.cell_w;
        // Row 1 at the bottom: higher rows sit closer to start_y.
        let flipped = (GRID_LINES - 1 - at.row.offset()) as u16;
        let y = start_y + 1 + flipped * self.cell_h;
        (x, y)
    }

    /// Render the session into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully repainted.
    pub fn render_into(&self, board: &Board, session: &SessionView, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::new(' ', TEXT_FG, SCREEN_BG));

        let grid_w = (GRID_LINES as u16) * self.cell_w;
        let grid_h = (GRID_LINES as u16) * self.cell_h;
        let frame_w = grid_w + 2;
        let frame_h = grid_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 2) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for row in Line::ALL {
            for col in Line::ALL {
                let at = Coordinate::new(row, col);
                let (x, y) = self.tile_origin(start_x, start_y, at);

                let bg = if session.flash == Some(at) {
                    FLASH_BG
                } else if board.get(at).colored {
                    COLORED_BG
                } else {
                    EMPTY_BG
                };
                fb.fill_rect(x, y, self.cell_w, self.cell_h, Glyph::new(' ', TEXT_FG, bg));

                if session.cursor == at {
                    let mid_y = y + self.cell_h / 2;
                    fb.put(x, mid_y, Glyph::new('[', CURSOR_FG, bg).bold());
                    fb.put(
                        x + self.cell_w - 1,
                        mid_y,
                        Glyph::new(']', CURSOR_FG, bg).bold(),
                    );
                }
            }
        }

        // Status lines under the frame.
        let status_y = start_y + frame_h;
        match session.final_score {
            Some(score) => {
                let over = format!("game over - score {score}");
                fb.put_str(start_x, status_y, &over, CURSOR_FG, SCREEN_BG);
                fb.put_str(
                    start_x,
                    status_y + 1,
                    "r: new game  q: quit",
                    TEXT_FG,
                    SCREEN_BG,
                );
            }
            None => {
                let progress = format!(
                    "colored {}/{}",
                    session.colored_count, GAME_OVER_COLORED_COUNT
                );
                fb.put_str(start_x, status_y, &progress, TEXT_FG, SCREEN_BG);
                fb.put_str(
                    start_x,
                    status_y + 1,
                    "arrows: move  enter: tap  q: quit",
                    TEXT_FG,
                    SCREEN_BG,
                );
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let line = |ch| Glyph::new(ch, BORDER_FG, SCREEN_BG);
        for dx in 1..w.saturating_sub(1) {
            fb.put(x + dx, y, line('─'));
            fb.put(x + dx, y + h - 1, line('─'));
        }
        for dy in 1..h.saturating_sub(1) {
            fb.put(x, y + dy, line('│'));
            fb.put(x + w - 1, y + dy, line('│'));
        }
        fb.put(x, y, line('┌'));
        fb.put(x + w - 1, y, line('┐'));
        fb.put(x, y + h - 1, line('└'));
        fb.put(x + w - 1, y + h - 1, line('┘'));
    }
}
