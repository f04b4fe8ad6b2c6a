//! Terminal tile-coloring puzzle runner (default binary).
//!
//! Drives one game session per run: renders the grid, maps key presses to
//! cursor moves and taps, and times the tap flash before handing the tap to
//! the turn resolver. Input that would start a new tap is dropped while a
//! flash is active, so the resolver only ever sees one tap at a time.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_pixels::engine::{EventSink, Phase, TurnResolver};
use tui_pixels::input::{handle_key_event, should_quit};
use tui_pixels::term::{FrameBuffer, GameView, SessionView, TerminalRenderer, Viewport};
use tui_pixels::types::{Coordinate, Line, UiAction, LANDING_FLASH_MS, TAP_FLASH_MS, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Visual flash in progress.
enum Flash {
    /// The tapped tile is flashing; the tap resolves when this expires.
    Tap { at: Coordinate, remaining_ms: i32 },
    /// The landed tile is highlighted; purely visual.
    Landing { at: Coordinate, remaining_ms: i32 },
}

impl Flash {
    fn at(&self) -> Coordinate {
        match self {
            Flash::Tap { at, .. } | Flash::Landing { at, .. } => *at,
        }
    }
}

/// One game session: the resolver plus runner-side presentation state.
struct Session {
    resolver: TurnResolver,
    cursor: Coordinate,
    flash: Option<Flash>,
}

/// Collects resolver events emitted while resolving one tap.
#[derive(Default)]
struct TapEvents {
    colored: Option<Coordinate>,
    ended: Option<i32>,
}

impl EventSink for TapEvents {
    fn tile_colored(&mut self, at: Coordinate) {
        self.colored = Some(at);
    }

    fn game_ended(&mut self, final_score: i32) {
        self.ended = Some(final_score);
    }
}

impl Session {
    fn new() -> Self {
        Self {
            resolver: TurnResolver::new(),
            cursor: Coordinate::new(Line::Three, Line::Three),
            flash: None,
        }
    }

    fn apply(&mut self, action: UiAction) {
        match action {
            // Row 5 is drawn at the top, so visual up moves away from the
            // resting edge. Moves past the grid edge are ignored.
            UiAction::CursorUp => self.move_cursor(self.cursor.row.succ(), Some(self.cursor.col)),
            UiAction::CursorDown => self.move_cursor(self.cursor.row.pred(), Some(self.cursor.col)),
            UiAction::CursorLeft => self.move_cursor(Some(self.cursor.row), self.cursor.col.pred()),
            UiAction::CursorRight => self.move_cursor(Some(self.cursor.row), self.cursor.col.succ()),
            UiAction::Tap => {
                // Input is gated while a flash runs and once the game is over.
                if self.flash.is_none() && self.resolver.phase() == Phase::Idle {
                    self.flash = Some(Flash::Tap {
                        at: self.cursor,
                        remaining_ms: TAP_FLASH_MS as i32,
                    });
                }
            }
            UiAction::Restart => *self = Session::new(),
        }
    }

    fn move_cursor(&mut self, row: Option<Line>, col: Option<Line>) {
        if let (Some(row), Some(col)) = (row, col) {
            self.cursor = Coordinate::new(row, col);
        }
    }

    /// Advance flash timers; resolves the pending tap when its flash ends.
    fn tick(&mut self, elapsed_ms: u32) {
        let Some(flash) = self.flash.take() else {
            return;
        };
        match flash {
            Flash::Tap { at, remaining_ms } => {
                let remaining_ms = remaining_ms - elapsed_ms as i32;
                if remaining_ms > 0 {
                    self.flash = Some(Flash::Tap { at, remaining_ms });
                    return;
                }

                let mut events = TapEvents::default();
                self.resolver.handle_tap(at, &mut events);
                if let Some(landing) = events.colored {
                    self.flash = Some(Flash::Landing {
                        at: landing,
                        remaining_ms: LANDING_FLASH_MS as i32,
                    });
                }
            }
            Flash::Landing { at, remaining_ms } => {
                let remaining_ms = remaining_ms - elapsed_ms as i32;
                if remaining_ms > 0 {
                    self.flash = Some(Flash::Landing { at, remaining_ms });
                }
            }
        }
    }

    fn view(&self) -> SessionView {
        SessionView {
            cursor: self.cursor,
            flash: self.flash.as_ref().map(Flash::at),
            colored_count: self.resolver.board().colored_cells().len(),
            final_score: self.resolver.final_score(),
        }
    }
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = Session::new();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(
            session.resolver.board(),
            &session.view(),
            Viewport::new(w, h),
            &mut fb,
        );
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.apply(action);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
        }
    }
}
