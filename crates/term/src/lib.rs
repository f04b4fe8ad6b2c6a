//! Terminal presentation module.
//!
//! Renders a game session into a terminal. Split into a pure mapping layer
//! and an I/O layer so the interesting part stays unit-testable:
//!
//! - [`fb`]: a framebuffer of styled glyphs, no I/O
//! - [`game_view`]: maps board + session state into the framebuffer, no I/O
//! - [`renderer`]: flushes a framebuffer to a real terminal via crossterm
//!
//! The grid is drawn with row 1 (the resting edge) at the bottom, so tapped
//! tiles visually fall downward.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_pixels_core as core;
pub use tui_pixels_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb};
pub use game_view::{GameView, SessionView, Viewport};
pub use renderer::TerminalRenderer;
