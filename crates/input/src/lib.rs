//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::UiAction`] values for the
//! runner. Independent of any rendering concerns; the runner decides what a
//! cursor move or tap means for the current session.

pub mod map;

pub use tui_pixels_types as types;

pub use map::{handle_key_event, should_quit};
