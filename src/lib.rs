//! TUI Pixels (workspace facade crate).
//!
//! This package keeps a single `tui_pixels::{core,engine,input,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_pixels_core as core;
pub use tui_pixels_engine as engine;
pub use tui_pixels_input as input;
pub use tui_pixels_term as term;
pub use tui_pixels_types as types;
