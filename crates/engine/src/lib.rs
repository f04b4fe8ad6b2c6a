//! Turn resolution engine.
//!
//! This crate drives a game session on top of the core board: it accepts tap
//! events, runs the fall simulation to find the landing coordinate, marks it
//! colored, and finalizes the score once the game ends. The session is a
//! strict Idle -> Resolving -> (Idle | GameOver) state machine; the resolver
//! is the sole owner and mutator of its board.
//!
//! Outbound notifications go through [`EventSink`], passed in by the caller on
//! each tap. The engine holds no reference to its collaborator.

pub mod resolver;

pub use tui_pixels_core as core;
pub use tui_pixels_types as types;

pub use resolver::{EventSink, NullSink, Phase, TapOutcome, TurnResolver};
