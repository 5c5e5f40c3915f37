//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. The puzzle is
//! turn based, so there is no repeat handling: one key press is one action.

pub mod map;

pub use slither_types as types;

pub use map::{handle_key_event, should_quit};
