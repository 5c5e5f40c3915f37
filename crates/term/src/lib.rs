//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget
//! toolkits and renders into a plain framebuffer that is flushed to the
//! terminal with diff-based redraws.
//!
//! - [`fb`]: styled cell framebuffer
//! - [`game_view`]: pure mapping from [`core::EngineView`] to a framebuffer
//! - [`renderer`]: crossterm output (raw mode, alternate screen, diffing)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use slither_core as core;
pub use slither_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
