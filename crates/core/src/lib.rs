//! Core puzzle logic - pure, deterministic, and testable
//!
//! This crate contains all the puzzle rules, state management, and simulation logic.
//! It has **no dependencies** on terminals, input devices, or file formats, making it:
//!
//! - **Deterministic**: The same level and move sequence always yields the same state
//! - **Testable**: Unit tests for every rule, plus property tests at the workspace root
//! - **Portable**: Runs headless, in a terminal, or behind any other front end
//! - **Bounded**: Gravity resolution always terminates
//!
//! # Module Structure
//!
//! - [`board`]: Fixed-capacity tile grid plus the per-level trap mask
//! - [`game_state`]: Snake movement, box pushing, tile resolution and timers
//! - [`gravity`]: Support analysis and one-row-per-step falling
//! - [`history`]: Owned undo snapshots
//! - [`engine`]: Level navigation, progress and action dispatch
//! - [`level`]: Level layouts and the [`LevelSource`] seam
//!
//! # Game Rules
//!
//! - **Movement**: The head steps one cell; the body follows. Reversing the last
//!   direction is not allowed while the snake has two or more segments
//! - **Apples**: Eating one grows the snake by a segment
//! - **Boxes**: Pushed one cell when the cell beyond is open; they fall when unsupported
//! - **Traps**: Kill the snake on contact but hold boxes up
//! - **Portal**: Reaching it clears the level
//! - **Gravity**: The snake falls as a rigid body once no segment is supported
//!
//! # Example
//!
//! ```
//! use slither_core::{Engine, EngineConfig, LevelLayout};
//! use slither_core::types::{Direction, Pos, Tile};
//!
//! let mut tiles = vec![Tile::Empty; 8];
//! tiles[3] = Tile::Portal;
//! for t in &mut tiles[4..] {
//!     *t = Tile::Floor;
//! }
//! let level = LevelLayout {
//!     name: "tiny".to_string(),
//!     width: 4,
//!     height: 2,
//!     tiles,
//!     snake: vec![Pos::new(1, 0), Pos::new(0, 0)],
//! };
//!
//! let mut engine = Engine::new(vec![level], EngineConfig::default());
//! assert!(engine.try_move(Direction::Right));
//! assert!(!engine.state().won());
//! assert!(engine.try_move(Direction::Right));
//! assert!(engine.state().won());
//! assert_eq!(engine.best_stars(0), 3);
//! ```
//!
//! # Timing
//!
//! Puzzle rules never depend on time. [`Engine::tick`] only advances the
//! cosmetic timers used for the slide animation, the eat flash and the fall
//! shake. Call it every frame with the elapsed seconds.

pub mod board;
pub mod config;
pub mod engine;
pub mod game_state;
pub mod gravity;
pub mod history;
pub mod level;
pub mod progress;
pub mod view;

pub use slither_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, CellMask};
pub use config::EngineConfig;
pub use engine::Engine;
pub use game_state::PuzzleState;
pub use gravity::{Stability, StepOutcome};
pub use history::{Snapshot, UndoLog};
pub use level::{LevelLayout, LevelSource};
pub use progress::Progress;
pub use view::EngineView;
