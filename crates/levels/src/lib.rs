//! Level definitions for the puzzle engine
//!
//! Levels are authored as ASCII rows (see [`parse`] for the glyph table),
//! parsed once into immutable [`LevelLayout`](slither_core::LevelLayout)s and
//! served to the engine through [`LevelRegistry`], which implements
//! [`LevelSource`](slither_core::LevelSource).
//!
//! ```
//! use slither_core::LevelSource;
//! use slither_levels::LevelRegistry;
//!
//! let levels = LevelRegistry::builtin().unwrap();
//! assert_eq!(levels.level_name(0), Some("Example"));
//! ```

pub mod catalogue;
pub mod error;
pub mod parse;
pub mod registry;

pub use catalogue::builtin;
pub use error::LevelError;
pub use parse::{parse_level, LevelDef};
pub use registry::{LevelPack, LevelRegistry};
