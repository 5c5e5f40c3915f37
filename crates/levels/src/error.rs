use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while reading or parsing level definitions
#[derive(Debug, Error)]
pub enum LevelError {
    /// Width or height is zero or larger than the board can hold.
    #[error("level {name:?}: size {width}x{height} is outside 1..={max}")]
    InvalidSize {
        name: String,
        width: usize,
        height: usize,
        max: usize,
    },

    /// More rows were given than the declared height.
    #[error("level {name:?}: {rows} rows given but height is {height}")]
    TooManyRows {
        name: String,
        rows: usize,
        height: usize,
    },

    /// A row is wider than the declared width.
    #[error("level {name:?}: row {row} is {len} cells wide but width is {width}")]
    RowTooLong {
        name: String,
        row: usize,
        len: usize,
        width: usize,
    },

    #[error("level {name:?}: unknown glyph {glyph:?} at ({x}, {y})")]
    UnknownGlyph {
        name: String,
        glyph: char,
        x: usize,
        y: usize,
    },

    #[error("level {name:?}: no snake head ('H')")]
    MissingHead { name: String },

    #[error("level {name:?}: {count} snake heads, expected exactly one")]
    MultipleHeads { name: String, count: usize },

    #[error("failed to read level pack {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid level pack JSON")]
    Json(#[from] serde_json::Error),
}
