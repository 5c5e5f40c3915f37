//! Slither (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, integration
//! tests and benchmarks can use `slither::{core, levels, term, input, types}`.

pub use slither_core as core;
pub use slither_input as input;
pub use slither_levels as levels;
pub use slither_term as term;
pub use slither_types as types;
