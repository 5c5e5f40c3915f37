//! Engine configuration
//!
//! Every field has a default so partial JSON documents deserialize cleanly.

use serde::{Deserialize, Serialize};

use crate::types::{DEFAULT_MOVE_GATE, MAX_FALL_STEPS};

/// Tunables for the simulation engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Move animation progress (0.0 - 1.0) required before the next move is accepted.
    /// 0.0 disables gating so moves apply back to back.
    pub move_gate: f32,
    /// Ceiling on gravity steps resolved after one move
    pub max_fall_steps: usize,
    /// Maximum undo entries kept (`None` = unbounded)
    pub history_limit: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            move_gate: 0.0,
            max_fall_steps: MAX_FALL_STEPS,
            history_limit: None,
        }
    }
}

impl EngineConfig {
    /// Settings for interactive play: moves wait for the slide animation
    pub fn interactive() -> Self {
        Self {
            move_gate: DEFAULT_MOVE_GATE,
            ..Self::default()
        }
    }

    /// Clamp out-of-range values
    pub fn sanitized(mut self) -> Self {
        self.move_gate = if self.move_gate.is_finite() {
            self.move_gate.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.max_fall_steps = self.max_fall_steps.max(1);
        self
    }
}
