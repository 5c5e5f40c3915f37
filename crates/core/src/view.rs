//! Read-only bundle handed to presentation code each frame

use crate::game_state::PuzzleState;

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct EngineView<'a> {
    pub state: &'a PuzzleState,
    pub level_index: usize,
    pub level_count: usize,
    pub level_name: &'a str,
    /// Best rating for the current level
    pub best_stars: u8,
}

impl EngineView<'_> {
    /// One-based level number for display
    pub fn level_number(&self) -> usize {
        self.level_index + 1
    }

    pub fn is_last_level(&self) -> bool {
        self.level_index + 1 >= self.level_count
    }
}
