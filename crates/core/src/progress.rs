//! Best star rating per level, kept in memory for the session

use crate::types::MAX_STARS;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Progress {
    best: Vec<u8>,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Best rating recorded for `level`, 0 when never completed
    pub fn best_stars(&self, level: usize) -> u8 {
        self.best.get(level).copied().unwrap_or(0)
    }

    /// Record a finished attempt; returns true when it beat the previous best
    pub fn record(&mut self, level: usize, stars: u8) -> bool {
        let stars = stars.min(MAX_STARS);
        if stars <= self.best_stars(level) {
            return false;
        }
        if self.best.len() <= level {
            self.best.resize(level + 1, 0);
        }
        self.best[level] = stars;
        true
    }
}
