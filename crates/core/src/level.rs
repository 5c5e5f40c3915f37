//! Level layouts and the level source seam.
//!
//! The simulation core never parses level text. It consumes already-built
//! [`LevelLayout`] values through the [`LevelSource`] trait, which the
//! `slither-levels` crate implements for its registry.

use crate::game_state::PuzzleState;
use crate::types::{Pos, Tile};

/// Static description of one level's starting position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelLayout {
    pub name: String,
    pub width: usize,
    pub height: usize,
    /// Row-major terrain, `width * height` entries
    pub tiles: Vec<Tile>,
    /// Snake segments, head first
    pub snake: Vec<Pos>,
}

impl LevelLayout {
    /// Number of apples authored in the layout
    pub fn apple_count(&self) -> usize {
        self.tiles.iter().filter(|&&t| t == Tile::Apple).count()
    }
}

/// Ordered collection of levels the engine can load
pub trait LevelSource {
    fn level_count(&self) -> usize;

    /// Layout for `index`, `None` when out of range
    fn layout(&self, index: usize) -> Option<&LevelLayout>;

    /// Display name for `index`
    fn level_name(&self, index: usize) -> Option<&str> {
        self.layout(index).map(|l| l.name.as_str())
    }

    /// Install level `index` into `state`
    ///
    /// Returns false and leaves `state` untouched when the index is invalid
    /// or the layout cannot be installed.
    fn load_level_into(&self, index: usize, state: &mut PuzzleState) -> bool {
        match self.layout(index) {
            Some(layout) => state.install(layout),
            None => false,
        }
    }
}

impl LevelSource for Vec<LevelLayout> {
    fn level_count(&self) -> usize {
        self.len()
    }

    fn layout(&self, index: usize) -> Option<&LevelLayout> {
        self.get(index)
    }
}

impl LevelSource for [LevelLayout] {
    fn level_count(&self) -> usize {
        self.len()
    }

    fn layout(&self, index: usize) -> Option<&LevelLayout> {
        self.get(index)
    }
}

/// Build a layout from glyph rows for unit tests
///
/// Snake glyphs follow the level format: `H` head, then `M`, then `B`, each in
/// reading order.
#[cfg(test)]
pub(crate) fn layout_from_rows(rows: &[&str]) -> LevelLayout {
    let height = rows.len();
    let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
    let mut tiles = vec![Tile::Empty; width * height];
    let mut head = Vec::new();
    let mut mids = Vec::new();
    let mut body = Vec::new();

    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            let pos = Pos::new(x as i32, y as i32);
            match ch {
                'H' => head.push(pos),
                'M' => mids.push(pos),
                'B' => body.push(pos),
                _ => tiles[y * width + x] = Tile::from_glyph(ch).expect("known glyph"),
            }
        }
    }

    LevelLayout {
        name: "test".to_string(),
        width,
        height,
        tiles,
        snake: head.into_iter().chain(mids).chain(body).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apple_count() {
        let layout = layout_from_rows(&["BMH A A", "======="]);
        assert_eq!(layout.apple_count(), 2);
        assert_eq!(
            layout.snake,
            vec![Pos::new(2, 0), Pos::new(1, 0), Pos::new(0, 0)]
        );
    }

    #[test]
    fn test_vec_source_bounds() {
        let levels = vec![layout_from_rows(&["MH", "=="])];
        assert_eq!(levels.level_count(), 1);
        assert!(levels.layout(0).is_some());
        assert!(levels.layout(1).is_none());
        assert_eq!(levels.level_name(0), Some("test"));

        let mut state = PuzzleState::default();
        assert!(!levels.load_level_into(1, &mut state));
        assert_eq!(state, PuzzleState::default());
        assert!(levels.load_level_into(0, &mut state));
        assert_eq!(state.snake().len(), 2);
    }
}
