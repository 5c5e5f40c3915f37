//! ASCII level parser
//!
//! | Glyph | Meaning |
//! |-------|---------|
//! | ` ` `.` | Empty |
//! | `=` | Floor |
//! | `A` | Apple |
//! | `P` | Portal |
//! | `#` | Box |
//! | `X` | Trap |
//! | `H` | Snake head |
//! | `M` | Snake mid segment |
//! | `B` | Snake body / tail segment |
//!
//! Rows shorter than the width are padded with Empty, and missing rows are Empty.

use serde::{Deserialize, Serialize};
use slither_core::LevelLayout;
use slither_types::{Pos, Tile, MAX_GRID};

use crate::error::LevelError;

/// Level as authored: a name, its size and glyph rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDef {
    pub name: String,
    pub width: usize,
    pub height: usize,
    pub rows: Vec<String>,
}

impl LevelDef {
    pub fn new(name: &str, width: usize, height: usize, rows: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            width,
            height,
            rows: rows.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// Parse a definition into a layout the engine can install
pub fn parse_level(def: &LevelDef) -> Result<LevelLayout, LevelError> {
    let name = &def.name;
    let (width, height) = (def.width, def.height);
    if width == 0 || height == 0 || width > MAX_GRID || height > MAX_GRID {
        return Err(LevelError::InvalidSize {
            name: name.clone(),
            width,
            height,
            max: MAX_GRID,
        });
    }
    if def.rows.len() > height {
        return Err(LevelError::TooManyRows {
            name: name.clone(),
            rows: def.rows.len(),
            height,
        });
    }

    let mut tiles = vec![Tile::Empty; width * height];
    let mut heads = Vec::new();
    let mut mids = Vec::new();
    let mut bodies = Vec::new();

    for (y, row) in def.rows.iter().enumerate() {
        let len = row.chars().count();
        if len > width {
            return Err(LevelError::RowTooLong {
                name: name.clone(),
                row: y,
                len,
                width,
            });
        }
        for (x, glyph) in row.chars().enumerate() {
            let pos = Pos::new(x as i32, y as i32);
            match glyph {
                'H' => heads.push(pos),
                'M' => mids.push(pos),
                'B' => bodies.push(pos),
                _ => match Tile::from_glyph(glyph) {
                    Some(tile) => tiles[y * width + x] = tile,
                    None => {
                        return Err(LevelError::UnknownGlyph {
                            name: name.clone(),
                            glyph,
                            x,
                            y,
                        })
                    }
                },
            }
        }
    }

    let head = match heads.as_slice() {
        [] => return Err(LevelError::MissingHead { name: name.clone() }),
        [head] => *head,
        _ => {
            return Err(LevelError::MultipleHeads {
                name: name.clone(),
                count: heads.len(),
            })
        }
    };

    // Head, then every M, then every B, each group in reading order.
    let snake: Vec<Pos> = std::iter::once(head).chain(mids).chain(bodies).collect();

    Ok(LevelLayout {
        name: name.clone(),
        width,
        height,
        tiles,
        snake,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(rows: &[&str]) -> LevelDef {
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        LevelDef::new("t", width, rows.len(), rows)
    }

    #[test]
    fn test_parse_basic() {
        let layout = parse_level(&def(&["BMH A P", "=======", "  # X  "])).unwrap();
        assert_eq!((layout.width, layout.height), (7, 3));
        assert_eq!(
            layout.snake,
            vec![Pos::new(2, 0), Pos::new(1, 0), Pos::new(0, 0)]
        );
        assert_eq!(layout.apple_count(), 1);
        assert_eq!(layout.tiles[4], Tile::Apple);
        assert_eq!(layout.tiles[6], Tile::Portal);
        assert_eq!(layout.tiles[7], Tile::Floor);
        assert_eq!(layout.tiles[14 + 2], Tile::Box);
        assert_eq!(layout.tiles[14 + 4], Tile::Trap);
        // Snake cells are Empty terrain.
        assert_eq!(layout.tiles[0], Tile::Empty);
    }

    #[test]
    fn test_short_and_missing_rows_are_empty() {
        let d = LevelDef::new("t", 5, 3, &["MH", ".="]);
        let layout = parse_level(&d).unwrap();
        assert_eq!(layout.tiles.len(), 15);
        assert_eq!(layout.tiles[6], Tile::Floor);
        assert!(layout.tiles[10..].iter().all(|&t| t == Tile::Empty));
    }

    #[test]
    fn test_head_left_of_body() {
        let layout = parse_level(&def(&["HMB", "==="])).unwrap();
        assert_eq!(
            layout.snake,
            vec![Pos::new(0, 0), Pos::new(1, 0), Pos::new(2, 0)]
        );
    }

    #[test]
    fn test_multiple_bodies_keep_reading_order() {
        let layout = parse_level(&def(&["BBMH", "===="])).unwrap();
        assert_eq!(
            layout.snake,
            vec![Pos::new(3, 0), Pos::new(2, 0), Pos::new(0, 0), Pos::new(1, 0)]
        );
    }

    #[test]
    fn test_vertical_snake() {
        let layout = parse_level(&def(&["B ", "M ", "H=", "=="])).unwrap();
        assert_eq!(
            layout.snake,
            vec![Pos::new(0, 2), Pos::new(0, 1), Pos::new(0, 0)]
        );
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            parse_level(&LevelDef::new("t", 0, 3, &[])),
            Err(LevelError::InvalidSize { .. })
        ));
        assert!(matches!(
            parse_level(&LevelDef::new("t", 25, 3, &["H"])),
            Err(LevelError::InvalidSize { .. })
        ));
        assert!(matches!(
            parse_level(&LevelDef::new("t", 3, 1, &["H", "="])),
            Err(LevelError::TooManyRows { rows: 2, .. })
        ));
        assert!(matches!(
            parse_level(&LevelDef::new("t", 2, 1, &["H=="])),
            Err(LevelError::RowTooLong { row: 0, len: 3, .. })
        ));
        assert!(matches!(
            parse_level(&def(&["H?"])),
            Err(LevelError::UnknownGlyph { glyph: '?', x: 1, y: 0, .. })
        ));
        assert!(matches!(
            parse_level(&def(&["BM="])),
            Err(LevelError::MissingHead { .. })
        ));
        assert!(matches!(
            parse_level(&def(&["HH="])),
            Err(LevelError::MultipleHeads { count: 2, .. })
        ));
    }

    #[test]
    fn test_error_messages_name_the_level() {
        let err = parse_level(&LevelDef::new("Broken", 2, 1, &["H?"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "level \"Broken\": unknown glyph '?' at (1, 0)"
        );
    }
}
