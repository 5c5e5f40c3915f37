//! Built-in level catalogue

use crate::parse::LevelDef;

struct Builtin {
    name: &'static str,
    width: usize,
    height: usize,
    rows: &'static [&'static str],
}

const BUILTIN: &[Builtin] = &[
    Builtin {
        name: "Example",
        width: 12,
        height: 4,
        rows: &[
            "  #BMH A X  ",
            "  ======== P",
            "  X      ===",
            "   X=       ",
        ],
    },
    // Gravity demo, no apples
    Builtin {
        name: "Slide Right",
        width: 12,
        height: 4,
        rows: &[
            "  BMH       ",
            "  ======== P",
            "         ===",
            "            ",
        ],
    },
    Builtin {
        name: "First Bite",
        width: 11,
        height: 4,
        rows: &[
            " BMH       ",
            "  ======   ",
            "       A  P",
            "       ====",
        ],
    },
    Builtin {
        name: "Staircase",
        width: 10,
        height: 5,
        rows: &[
            " BMH      ",
            "  ==== A  ",
            "      ====",
            "         P",
            "         =",
        ],
    },
    // Apple above; the snake has to climb
    Builtin {
        name: "Up and Over",
        width: 9,
        height: 6,
        rows: &[
            "    A    ",
            "   ===   ",
            "  =====  ",
            " =======P",
            "   HMB  =",
            "   ==    ",
        ],
    },
    Builtin {
        name: "Double Dip",
        width: 11,
        height: 6,
        rows: &[
            "  BMH      ",
            "  =======  ",
            "        A  ",
            "        =  ",
            "    A   =P ",
            "    ======",
        ],
    },
    Builtin {
        name: "The Gap",
        width: 12,
        height: 5,
        rows: &[
            "  BMH       ",
            "  ====      ",
            "         ===",
            "         A P",
            "         ===",
        ],
    },
    Builtin {
        name: "U-Turn",
        width: 11,
        height: 7,
        rows: &[
            " BMH       ",
            "  ======   ",
            "         = ",
            "     A   = ",
            "   =======P",
            "          =",
            "           ",
        ],
    },
    // First box
    Builtin {
        name: "Push It",
        width: 12,
        height: 6,
        rows: &[
            "  BMH      ",
            "  ====     ",
            "       #   ",
            "       =  =",
            "       ===P",
            "          =",
        ],
    },
    Builtin {
        name: "Cascade",
        width: 13,
        height: 7,
        rows: &[
            "  BMH        ",
            "  ======     ",
            "         =   ",
            "       A ====",
            "       ======",
            "     A    ==P",
            "     ========",
        ],
    },
    // Four-segment snake
    Builtin {
        name: "Long Way",
        width: 14,
        height: 8,
        rows: &[
            "  BBMH        ",
            "     ======== ",
            "           =  ",
            "        A  =  ",
            "        ====  ",
            "     A  =  =  ",
            "     =======P ",
            "            = ",
        ],
    },
    Builtin {
        name: "Box Bridge",
        width: 13,
        height: 6,
        rows: &[
            " BMH         ",
            "  =====      ",
            "       =     ",
            "       #  ==P",
            "       =X = =",
            "         X   ",
        ],
    },
    Builtin {
        name: "Zigzag",
        width: 12,
        height: 8,
        rows: &[
            " BMH        ",
            "  =====     ",
            "       =    ",
            "    A  =    ",
            "    ====    ",
            "      =  X= ",
            "    A =====P",
            "    ========",
        ],
    },
];

/// Definitions of the levels shipped with the game, in play order
pub fn builtin() -> Vec<LevelDef> {
    BUILTIN
        .iter()
        .map(|b| LevelDef::new(b.name, b.width, b.height, b.rows))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_level;
    use slither_types::Pos;

    #[test]
    fn test_builtin_catalogue_parses() {
        let defs = builtin();
        assert_eq!(defs.len(), 13);
        for def in &defs {
            let layout = parse_level(def).unwrap();
            assert!(layout.snake.len() >= 3, "{}", def.name);
            assert!(layout.tiles.contains(&slither_types::Tile::Portal), "{}", def.name);
        }
        assert_eq!(defs[0].name, "Example");
        assert_eq!(defs[12].name, "Zigzag");
    }

    #[test]
    fn test_builtin_snakes_occupy_connected_cells() {
        let touching = |a: Pos, b: Pos| (a.x - b.x).abs() + (a.y - b.y).abs() == 1;
        for def in builtin() {
            let layout = parse_level(&def).unwrap();
            for &seg in &layout.snake {
                assert!(
                    layout.snake.iter().any(|&other| touching(seg, other)),
                    "{}",
                    def.name
                );
            }
        }
    }

    #[test]
    fn test_long_way_bodies_in_reading_order() {
        let def = builtin().into_iter().find(|d| d.name == "Long Way").unwrap();
        let layout = parse_level(&def).unwrap();
        assert_eq!(
            layout.snake,
            vec![Pos::new(5, 0), Pos::new(4, 0), Pos::new(2, 0), Pos::new(3, 0)]
        );
    }
}
