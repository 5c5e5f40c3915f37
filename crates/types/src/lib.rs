//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation core, level parsing, terminal rendering).
//!
//! # Grid
//!
//! Boards are at most [`MAX_GRID`] cells on each axis. Coordinates are `(x, y)`
//! with `x` growing to the right and `y` growing downwards, so gravity pulls
//! towards larger `y`. Anything outside the board reads as [`Tile::Empty`].
//!
//! # Timing Constants
//!
//! The simulation itself is turn based; timers only drive animation.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval used by the terminal loop (~60 FPS) |
//! | `MOVE_ANIM_RATE` | 6.5 | Move animation progress per second (~0.15s per tile) |
//! | `EAT_FLASH_DECAY` | 3.5 | Eat flash decay per second |
//! | `FALL_SHAKE_DECAY` | 5.0 | Fall shake decay per second |
//! | `DEFAULT_MOVE_GATE` | 0.85 | Animation progress required before the next move |
//!
//! # Examples
//!
//! ```
//! use slither_types::{Direction, GameAction, Pos, Tile};
//!
//! let head = Pos::new(2, 0);
//! assert_eq!(head.step(Direction::Right), Pos::new(3, 0));
//! assert_eq!(Direction::Up.reverse(), Direction::Down);
//!
//! assert_eq!(Tile::from_glyph('='), Some(Tile::Floor));
//! assert_eq!(GameAction::Move(Direction::Left).as_str(), "moveLeft");
//! ```

/// Maximum board dimension on either axis (24 cells)
pub const MAX_GRID: usize = 24;

/// Maximum number of cells a board can hold
pub const MAX_CELLS: usize = MAX_GRID * MAX_GRID;

/// Hard ceiling on gravity steps resolved after a single move
pub const MAX_FALL_STEPS: usize = 256;

/// Star rating awarded for reaching a portal
pub const MAX_STARS: u8 = 3;

/// Frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Move animation progress gained per second
pub const MOVE_ANIM_RATE: f32 = 6.5;

/// Eat flash intensity lost per second
pub const EAT_FLASH_DECAY: f32 = 3.5;

/// Fall shake intensity lost per second
pub const FALL_SHAKE_DECAY: f32 = 5.0;

/// Move animation progress a player move has to wait for when gating is on
pub const DEFAULT_MOVE_GATE: f32 = 0.85;


/// One cell's terrain or object
///
/// - **Empty**: open air; out-of-bounds cells also read as Empty
/// - **Floor**: solid, impassable
/// - **Apple**: collectible, grows the snake by one segment
/// - **Portal**: level exit
/// - **Box**: pushable, affected by gravity
/// - **Trap**: lethal to the snake, solid ground for boxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Empty,
    Floor,
    Apple,
    Portal,
    Box,
    Trap,
}

impl Tile {
    /// Parse a terrain glyph from the ASCII level format
    ///
    /// Snake glyphs (`H`, `M`, `B`) are not terrain and return `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use slither_types::Tile;
    ///
    /// assert_eq!(Tile::from_glyph('#'), Some(Tile::Box));
    /// assert_eq!(Tile::from_glyph('X'), Some(Tile::Trap));
    /// assert_eq!(Tile::from_glyph(' '), Some(Tile::Empty));
    /// assert_eq!(Tile::from_glyph('H'), None);
    /// ```
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            ' ' | '.' => Some(Tile::Empty),
            '=' => Some(Tile::Floor),
            'A' => Some(Tile::Apple),
            'P' => Some(Tile::Portal),
            '#' => Some(Tile::Box),
            'X' => Some(Tile::Trap),
            _ => None,
        }
    }

    /// Glyph used by the ASCII level format
    pub fn glyph(&self) -> char {
        match self {
            Tile::Empty => ' ',
            Tile::Floor => '=',
            Tile::Apple => 'A',
            Tile::Portal => 'P',
            Tile::Box => '#',
            Tile::Trap => 'X',
        }
    }
}

/// The four movement directions
///
/// `Up` points towards smaller `y`; gravity pulls `Down`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in a stable order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector `(dx, dy)`
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Opposite direction
    pub fn reverse(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Integer grid coordinate
///
/// Coordinates may lie outside the board: the playfield is conceptually
/// infinite and only the defined rectangle carries tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Neighbour one cell away in `dir`
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Cell directly underneath
    pub fn below(self) -> Self {
        self.step(Direction::Down)
    }
}

/// Game actions that can be applied to the engine
///
/// These actions are produced by the input layer and consumed by
/// `slither_core::Engine::apply_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the snake head one cell
    Move(Direction),
    /// Revert the last committed move
    Undo,
    /// Reload the current level
    Restart,
    /// Advance to the next level
    NextLevel,
    /// Go back to the previous level
    PrevLevel,
    /// Context action: next level after a win, restart after a death
    Confirm,
}

impl GameAction {
    /// camelCase name, used in log lines
    ///
    /// # Examples
    ///
    /// ```
    /// use slither_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::Move(Direction::Up).as_str(), "moveUp");
    /// assert_eq!(GameAction::NextLevel.as_str(), "nextLevel");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Undo => "undo",
            GameAction::Restart => "restart",
            GameAction::NextLevel => "nextLevel",
            GameAction::PrevLevel => "prevLevel",
            GameAction::Confirm => "confirm",
        }
    }
}
