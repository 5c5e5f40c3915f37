//! Board module - manages the puzzle grid
//!
//! The board is a `width x height` grid (at most 24x24) where each cell holds a [`Tile`].
//! Uses fixed-capacity storage so history snapshots clone without reallocating the cell array.
//! Coordinates: (x, y) where x grows to the right and y grows downwards.
//! Any coordinate outside the board reads as [`Tile::Empty`]; writes outside it are ignored.

use arrayvec::ArrayVec;

use crate::types::{Pos, Tile, MAX_CELLS, MAX_GRID};

/// The puzzle board using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: ArrayVec<Tile, MAX_CELLS>,
}

impl Board {
    /// Create an empty board
    ///
    /// Returns `None` when either dimension is zero or larger than [`MAX_GRID`].
    pub fn new(width: usize, height: usize) -> Option<Self> {
        if !Self::fits(width, height) {
            return None;
        }
        let mut cells = ArrayVec::new();
        cells.extend(std::iter::repeat(Tile::Empty).take(width * height));
        Some(Self {
            width,
            height,
            cells,
        })
    }

    /// Create a board from row-major tiles
    ///
    /// Returns `None` when the dimensions are out of range or `tiles` has the wrong length.
    pub fn from_tiles(width: usize, height: usize, tiles: &[Tile]) -> Option<Self> {
        if !Self::fits(width, height) || tiles.len() != width * height {
            return None;
        }
        let mut cells = ArrayVec::new();
        cells.try_extend_from_slice(tiles).ok()?;
        Some(Self {
            width,
            height,
            cells,
        })
    }

    fn fits(width: usize, height: usize) -> bool {
        width > 0 && height > 0 && width <= MAX_GRID && height <= MAX_GRID
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(&self, pos: Pos) -> Option<usize> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some((pos.y as usize) * self.width + (pos.x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if a position lies inside the defined grid
    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Tile at `pos`, [`Tile::Empty`] outside the grid
    pub fn get(&self, pos: Pos) -> Tile {
        self.index(pos).map_or(Tile::Empty, |idx| self.cells[idx])
    }

    /// Set tile at `pos`
    /// Returns false if out of bounds
    pub fn set(&mut self, pos: Pos, tile: Tile) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = tile;
                true
            }
            None => false,
        }
    }

    /// Revert a cell a box is leaving: Trap when authored as a trap, Empty otherwise
    pub fn restore(&mut self, pos: Pos, traps: &CellMask) {
        let tile = if traps.contains(pos) {
            Tile::Trap
        } else {
            Tile::Empty
        };
        self.set(pos, tile);
    }

    /// Number of cells holding `tile`
    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|&&t| t == tile).count()
    }

    /// Positions holding `tile`, in reading order
    pub fn positions_of(&self, tile: Tile) -> impl Iterator<Item = Pos> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, t)| **t == tile)
            .map(move |(i, _)| Pos::new((i % width) as i32, (i / width) as i32))
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }
}

/// Set of board cells stored as one bitmask per row
///
/// Used for the permanent trap mask and for per-step stability marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellMask {
    rows: [u32; MAX_GRID],
}

impl CellMask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mask of every cell on `board` holding `tile`
    pub fn of_tile(board: &Board, tile: Tile) -> Self {
        let mut mask = Self::new();
        for pos in board.positions_of(tile) {
            mask.insert(pos);
        }
        mask
    }

    #[inline(always)]
    fn slot(pos: Pos) -> Option<(usize, u32)> {
        if pos.x < 0 || pos.y < 0 || pos.x as usize >= MAX_GRID || pos.y as usize >= MAX_GRID {
            return None;
        }
        Some((pos.y as usize, 1u32 << pos.x))
    }

    pub fn contains(&self, pos: Pos) -> bool {
        Self::slot(pos).is_some_and(|(row, bit)| self.rows[row] & bit != 0)
    }

    /// Add a cell; positions outside the maximum grid are ignored
    pub fn insert(&mut self, pos: Pos) {
        if let Some((row, bit)) = Self::slot(pos) {
            self.rows[row] |= bit;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|&r| r == 0)
    }

    pub fn len(&self) -> usize {
        self.rows.iter().map(|r| r.count_ones() as usize).sum()
    }
}
