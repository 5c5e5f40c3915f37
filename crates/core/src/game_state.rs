//! Game state module - manages the complete puzzle state
//!
//! This module ties together the board, trap mask, snake and undo history.
//! It handles snake movement, box pushing, apple/portal/trap resolution and
//! the cosmetic animation timers. Gravity lives in [`crate::gravity`].

use std::collections::VecDeque;

use crate::board::{Board, CellMask};
use crate::config::EngineConfig;
use crate::gravity;
use crate::history::{Snapshot, UndoLog};
use crate::level::LevelLayout;
use crate::types::*;

/// Complete puzzle state for one loaded level
#[derive(Debug, Clone, PartialEq)]
pub struct PuzzleState {
    pub(crate) board: Board,
    /// Cells authored as traps; never changes after install
    pub(crate) trap_mask: CellMask,
    /// Segments, head first
    pub(crate) snake: VecDeque<Pos>,
    /// Snake before the last move or fall (animation source)
    pub(crate) prev_snake: VecDeque<Pos>,
    pub(crate) apples: u32,
    pub(crate) moves: u32,
    pub(crate) stars: u8,
    pub(crate) last_dir: Option<Direction>,
    pub(crate) won: bool,
    pub(crate) dead: bool,
    /// Slide animation progress, 0.0 right after a move, 1.0 when finished
    pub(crate) move_timer: f32,
    pub(crate) eat_flash: f32,
    pub(crate) fall_shake: f32,
    pub(crate) win_timer: f32,
    pub(crate) dead_timer: f32,
    history: UndoLog,
}

impl Default for PuzzleState {
    fn default() -> Self {
        Self::with_history_limit(None)
    }
}

impl PuzzleState {
    /// Create an empty state (no level installed)
    pub fn with_history_limit(limit: Option<usize>) -> Self {
        Self {
            board: Board::default(),
            trap_mask: CellMask::new(),
            snake: VecDeque::new(),
            prev_snake: VecDeque::new(),
            apples: 0,
            moves: 0,
            stars: 0,
            last_dir: None,
            won: false,
            dead: false,
            move_timer: 1.0,
            eat_flash: 0.0,
            fall_shake: 0.0,
            win_timer: 0.0,
            dead_timer: 0.0,
            history: UndoLog::with_limit(limit),
        }
    }

    /// Reset everything and install a level layout
    ///
    /// Returns false and leaves the state untouched when the layout does not
    /// fit on a board.
    pub fn install(&mut self, layout: &LevelLayout) -> bool {
        let Some(board) = Board::from_tiles(layout.width, layout.height, &layout.tiles) else {
            log::warn!(
                "level {:?} has an unusable {}x{} layout",
                layout.name,
                layout.width,
                layout.height
            );
            return false;
        };

        let mut fresh = Self::with_history_limit(self.history.limit());
        fresh.trap_mask = CellMask::of_tile(&board, Tile::Trap);
        fresh.apples = board.count(Tile::Apple) as u32;
        fresh.board = board;
        fresh.snake = layout.snake.iter().copied().collect();
        fresh.prev_snake = fresh.snake.clone();
        *self = fresh;
        true
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn trap_mask(&self) -> &CellMask {
        &self.trap_mask
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    /// Tile at `pos`, Empty outside the grid
    pub fn tile(&self, pos: Pos) -> Tile {
        self.board.get(pos)
    }

    pub fn snake(&self) -> &VecDeque<Pos> {
        &self.snake
    }

    pub fn head(&self) -> Option<Pos> {
        self.snake.front().copied()
    }

    pub fn prev_snake(&self) -> &VecDeque<Pos> {
        &self.prev_snake
    }

    pub fn apples(&self) -> u32 {
        self.apples
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn stars(&self) -> u8 {
        self.stars
    }

    pub fn last_dir(&self) -> Option<Direction> {
        self.last_dir
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn dead(&self) -> bool {
        self.dead
    }

    /// Won or dead: moves are rejected until the level is reloaded
    pub fn is_terminal(&self) -> bool {
        self.won || self.dead
    }

    pub fn move_timer(&self) -> f32 {
        self.move_timer
    }

    pub fn eat_flash(&self) -> f32 {
        self.eat_flash
    }

    pub fn fall_shake(&self) -> f32 {
        self.fall_shake
    }

    pub fn win_timer(&self) -> f32 {
        self.win_timer
    }

    pub fn dead_timer(&self) -> f32 {
        self.dead_timer
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Whether any snake segment sits on a Trap tile
    pub fn touching_trap(&self) -> bool {
        self.snake.iter().any(|&seg| self.board.get(seg) == Tile::Trap)
    }

    /// Push a deep copy of the mutable state onto the undo history
    pub fn save_snapshot(&mut self) {
        self.history.push(Snapshot {
            snake: self.snake.clone(),
            prev_snake: self.prev_snake.clone(),
            board: self.board.clone(),
            apples: self.apples,
            moves: self.moves,
        });
    }

    /// Restore the most recent snapshot
    ///
    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(snap) = self.history.pop() else {
            return false;
        };

        self.snake = snap.snake;
        self.prev_snake = snap.prev_snake;
        self.board = snap.board;
        self.apples = snap.apples;
        self.moves = snap.moves;

        self.eat_flash = 0.0;
        self.move_timer = 1.0;
        self.won = false;
        self.dead = false;
        self.stars = 0;
        self.win_timer = 0.0;
        self.dead_timer = 0.0;
        // Neutral so the reverse of the undone move is legal again.
        self.last_dir = None;
        true
    }

    /// Advance animation timers; never touches puzzle rules
    pub fn tick(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.move_timer = (self.move_timer + dt * MOVE_ANIM_RATE).min(1.0);
        self.eat_flash = (self.eat_flash - dt * EAT_FLASH_DECAY).max(0.0);
        self.fall_shake = (self.fall_shake - dt * FALL_SHAKE_DECAY).max(0.0);
        if self.won {
            self.win_timer += dt;
        }
        if self.dead {
            self.dead_timer += dt;
        }
    }

    /// Try to move the snake head one cell in `dir`
    ///
    /// Returns true when the move was legal and applied (even if the snake
    /// dies as a result). A rejected move leaves the state untouched.
    pub fn try_move(&mut self, dir: Direction, config: &EngineConfig) -> bool {
        if self.is_terminal() {
            return false;
        }
        let Some(head) = self.head() else {
            return false;
        };
        if config.move_gate > 0.0 && self.move_timer < config.move_gate {
            return false;
        }
        if self.snake.len() > 1 && self.last_dir == Some(dir.reverse()) {
            return false;
        }

        // No bounds check: the playfield extends forever as Empty.
        let dest = head.step(dir);
        let body_len = self.snake.len() - 1;

        match self.board.get(dest) {
            Tile::Floor => return false,
            Tile::Box => {
                let target = dest.step(dir);
                let target_open = matches!(self.board.get(target), Tile::Empty | Tile::Trap);
                if !self.board.in_bounds(target) || !target_open {
                    return false;
                }

                self.save_snapshot();
                self.board.restore(dest, &self.trap_mask);
                self.board.set(target, Tile::Box);
            }
            _ => {
                // The tail is about to vacate its cell.
                if self.snake.iter().take(body_len).any(|&seg| seg == dest) {
                    return false;
                }
                self.save_snapshot();
            }
        }

        self.prev_snake = self.snake.clone();
        self.move_timer = 0.0;
        self.last_dir = Some(dir);
        self.snake.push_front(dest);
        self.moves += 1;
        log::debug!(
            "move {} -> ({}, {}), moves={}",
            dir.as_str(),
            dest.x,
            dest.y,
            self.moves
        );

        match self.board.get(dest) {
            Tile::Apple => {
                // Tail stays: net length +1.
                self.board.set(dest, Tile::Empty);
                self.apples = self.apples.saturating_sub(1);
                self.eat_flash = 1.0;
            }
            Tile::Portal => {
                self.won = true;
                self.stars = MAX_STARS;
                self.snake.pop_back();
            }
            Tile::Trap => {
                self.snake.pop_back();
                self.dead = true;
                return true;
            }
            _ => {
                self.snake.pop_back();
            }
        }

        if !self.is_terminal() && self.touching_trap() {
            self.dead = true;
            return true;
        }

        if !self.is_terminal() {
            gravity::settle(self, config.max_fall_steps);
        }
        true
    }
}
