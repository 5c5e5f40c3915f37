//! Gravity module - settles boxes and the snake after every accepted move
//!
//! Each gravity step first works out which objects are supported, then drops
//! every unsupported object by exactly one row.
//!
//! # Support rules
//!
//! | Tile below | Snake | Box |
//! |------------|-------|-----|
//! | Floor, Apple, Portal | supported | supported |
//! | Trap | **falls in** | supported (boxes bridge traps) |
//! | Box | only if that box is stable | only if that box is stable |
//! | Snake segment | never | only if the snake is stable |
//! | Empty | falls | falls |
//!
//! The snake is a rigid body: one supported segment holds the whole snake.
//! Stability is a fixed point: scans repeat until nothing new becomes stable,
//! so a box resting on a box resting on the snake is found regardless of scan order.

use std::collections::VecDeque;

use crate::board::{Board, CellMask};
use crate::game_state::PuzzleState;
use crate::types::{Pos, Tile};

/// Result of the stability analysis for one gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stability {
    pub snake_stable: bool,
    pub stable_boxes: CellMask,
    /// Boxes that will fall this step
    pub unstable_boxes: usize,
}

impl Stability {
    /// Nothing moves this step
    pub fn is_settled(&self) -> bool {
        self.snake_stable && self.unstable_boxes == 0
    }
}

/// What a single gravity step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Everything is supported; nothing moved
    Settled,
    /// At least one object dropped one row
    Fell,
    /// The snake dropped out of the bottom of the grid
    SnakeLost,
    /// The snake fell onto a trap
    SnakeTrapped,
}

/// Work out which objects are supported
pub fn analyze(board: &Board, snake: &VecDeque<Pos>) -> Stability {
    let mut stable_boxes = CellMask::new();
    let mut snake_stable = snake.is_empty();
    let boxes: Vec<Pos> = board.positions_of(Tile::Box).collect();

    let mut changed = true;
    while changed {
        changed = false;

        if !snake_stable
            && snake
                .iter()
                .any(|seg| supports_snake(board, &stable_boxes, seg.below()))
        {
            snake_stable = true;
            changed = true;
        }

        for &pos in &boxes {
            if stable_boxes.contains(pos) {
                continue;
            }
            let below = pos.below();
            let on_stable = supports_box(board, &stable_boxes, below)
                || (snake_stable && snake.contains(&below));
            if on_stable {
                stable_boxes.insert(pos);
                changed = true;
            }
        }
    }

    Stability {
        snake_stable,
        stable_boxes,
        unstable_boxes: boxes.len() - stable_boxes.len(),
    }
}

fn supports_snake(board: &Board, stable_boxes: &CellMask, below: Pos) -> bool {
    match board.get(below) {
        Tile::Floor | Tile::Apple | Tile::Portal => true,
        Tile::Box => stable_boxes.contains(below),
        // The snake drops into traps rather than standing on them.
        Tile::Trap | Tile::Empty => false,
    }
}

fn supports_box(board: &Board, stable_boxes: &CellMask, below: Pos) -> bool {
    match board.get(below) {
        Tile::Floor | Tile::Apple | Tile::Portal | Tile::Trap => true,
        Tile::Box => stable_boxes.contains(below),
        Tile::Empty => false,
    }
}

/// Run one gravity step on `state`
pub fn step(state: &mut PuzzleState) -> StepOutcome {
    let stability = analyze(&state.board, &state.snake);
    if stability.is_settled() {
        return StepOutcome::Settled;
    }

    let height = state.board.height() as i32;
    if !stability.snake_stable && state.snake.iter().any(|seg| seg.y + 1 >= height) {
        state.dead = true;
        return StepOutcome::SnakeLost;
    }

    if stability.unstable_boxes > 0 {
        // Bottom row first so a falling box never lands on one not yet moved.
        let width = state.board.width() as i32;
        for y in (0..height).rev() {
            for x in 0..width {
                let pos = Pos::new(x, y);
                if state.board.get(pos) != Tile::Box || stability.stable_boxes.contains(pos) {
                    continue;
                }
                state.board.restore(pos, &state.trap_mask);
                // Boxes leaving the grid vanish.
                state.board.set(pos.below(), Tile::Box);
                state.fall_shake = 1.0;
            }
        }
    }

    if !stability.snake_stable {
        state.prev_snake = state.snake.clone();
        state.move_timer = 0.0;
        for seg in state.snake.iter_mut() {
            seg.y += 1;
        }
        state.fall_shake = 1.0;
    }

    if state.touching_trap() {
        state.dead = true;
        return StepOutcome::SnakeTrapped;
    }

    StepOutcome::Fell
}

/// Repeat gravity steps until equilibrium, death, or `max_steps`
///
/// Returns the number of steps in which something fell or the snake died.
pub fn settle(state: &mut PuzzleState, max_steps: usize) -> usize {
    for taken in 0..max_steps {
        if state.won || state.dead {
            return taken;
        }
        match step(state) {
            StepOutcome::Settled => return taken,
            StepOutcome::Fell => {
                log::debug!("gravity step {} applied", taken + 1);
            }
            StepOutcome::SnakeLost => {
                log::info!("snake fell out of the level");
                return taken + 1;
            }
            StepOutcome::SnakeTrapped => {
                log::info!("snake fell onto a trap");
                return taken + 1;
            }
        }
    }
    log::warn!("gravity still unsettled after {max_steps} steps, giving up");
    max_steps
}
