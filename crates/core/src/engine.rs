//! Engine facade - level navigation, progress and action dispatch
//!
//! [`Engine`] owns the level source, the live [`PuzzleState`] and the
//! per-session [`Progress`]. Presentation code talks only to this type.

use crate::config::EngineConfig;
use crate::game_state::PuzzleState;
use crate::level::LevelSource;
use crate::progress::Progress;
use crate::types::{Direction, GameAction};
use crate::view::EngineView;

#[derive(Debug, Clone)]
pub struct Engine<L: LevelSource> {
    levels: L,
    state: PuzzleState,
    level: usize,
    config: EngineConfig,
    progress: Progress,
}

impl<L: LevelSource> Engine<L> {
    /// Create an engine and load the first level when there is one
    pub fn new(levels: L, config: EngineConfig) -> Self {
        let config = config.sanitized();
        let mut engine = Self {
            levels,
            state: PuzzleState::with_history_limit(config.history_limit),
            level: 0,
            config,
            progress: Progress::new(),
        };
        engine.load_level(0);
        engine
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn levels(&self) -> &L {
        &self.levels
    }

    pub fn level_count(&self) -> usize {
        self.levels.level_count()
    }

    pub fn current_level(&self) -> usize {
        self.level
    }

    pub fn level_name(&self) -> &str {
        self.levels.level_name(self.level).unwrap_or("")
    }

    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    pub fn best_stars(&self, level: usize) -> u8 {
        self.progress.best_stars(level)
    }

    pub fn view(&self) -> EngineView<'_> {
        EngineView {
            state: &self.state,
            level_index: self.level,
            level_count: self.level_count(),
            level_name: self.level_name(),
            best_stars: self.best_stars(self.level),
        }
    }

    /// Load level `index` from scratch
    ///
    /// An invalid index leaves both the state and the current level unchanged.
    pub fn load_level(&mut self, index: usize) -> bool {
        if !self.levels.load_level_into(index, &mut self.state) {
            log::debug!("level {index} not loaded");
            return false;
        }
        self.level = index;
        log::info!(
            "loaded level {} {:?} ({}x{}, {} apples)",
            index + 1,
            self.level_name(),
            self.state.width(),
            self.state.height(),
            self.state.apples()
        );
        true
    }

    /// Advance one level, reloading the last level when already there
    pub fn next_level(&mut self) -> bool {
        let last = self.level_count().saturating_sub(1);
        self.load_level((self.level + 1).min(last))
    }

    /// Go back one level, reloading the first level when already there
    pub fn prev_level(&mut self) -> bool {
        self.load_level(self.level.saturating_sub(1))
    }

    pub fn restart_level(&mut self) -> bool {
        self.load_level(self.level)
    }

    /// Move the snake; records progress when the move wins the level
    pub fn try_move(&mut self, dir: Direction) -> bool {
        if !self.state.try_move(dir, &self.config) {
            return false;
        }
        if self.state.won() {
            let stars = self.state.stars();
            let improved = self.progress.record(self.level, stars);
            log::info!(
                "level {} cleared in {} moves, {} stars{}",
                self.level + 1,
                self.state.moves(),
                stars,
                if improved { " (new best)" } else { "" }
            );
        } else if self.state.dead() {
            log::info!(
                "snake died on level {} after {} moves",
                self.level + 1,
                self.state.moves()
            );
        }
        true
    }

    pub fn undo(&mut self) -> bool {
        let undone = self.state.undo();
        if undone {
            log::debug!("undo, {} snapshots left", self.state.history_len());
        }
        undone
    }

    pub fn tick(&mut self, dt: f32) {
        self.state.tick(dt);
    }

    /// Dispatch an abstract action
    ///
    /// While dead only restart is honoured; while won only advancing and
    /// restarting are. `Confirm` does nothing during play.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.state.dead() {
            return match action {
                GameAction::Restart | GameAction::Confirm => self.restart_level(),
                _ => false,
            };
        }
        if self.state.won() {
            return match action {
                GameAction::Confirm | GameAction::NextLevel => self.next_level(),
                GameAction::Restart => self.restart_level(),
                _ => false,
            };
        }
        match action {
            GameAction::Move(dir) => self.try_move(dir),
            GameAction::Undo => self.undo(),
            GameAction::Restart => self.restart_level(),
            GameAction::NextLevel => self.next_level(),
            GameAction::PrevLevel => self.prev_level(),
            GameAction::Confirm => false,
        }
    }
}
