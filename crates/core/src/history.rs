//! Undo history - owned value snapshots of the mutable puzzle state

use std::collections::VecDeque;

use crate::board::Board;
use crate::types::Pos;

/// Deep copy of everything a player action can change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub snake: VecDeque<Pos>,
    pub prev_snake: VecDeque<Pos>,
    pub board: Board,
    pub apples: u32,
    pub moves: u32,
}

/// Stack of snapshots, newest last
///
/// Unbounded unless a limit is set; a bounded log forgets its oldest entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UndoLog {
    entries: VecDeque<Snapshot>,
    limit: Option<usize>,
}

impl UndoLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log keeping at most `limit` snapshots (`None` or zero = unbounded)
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: limit.filter(|&l| l > 0),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.push_back(snapshot);
        if let Some(limit) = self.limit {
            while self.entries.len() > limit {
                self.entries.pop_front();
            }
        }
    }

    pub fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop_back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(moves: u32) -> Snapshot {
        Snapshot {
            snake: VecDeque::from(vec![Pos::new(moves as i32, 0)]),
            prev_snake: VecDeque::new(),
            board: Board::new(4, 1).unwrap(),
            apples: 0,
            moves,
        }
    }

    #[test]
    fn test_push_pop_is_lifo() {
        let mut log = UndoLog::new();
        log.push(snap(0));
        log.push(snap(1));
        assert_eq!(log.len(), 2);
        assert_eq!(log.pop().unwrap().moves, 1);
        assert_eq!(log.pop().unwrap().moves, 0);
        assert!(log.pop().is_none());
    }

    #[test]
    fn test_bounded_log_drops_oldest() {
        let mut log = UndoLog::with_limit(Some(2));
        for m in 0..5 {
            log.push(snap(m));
        }
        assert_eq!(log.len(), 2);
        assert_eq!(log.pop().unwrap().moves, 4);
        assert_eq!(log.pop().unwrap().moves, 3);
        assert!(log.is_empty());
    }

    #[test]
    fn test_zero_limit_means_unbounded() {
        let log = UndoLog::with_limit(Some(0));
        assert_eq!(log.limit(), None);
    }
}
