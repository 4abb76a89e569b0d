//! Undo stack of full innings snapshots.
//!
//! Each push stores an owned deep copy of the live innings (roster
//! included); popped snapshots are installed wholesale by the caller. Depth
//! is bounded by the number of balls in an innings, which is acceptable at
//! this scale.

use crate::engine::Innings;

/// LIFO stack of complete innings snapshots.
#[derive(Debug, Clone, Default)]
pub struct InningsHistory {
    stack: Vec<Innings>,
}

impl InningsHistory {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Store a snapshot of the current live innings.
    pub fn push(&mut self, innings: &Innings) {
        self.stack.push(innings.clone());
    }

    /// Remove and return the most recent snapshot, if any.
    pub fn pop(&mut self) -> Option<Innings> {
        self.stack.pop()
    }

    /// Drop all snapshots. Invoked on starting a new match.
    pub fn clear(&mut self) {
        self.stack.clear();
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
