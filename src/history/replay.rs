//! Replay tracking
//!
//! Records every action in the order it happened, flagged as forward or
//! undo, and plays them back one at a time.

use log::{debug, warn};

use crate::action::PaintAction;
use crate::collections::BoundedQueue;
use crate::grid::Grid;

use super::DEFAULT_HISTORY_CAPACITY;

/// Outcome of a single replay step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayStatus {
    /// An action was played; more may remain
    Played,
    /// Nothing was left to play
    Finished,
}

impl ReplayStatus {
    pub fn is_finished(self) -> bool {
        self == ReplayStatus::Finished
    }
}

#[derive(Debug, Clone)]
pub struct ReplayTracker {
    queue: BoundedQueue<(PaintAction, bool)>,
    replaying: bool,
}

impl Default for ReplayTracker {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl ReplayTracker {
    pub fn new(max_capacity: usize) -> Self {
        Self {
            queue: BoundedQueue::new(max_capacity),
            replaying: false,
        }
    }

    /// Switch from recording to playback
    pub fn start_replay(&mut self) {
        debug!("Starting replay of {} actions", self.queue.len());
        self.replaying = true;
    }

    pub fn is_replaying(&self) -> bool {
        self.replaying
    }

    /// Record an action. `is_undo` marks actions that were undone rather
    /// than performed or redone. Dropped when the queue is full.
    pub fn add_action(&mut self, action: PaintAction, is_undo: bool) {
        if !self.queue.push_back((action, is_undo)) {
            warn!(
                "Replay queue full ({} actions), action not recorded",
                self.queue.capacity()
            );
        }
    }

    /// Play the oldest recorded action on `grid`
    pub fn play_next_action(&mut self, grid: &mut Grid) -> ReplayStatus {
        let Some((action, is_undo)) = self.queue.pop_front() else {
            return ReplayStatus::Finished;
        };
        if is_undo {
            action.undo_apply(grid);
        } else {
            action.redo_apply(grid);
        }
        debug!("Replayed {}{}", if is_undo { "undo of " } else { "" }, action);
        ReplayStatus::Played
    }

    /// Actions still waiting to be played
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
