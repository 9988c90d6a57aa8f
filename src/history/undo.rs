//! Undo/Redo tracking
//!
//! Two bounded stacks of paint actions. Undoing moves an action from the
//! undo stack to the redo stack after reverting it on the grid; redoing
//! moves it back.

use log::{debug, warn};

use crate::action::PaintAction;
use crate::collections::BoundedStack;
use crate::grid::Grid;

use super::DEFAULT_HISTORY_CAPACITY;

#[derive(Debug, Clone)]
pub struct UndoTracker {
    undo_stack: BoundedStack<PaintAction>,
    redo_stack: BoundedStack<PaintAction>,
}

impl Default for UndoTracker {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl UndoTracker {
    pub fn new(max_capacity: usize) -> Self {
        Self {
            undo_stack: BoundedStack::new(max_capacity),
            redo_stack: BoundedStack::new(max_capacity),
        }
    }

    /// Record a performed action.
    ///
    /// Dropped when the undo stack is full. The redo stack is left alone.
    pub fn add_action(&mut self, action: PaintAction) {
        if !self.undo_stack.push(action) {
            warn!(
                "Undo history full ({} actions), action not recorded",
                self.undo_stack.capacity()
            );
        }
    }

    /// Revert the most recent action on `grid`.
    ///
    /// Returns the undone action, or `None` if there was nothing to undo.
    pub fn undo(&mut self, grid: &mut Grid) -> Option<PaintAction> {
        let action = self.undo_stack.pop()?;
        action.undo_apply(grid);
        debug!("Undone: {}", action);

        self.redo_stack.push(action.clone());
        Some(action)
    }

    /// Re-apply the most recently undone action on `grid`.
    ///
    /// Returns the redone action, or `None` if there was nothing to redo.
    pub fn redo(&mut self, grid: &mut Grid) -> Option<PaintAction> {
        let action = self.redo_stack.pop()?;
        action.redo_apply(grid);
        debug!("Redone: {}", action);

        self.undo_stack.push(action.clone());
        Some(action)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn peek_undo(&self) -> Option<&PaintAction> {
        self.undo_stack.peek()
    }

    pub fn peek_redo(&self) -> Option<&PaintAction> {
        self.redo_stack.peek()
    }
}
