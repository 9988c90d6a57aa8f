//! History Module
//!
//! Undo/redo stacks and the replay queue. Both are bounded and silently
//! refuse actions once full.

mod replay;
mod undo;

pub use replay::{ReplayStatus, ReplayTracker};
pub use undo::UndoTracker;

/// Default number of actions each tracker can hold
pub const DEFAULT_HISTORY_CAPACITY: usize = 10000;
