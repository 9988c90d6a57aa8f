//! Canvas session
//!
//! Owns one grid together with its undo and replay trackers, and records
//! every gesture on both the way a drawing front end would.

use log::info;

use crate::action::PaintAction;
use crate::config::CanvasConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::history::{ReplayStatus, ReplayTracker, UndoTracker};
use crate::layers::Layer;

#[derive(Debug, Clone)]
pub struct CanvasSession {
    grid: Grid,
    undo: UndoTracker,
    replay: ReplayTracker,
}

impl CanvasSession {
    /// Start a session on `grid` with default tracker capacities
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            undo: UndoTracker::default(),
            replay: ReplayTracker::default(),
        }
    }

    pub fn from_config(config: &CanvasConfig) -> Result<Self> {
        Ok(Self {
            grid: Grid::from_config(config)?,
            undo: UndoTracker::new(config.undo_capacity),
            replay: ReplayTracker::new(config.replay_capacity),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn undo_tracker(&self) -> &UndoTracker {
        &self.undo
    }

    pub fn replay_tracker(&self) -> &ReplayTracker {
        &self.replay
    }

    fn record(&mut self, action: PaintAction) {
        if action.is_empty() {
            return;
        }
        self.replay.add_action(action.clone(), false);
        self.undo.add_action(action);
    }

    /// Paint with the brush at `(x, y)`. Returns true if any cell changed.
    pub fn paint(&mut self, x: usize, y: usize, layer: &'static Layer) -> Result<bool> {
        let action = self.grid.paint(x, y, layer)?;
        let changed = !action.is_empty();
        self.record(action);
        Ok(changed)
    }

    /// Erase with the brush at `(x, y)`. Returns true if any cell changed.
    pub fn erase(&mut self, x: usize, y: usize, layer: &'static Layer) -> Result<bool> {
        let action = self.grid.erase(x, y, layer)?;
        let changed = !action.is_empty();
        self.record(action);
        Ok(changed)
    }

    pub fn special(&mut self) {
        let action = PaintAction::special();
        action.apply(&mut self.grid);
        self.record(action);
    }

    pub fn undo(&mut self) -> Option<PaintAction> {
        let action = self.undo.undo(&mut self.grid)?;
        self.replay.add_action(action.clone(), true);
        Some(action)
    }

    pub fn redo(&mut self) -> Option<PaintAction> {
        let action = self.undo.redo(&mut self.grid)?;
        self.replay.add_action(action.clone(), false);
        Some(action)
    }

    /// Wipe the grid and get ready to play every recorded action back
    pub fn start_replay(&mut self) {
        info!(
            "Replaying {} actions on a blank {} grid",
            self.replay.len(),
            self.grid.style()
        );
        self.grid = self.grid.fresh();
        self.replay.start_replay();
    }

    pub fn play_next_action(&mut self) -> ReplayStatus {
        self.replay.play_next_action(&mut self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::DrawStyle;
    use crate::layers::{layer_by_name, Rgb};
    use pretty_assertions::assert_eq;

    const START: Rgb = Rgb::new(50, 50, 50);

    fn layer(name: &str) -> &'static Layer {
        layer_by_name(name).unwrap()
    }

    fn snapshot(grid: &Grid) -> Vec<Rgb> {
        let mut colours = Vec::new();
        for x in 0..grid.width() {
            for y in 0..grid.height() {
                colours.push(grid.color_at(x, y, START, 0).unwrap());
            }
        }
        colours
    }

    #[test]
    fn test_records_on_both_trackers() {
        let mut session = CanvasSession::new(Grid::new(DrawStyle::Set, 4, 4).unwrap());
        assert!(session.paint(1, 1, layer("red")).unwrap());
        assert!(!session.paint(1, 1, layer("red")).unwrap());
        session.special();

        assert_eq!(session.undo_tracker().undo_count(), 2);
        assert_eq!(session.replay_tracker().len(), 2);

        assert!(session.undo().unwrap().is_special());
        assert_eq!(session.replay_tracker().len(), 3);
        assert!(session.redo().is_some());
        assert_eq!(session.replay_tracker().len(), 4);
    }

    #[test]
    fn test_replay_reproduces_final_state() {
        for style in DrawStyle::ALL {
            let mut session = CanvasSession::new(Grid::new(style, 6, 6).unwrap());
            session.paint(2, 2, layer("red")).unwrap();
            session.grid_mut().decrease_brush_size();
            session.paint(3, 3, layer("lighten")).unwrap();
            session.erase(2, 1, layer("red")).unwrap();
            session.undo();
            session.paint(0, 5, layer("blue")).unwrap();
            session.undo();
            session.redo();

            let expected = snapshot(session.grid());
            session.start_replay();
            assert_eq!(snapshot(session.grid()), vec![START; 36]);

            while !session.play_next_action().is_finished() {}
            assert_eq!(snapshot(session.grid()), expected, "style {}", style);
        }
    }

    #[test]
    fn test_from_config() {
        let config = CanvasConfig {
            draw_style: DrawStyle::Sequence,
            width: 3,
            height: 3,
            undo_capacity: 1,
            ..CanvasConfig::default()
        };
        let mut session = CanvasSession::from_config(&config).unwrap();
        session.paint(0, 0, layer("green")).unwrap();
        session.paint(2, 2, layer("blue")).unwrap();
        assert_eq!(session.undo_tracker().undo_count(), 1);
        assert_eq!(session.replay_tracker().len(), 2);
    }
}
