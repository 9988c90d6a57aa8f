//! Paint actions
//!
//! A `PaintAction` is one user gesture: a group of per-cell steps, or a
//! grid-wide special. Actions know how to replay themselves forwards and
//! backwards against a grid; the trackers only sequence them.

use std::fmt;

use uuid::Uuid;

use crate::grid::Grid;
use crate::layers::Layer;
use crate::store::LayerStore;

/// What a step did to its cell when first applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Paint,
    Erase,
}

impl StepKind {
    pub fn inverse(self) -> Self {
        match self {
            StepKind::Paint => StepKind::Erase,
            StepKind::Erase => StepKind::Paint,
        }
    }
}

/// One cell edit within an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintStep {
    pub x: usize,
    pub y: usize,
    pub layer: &'static Layer,
    pub kind: StepKind,
}

impl PaintStep {
    pub fn new(x: usize, y: usize, layer: &'static Layer, kind: StepKind) -> Self {
        Self { x, y, layer, kind }
    }

    fn run(&self, grid: &mut Grid, kind: StepKind) -> bool {
        let Some(cell) = grid.get_mut(self.x, self.y) else {
            return false;
        };
        match kind {
            StepKind::Paint => cell.add(self.layer),
            StepKind::Erase => cell.erase(self.layer),
        }
    }

    /// Perform the step. Returns true if the cell changed.
    pub fn redo_apply(&self, grid: &mut Grid) -> bool {
        self.run(grid, self.kind)
    }

    /// Perform the opposite of the step. Returns true if the cell changed.
    pub fn undo_apply(&self, grid: &mut Grid) -> bool {
        self.run(grid, self.kind.inverse())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintAction {
    id: Uuid,
    steps: Vec<PaintStep>,
    is_special: bool,
}

impl PaintAction {
    /// An action made of cell edits
    pub fn new(steps: Vec<PaintStep>) -> Self {
        Self {
            id: Uuid::new_v4(),
            steps,
            is_special: false,
        }
    }

    /// A grid-wide special action
    pub fn special() -> Self {
        Self {
            id: Uuid::new_v4(),
            steps: Vec::new(),
            is_special: true,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn steps(&self) -> &[PaintStep] {
        &self.steps
    }

    pub fn is_special(&self) -> bool {
        self.is_special
    }

    /// True if applying this action would do nothing
    pub fn is_empty(&self) -> bool {
        !self.is_special && self.steps.is_empty()
    }

    /// First application of the action
    pub fn apply(&self, grid: &mut Grid) {
        self.redo_apply(grid);
    }

    pub fn redo_apply(&self, grid: &mut Grid) {
        if self.is_special {
            grid.special();
        }
        for step in &self.steps {
            step.redo_apply(grid);
        }
    }

    /// Steps are reverted newest first.
    ///
    /// Specials are re-run: exact for SET and ADD grids, while on a SEQUENCE
    /// grid it removes another median layer.
    pub fn undo_apply(&self, grid: &mut Grid) {
        if self.is_special {
            grid.special();
        }
        for step in self.steps.iter().rev() {
            step.undo_apply(grid);
        }
    }
}

impl fmt::Display for PaintAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_special {
            write!(f, "special [{}]", self.id)
        } else {
            write!(f, "{} steps [{}]", self.steps.len(), self.id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::DrawStyle;
    use crate::layers::{layer_by_name, Rgb};

    fn layer(name: &str) -> &'static Layer {
        layer_by_name(name).unwrap()
    }

    const START: Rgb = Rgb::new(50, 50, 50);

    #[test]
    fn test_step_inverse() {
        let mut grid = Grid::new(DrawStyle::Sequence, 2, 2).unwrap();
        let step = PaintStep::new(1, 0, layer("blue"), StepKind::Paint);
        assert!(step.redo_apply(&mut grid));
        assert!(!step.redo_apply(&mut grid));
        assert!(step.undo_apply(&mut grid));
        assert_eq!(grid.color_at(1, 0, START, 0).unwrap(), START);
    }

    #[test]
    fn test_step_outside_grid_is_noop() {
        let mut grid = Grid::new(DrawStyle::Set, 2, 2).unwrap();
        let step = PaintStep::new(5, 5, layer("blue"), StepKind::Paint);
        assert!(!step.redo_apply(&mut grid));
    }

    #[test]
    fn test_action_undo_redo() {
        let mut grid = Grid::new(DrawStyle::Add, 3, 3).unwrap();
        let action = grid.paint(1, 1, layer("red")).unwrap();
        assert_eq!(grid.color_at(1, 1, START, 0).unwrap(), Rgb::new(255, 0, 0));

        action.undo_apply(&mut grid);
        assert_eq!(grid.color_at(1, 1, START, 0).unwrap(), START);
        assert_eq!(grid.color_at(0, 1, START, 0).unwrap(), START);

        action.redo_apply(&mut grid);
        assert_eq!(grid.color_at(0, 1, START, 0).unwrap(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_special_action() {
        let mut grid = Grid::new(DrawStyle::Set, 2, 1).unwrap();
        let action = PaintAction::special();
        assert!(action.is_special());
        assert!(!action.is_empty());

        action.apply(&mut grid);
        assert_eq!(grid.color_at(0, 0, START, 0).unwrap(), Rgb::new(205, 205, 205));
        action.undo_apply(&mut grid);
        assert_eq!(grid.color_at(0, 0, START, 0).unwrap(), START);
    }

    #[test]
    fn test_actions_have_distinct_ids() {
        let a = PaintAction::new(Vec::new());
        let b = PaintAction::new(Vec::new());
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
        assert!(a.is_empty());
        assert!(a.to_string().starts_with("0 steps"));
    }
}
