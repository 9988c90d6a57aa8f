//! Paint Grid
//!
//! A `width x height` array of cell stores sharing one draw style, plus the
//! brush size used by strokes. Cells are addressed as `(x, y)`.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::action::{PaintAction, PaintStep, StepKind};
use crate::config::CanvasConfig;
use crate::error::{CanvasError, Result};
use crate::layers::{get_layers, Layer, Rgb};
use crate::store::{
    AdditiveLayerStore, LayerStore, SequenceLayerStore, SetLayerStore, Store,
    DEFAULT_ADDITIVE_CAPACITY,
};

/// How colours combine on every cell of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DrawStyle {
    #[default]
    Set,
    Add,
    Sequence,
}

impl DrawStyle {
    pub const ALL: [DrawStyle; 3] = [DrawStyle::Set, DrawStyle::Add, DrawStyle::Sequence];

    pub fn as_str(&self) -> &'static str {
        match self {
            DrawStyle::Set => "SET",
            DrawStyle::Add => "ADD",
            DrawStyle::Sequence => "SEQUENCE",
        }
    }
}

impl fmt::Display for DrawStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrawStyle {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self> {
        DrawStyle::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CanvasError::InvalidDrawStyle {
                style: s.to_string(),
            })
    }
}

/// The paint grid
#[derive(Debug, Clone)]
pub struct Grid {
    style: DrawStyle,
    width: usize,
    height: usize,
    /// Column-major: cell `(x, y)` lives at `x * height + y`
    cells: Vec<Store>,
    brush_size: usize,
    additive_capacity: usize,
    sequence_capacity: usize,
}

impl Grid {
    pub const DEFAULT_BRUSH_SIZE: usize = 2;
    pub const MAX_BRUSH: usize = 5;
    pub const MIN_BRUSH: usize = 0;

    /// Create a grid of `x * y` cells with default store capacities
    pub fn new(style: DrawStyle, x: usize, y: usize) -> Result<Self> {
        Self::build(style, x, y, DEFAULT_ADDITIVE_CAPACITY, get_layers().len())
    }

    /// Create a grid from a draw style name (`SET`, `ADD` or `SEQUENCE`)
    pub fn from_style_name(style: &str, x: usize, y: usize) -> Result<Self> {
        Self::new(style.parse()?, x, y)
    }

    /// Create a grid using the dimensions, style, brush and capacities of `config`
    pub fn from_config(config: &CanvasConfig) -> Result<Self> {
        config.validate()?;
        let mut grid = Self::build(
            config.draw_style,
            config.width,
            config.height,
            config.additive_capacity,
            config.sequence_capacity,
        )?;
        grid.brush_size = config.brush_size;
        Ok(grid)
    }

    fn build(
        style: DrawStyle,
        width: usize,
        height: usize,
        additive_capacity: usize,
        sequence_capacity: usize,
    ) -> Result<Self> {
        let count = width
            .checked_mul(height)
            .filter(|&n| n > 0)
            .ok_or(CanvasError::InvalidDimensions { width, height })?;

        let cells = (0..count)
            .map(|_| new_cell(style, additive_capacity, sequence_capacity))
            .collect();

        debug!("Created {} grid {}x{}", style, width, height);

        Ok(Self {
            style,
            width,
            height,
            cells,
            brush_size: Self::DEFAULT_BRUSH_SIZE,
            additive_capacity,
            sequence_capacity,
        })
    }

    /// A blank grid with the same style, size, capacities and brush size
    pub fn fresh(&self) -> Self {
        let cells = (0..self.cells.len())
            .map(|_| new_cell(self.style, self.additive_capacity, self.sequence_capacity))
            .collect();
        Self {
            style: self.style,
            width: self.width,
            height: self.height,
            cells,
            brush_size: self.brush_size,
            additive_capacity: self.additive_capacity,
            sequence_capacity: self.sequence_capacity,
        }
    }

    pub fn style(&self) -> DrawStyle {
        self.style
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    // ========================================================================
    // Brush
    // ========================================================================

    pub fn brush_size(&self) -> usize {
        self.brush_size
    }

    /// Grow the brush by one, stopping at `MAX_BRUSH`
    pub fn increase_brush_size(&mut self) {
        if self.brush_size < Self::MAX_BRUSH {
            self.brush_size += 1;
        }
    }

    /// Shrink the brush by one, stopping at `MIN_BRUSH`
    pub fn decrease_brush_size(&mut self) {
        if self.brush_size > Self::MIN_BRUSH {
            self.brush_size -= 1;
        }
    }

    // ========================================================================
    // Cells
    // ========================================================================

    fn offset(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| x * self.height + y)
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<()> {
        match self.offset(x, y) {
            Some(_) => Ok(()),
            None => Err(CanvasError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            }),
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&Store> {
        let i = self.offset(x, y)?;
        Some(&self.cells[i])
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Store> {
        let i = self.offset(x, y)?;
        Some(&mut self.cells[i])
    }

    /// Resolve the colour of one cell
    pub fn color_at(&self, x: usize, y: usize, start: Rgb, timestamp: u64) -> Result<Rgb> {
        self.check_bounds(x, y)?;
        Ok(self[(x, y)].get_color(start, timestamp, x, y))
    }

    /// Run every cell's special mode once
    pub fn special(&mut self) {
        debug!("Special on {} {} cells", self.cells.len(), self.style);
        for cell in &mut self.cells {
            cell.special();
        }
    }

    // ========================================================================
    // Strokes
    // ========================================================================

    /// Add `layer` to every cell under the brush centred on `(x, y)`.
    ///
    /// The returned action holds one step per cell that actually changed.
    pub fn paint(&mut self, x: usize, y: usize, layer: &'static Layer) -> Result<PaintAction> {
        self.stroke(x, y, layer, StepKind::Paint)
    }

    /// Erase with `layer` on every cell under the brush centred on `(x, y)`
    pub fn erase(&mut self, x: usize, y: usize, layer: &'static Layer) -> Result<PaintAction> {
        self.stroke(x, y, layer, StepKind::Erase)
    }

    fn stroke(
        &mut self,
        x: usize,
        y: usize,
        layer: &'static Layer,
        kind: StepKind,
    ) -> Result<PaintAction> {
        self.check_bounds(x, y)?;

        let reach = self.brush_size;
        let mut steps = Vec::new();
        for cx in x.saturating_sub(reach)..=(x + reach).min(self.width - 1) {
            let remaining = reach - cx.abs_diff(x);
            for cy in y.saturating_sub(remaining)..=(y + remaining).min(self.height - 1) {
                let step = PaintStep::new(cx, cy, layer, kind);
                if step.redo_apply(self) {
                    steps.push(step);
                }
            }
        }

        debug!(
            "{:?} {} at ({}, {}) changed {} cells",
            kind,
            layer,
            x,
            y,
            steps.len()
        );
        Ok(PaintAction::new(steps))
    }
}

fn new_cell(style: DrawStyle, additive_capacity: usize, sequence_capacity: usize) -> Store {
    match style {
        DrawStyle::Set => SetLayerStore::new().into(),
        DrawStyle::Add => AdditiveLayerStore::new(additive_capacity).into(),
        DrawStyle::Sequence => SequenceLayerStore::new(sequence_capacity).into(),
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Store;

    fn index(&self, (x, y): (usize, usize)) -> &Store {
        match self.get(x, y) {
            Some(cell) => cell,
            None => panic!(
                "cell ({}, {}) out of bounds for {}x{} grid",
                x, y, self.width, self.height
            ),
        }
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Store {
        let (width, height) = (self.width, self.height);
        match self.get_mut(x, y) {
            Some(cell) => cell,
            None => panic!(
                "cell ({}, {}) out of bounds for {}x{} grid",
                x, y, width, height
            ),
        }
    }
}
