//! Layerpaint - Layered Paint Canvas
//!
//! A 2D grid of cells, each holding a collection of paint layers that compose
//! into a final colour, with undo/redo and replay of paint actions.
//!
//! # Architecture
//!
//! The grid picks one of three layer stores for every cell:
//! - Set: a single layer at a time, special inverts the output
//! - Additive: layers stack in the order they were added, special reverses them
//! - Sequence: each layer type is on or off and applies in index order,
//!   special removes the layer with the median name

pub mod action;
pub mod cli;
pub mod collections;
pub mod config;
pub mod error;
pub mod grid;
pub mod history;
pub mod layers;
pub mod session;
pub mod store;

pub use action::{PaintAction, PaintStep, StepKind};
pub use config::CanvasConfig;
pub use error::{CanvasError, Result};
pub use grid::{DrawStyle, Grid};
pub use history::{ReplayStatus, ReplayTracker, UndoTracker};
pub use layers::{Layer, Rgb};
pub use session::CanvasSession;
pub use store::LayerStore;
