//! Set layer store
//!
//! Holds at most one layer. Special mode inverts the output colour.

use crate::layers::{invert_layer, Layer, Rgb};

use super::LayerStore;

/// A single layer (or none), with an optional inversion pass on top.
#[derive(Debug, Clone, Default)]
pub struct SetLayerStore {
    layer: Option<&'static Layer>,
    inverted: bool,
}

impl SetLayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The layer currently held, if any
    pub fn layer(&self) -> Option<&'static Layer> {
        self.layer
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }
}

impl LayerStore for SetLayerStore {
    /// Replace the held layer. Re-adding the same layer changes nothing.
    fn add(&mut self, layer: &'static Layer) -> bool {
        if self.layer == Some(layer) {
            return false;
        }
        self.layer = Some(layer);
        true
    }

    /// Clear the held layer, whatever `layer` is.
    fn erase(&mut self, _layer: &'static Layer) -> bool {
        self.layer.take().is_some()
    }

    fn get_color(&self, start: Rgb, timestamp: u64, x: usize, y: usize) -> Rgb {
        let colour = match self.layer {
            Some(layer) => layer.apply(start, timestamp, x, y),
            None => start,
        };
        if self.inverted {
            invert_layer().apply(colour, timestamp, x, y)
        } else {
            colour
        }
    }

    fn special(&mut self) {
        self.inverted = !self.inverted;
    }
}
