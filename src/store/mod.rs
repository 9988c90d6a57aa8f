//! Layer Stores
//!
//! Per-cell state that combines an ordered collection of layers into one
//! colour. Three strategies share the `LayerStore` contract:
//! - Set: a single layer, special inverts the output
//! - Additive: FIFO of layers, special reverses the order
//! - Sequence: on/off per layer type in index order, special drops the median

mod additive;
mod sequence;
mod set;

pub use additive::{AdditiveLayerStore, DEFAULT_ADDITIVE_CAPACITY};
pub use sequence::SequenceLayerStore;
pub use set::SetLayerStore;

use crate::layers::{Layer, Rgb};

/// Operations every cell store supports
pub trait LayerStore {
    /// Add a layer. Returns true if the store actually changed.
    fn add(&mut self, layer: &'static Layer) -> bool;

    /// Erase with this layer. Returns true if the store actually changed.
    fn erase(&mut self, layer: &'static Layer) -> bool;

    /// The colour this cell shows for `start` at `timestamp`
    fn get_color(&self, start: Rgb, timestamp: u64, x: usize, y: usize) -> Rgb;

    /// Store-specific special mode
    fn special(&mut self);
}

/// The store held by a grid cell
#[derive(Debug, Clone)]
pub enum Store {
    Set(SetLayerStore),
    Additive(AdditiveLayerStore),
    Sequence(SequenceLayerStore),
}

impl Store {
    fn as_dyn(&self) -> &dyn LayerStore {
        match self {
            Store::Set(s) => s,
            Store::Additive(s) => s,
            Store::Sequence(s) => s,
        }
    }

    fn as_dyn_mut(&mut self) -> &mut dyn LayerStore {
        match self {
            Store::Set(s) => s,
            Store::Additive(s) => s,
            Store::Sequence(s) => s,
        }
    }

    pub fn as_set(&self) -> Option<&SetLayerStore> {
        match self {
            Store::Set(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_additive(&self) -> Option<&AdditiveLayerStore> {
        match self {
            Store::Additive(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&SequenceLayerStore> {
        match self {
            Store::Sequence(s) => Some(s),
            _ => None,
        }
    }
}

impl LayerStore for Store {
    fn add(&mut self, layer: &'static Layer) -> bool {
        self.as_dyn_mut().add(layer)
    }

    fn erase(&mut self, layer: &'static Layer) -> bool {
        self.as_dyn_mut().erase(layer)
    }

    fn get_color(&self, start: Rgb, timestamp: u64, x: usize, y: usize) -> Rgb {
        self.as_dyn().get_color(start, timestamp, x, y)
    }

    fn special(&mut self) {
        self.as_dyn_mut().special()
    }
}

impl From<SetLayerStore> for Store {
    fn from(store: SetLayerStore) -> Self {
        Store::Set(store)
    }
}

impl From<AdditiveLayerStore> for Store {
    fn from(store: AdditiveLayerStore) -> Self {
        Store::Additive(store)
    }
}

impl From<SequenceLayerStore> for Store {
    fn from(store: SequenceLayerStore) -> Self {
        Store::Sequence(store)
    }
}
