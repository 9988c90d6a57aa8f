//! Additive layer store
//!
//! Every added layer applies after all earlier ones. Erase drops the oldest
//! layer; special reverses the order.

use log::warn;

use crate::collections::{BoundedQueue, BoundedStack};
use crate::layers::{Layer, Rgb};

use super::LayerStore;

/// Default number of layers an additive cell can hold
pub const DEFAULT_ADDITIVE_CAPACITY: usize = 200;

#[derive(Debug, Clone)]
pub struct AdditiveLayerStore {
    queue: BoundedQueue<&'static Layer>,
    /// Scratch space for `special`; always empty between calls.
    reversal: BoundedStack<&'static Layer>,
}

impl Default for AdditiveLayerStore {
    fn default() -> Self {
        Self::new(DEFAULT_ADDITIVE_CAPACITY)
    }
}

impl AdditiveLayerStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: BoundedQueue::new(capacity),
            reversal: BoundedStack::new(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.queue.capacity()
    }

    /// Layers in application order (oldest first)
    pub fn layers(&self) -> impl Iterator<Item = &'static Layer> + '_ {
        self.queue.iter().copied()
    }
}

impl LayerStore for AdditiveLayerStore {
    fn add(&mut self, layer: &'static Layer) -> bool {
        if !self.queue.push_back(layer) {
            warn!(
                "Additive store full ({} layers), dropping {}",
                self.queue.capacity(),
                layer
            );
            return false;
        }
        true
    }

    /// Remove the oldest layer. `layer` is not matched against the contents.
    fn erase(&mut self, _layer: &'static Layer) -> bool {
        self.queue.pop_front().is_some()
    }

    fn get_color(&self, start: Rgb, timestamp: u64, x: usize, y: usize) -> Rgb {
        self.queue
            .iter()
            .fold(start, |colour, layer| layer.apply(colour, timestamp, x, y))
    }

    fn special(&mut self) {
        while let Some(layer) = self.queue.pop_front() {
            self.reversal.push(layer);
        }
        while let Some(layer) = self.reversal.pop() {
            self.queue.push_back(layer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::layer_by_name;
    use pretty_assertions::assert_eq;

    fn layer(name: &str) -> &'static Layer {
        layer_by_name(name).unwrap()
    }

    fn names(store: &AdditiveLayerStore) -> Vec<&'static str> {
        store.layers().map(|l| l.name()).collect()
    }

    const START: Rgb = Rgb::new(100, 100, 100);

    #[test]
    fn test_fold_is_fifo() {
        let mut store = AdditiveLayerStore::default();
        assert!(store.add(layer("black")));
        assert!(store.add(layer("lighten")));
        assert!(store.add(layer("lighten")));
        assert_eq!(store.get_color(START, 0, 0, 0), Rgb::new(80, 80, 80));

        // Order matters: lighten then black ends black
        let mut store = AdditiveLayerStore::default();
        store.add(layer("lighten"));
        store.add(layer("black"));
        assert_eq!(store.get_color(START, 0, 0, 0), Rgb::BLACK);
    }

    #[test]
    fn test_get_color_preserves_queue() {
        let mut store = AdditiveLayerStore::default();
        for name in ["red", "invert", "darken"] {
            store.add(layer(name));
        }
        let before = names(&store);
        let first = store.get_color(START, 3, 1, 2);
        let second = store.get_color(START, 3, 1, 2);
        assert_eq!(first, second);
        assert_eq!(names(&store), before);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_erase_removes_oldest() {
        let mut store = AdditiveLayerStore::default();
        assert!(!store.erase(layer("red")));

        store.add(layer("red"));
        store.add(layer("green"));
        assert!(store.erase(layer("green")));
        assert_eq!(names(&store), vec!["green"]);
    }

    #[test]
    fn test_special_reverses_and_is_involution() {
        let mut store = AdditiveLayerStore::default();
        for name in ["red", "green", "blue", "darken"] {
            store.add(layer(name));
        }
        store.special();
        assert_eq!(names(&store), vec!["darken", "blue", "green", "red"]);
        store.special();
        assert_eq!(names(&store), vec!["red", "green", "blue", "darken"]);
    }

    #[test]
    fn test_special_on_empty_store() {
        let mut store = AdditiveLayerStore::default();
        store.special();
        assert!(store.is_empty());
        assert_eq!(store.get_color(START, 0, 0, 0), START);
    }

    #[test]
    fn test_full_store_drops() {
        let mut store = AdditiveLayerStore::new(2);
        assert!(store.add(layer("red")));
        assert!(store.add(layer("green")));
        assert!(!store.add(layer("blue")));
        assert_eq!(names(&store), vec!["red", "green"]);

        // Reversal still works at capacity
        store.special();
        assert_eq!(names(&store), vec!["green", "red"]);
    }
}
