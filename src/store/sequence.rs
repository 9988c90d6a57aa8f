//! Sequence layer store
//!
//! Each layer type is either on or off and active layers apply in index
//! order. Membership is a bit set keyed by `index + 1`.

use log::warn;

use crate::collections::BitSet;
use crate::layers::{get_layer, get_layers, Layer, Rgb};

use super::LayerStore;

#[derive(Debug, Clone)]
pub struct SequenceLayerStore {
    active: BitSet,
}

impl Default for SequenceLayerStore {
    fn default() -> Self {
        Self::new(get_layers().len())
    }
}

impl SequenceLayerStore {
    /// Create a store that accepts layers with index below `capacity`
    pub fn new(capacity: usize) -> Self {
        Self {
            active: BitSet::new(capacity + 1),
        }
    }

    fn bit(layer: &Layer) -> usize {
        layer.index() + 1
    }

    pub fn contains(&self, layer: &Layer) -> bool {
        self.active.contains(Self::bit(layer))
    }

    /// Active layers in ascending index order
    pub fn active_layers(&self) -> impl Iterator<Item = &'static Layer> + '_ {
        self.active.iter().filter_map(|bit| get_layer(bit - 1))
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

impl LayerStore for SequenceLayerStore {
    fn add(&mut self, layer: &'static Layer) -> bool {
        let bit = Self::bit(layer);
        if bit >= self.active.universe() {
            warn!(
                "Sequence store holds {} layer types, rejecting {}",
                self.active.universe() - 1,
                layer
            );
            return false;
        }
        self.active.insert(bit)
    }

    fn erase(&mut self, layer: &'static Layer) -> bool {
        self.active.remove(Self::bit(layer))
    }

    fn get_color(&self, start: Rgb, timestamp: u64, x: usize, y: usize) -> Rgb {
        self.active_layers()
            .fold(start, |colour, layer| layer.apply(colour, timestamp, x, y))
    }

    /// Deactivate the active layer with the median name. With an even count
    /// the lower of the two middle names goes.
    fn special(&mut self) {
        let mut layers: Vec<_> = self.active_layers().collect();
        if layers.is_empty() {
            return;
        }
        layers.sort_by(|a, b| a.name().cmp(b.name()).then(a.index().cmp(&b.index())));
        let median = layers[(layers.len() - 1) / 2];
        self.active.remove(Self::bit(median));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::layer_by_name;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn layer(name: &str) -> &'static Layer {
        layer_by_name(name).unwrap()
    }

    fn active_names(store: &SequenceLayerStore) -> Vec<&'static str> {
        store.active_layers().map(|l| l.name()).collect()
    }

    const START: Rgb = Rgb::new(100, 100, 100);

    #[test]
    fn test_add_is_idempotent() {
        let mut store = SequenceLayerStore::default();
        assert!(store.add(layer("red")));
        assert!(!store.add(layer("red")));
        assert_eq!(store.len(), 1);
        assert!(store.contains(layer("red")));
    }

    #[test]
    fn test_erase_matches_layer() {
        let mut store = SequenceLayerStore::default();
        store.add(layer("red"));
        assert!(!store.erase(layer("green")));
        assert!(store.erase(layer("red")));
        assert!(!store.erase(layer("red")));
        assert!(store.is_empty());
    }

    #[test]
    fn test_applies_in_index_order() {
        let mut store = SequenceLayerStore::default();
        // Added out of order; black (1) still runs before lighten (2)
        store.add(layer("lighten"));
        store.add(layer("black"));
        assert_eq!(store.get_color(START, 0, 0, 0), Rgb::new(40, 40, 40));

        // darken (8) runs after red (4)
        store.add(layer("darken"));
        store.add(layer("red"));
        assert_eq!(active_names(&store), vec!["black", "lighten", "red", "darken"]);
        assert_eq!(store.get_color(START, 0, 0, 0), Rgb::new(215, 0, 0));
    }

    #[test_case(&["blue", "green", "red"], "green"; "odd count takes exact median")]
    #[test_case(&["red", "blue", "green", "black"], "blue"; "even count takes lower median")]
    #[test_case(&["sparkle"], "sparkle"; "single layer")]
    #[test_case(&["rainbow", "invert"], "invert"; "two layers")]
    fn test_special_removes_median(names: &[&str], removed: &str) {
        let mut store = SequenceLayerStore::default();
        for name in names {
            store.add(layer(name));
        }
        store.special();
        assert_eq!(store.len(), names.len() - 1);
        assert!(!store.contains(layer(removed)));
    }

    #[test]
    fn test_special_on_empty_store() {
        let mut store = SequenceLayerStore::default();
        store.special();
        assert!(store.is_empty());
    }

    #[test]
    fn test_capacity_rejects_high_indices() {
        let mut store = SequenceLayerStore::new(4);
        assert!(store.add(layer("invert")));
        assert!(!store.add(layer("red")));
        assert!(!store.erase(layer("red")));
        assert_eq!(active_names(&store), vec!["invert"]);
    }
}
