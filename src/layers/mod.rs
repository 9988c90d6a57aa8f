//! Layer Module
//!
//! Colour type, layer descriptors and the global layer registry.

mod layer;
mod registry;

pub use layer::{ApplyFn, Layer, Rgb};
pub use registry::{get_layer, get_layers, invert_layer, layer_by_name};
