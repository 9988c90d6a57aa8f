//! Layer descriptors
//!
//! A layer is an immutable colour transform identified by a small index.
//! Layers are `'static` and are only handed out by the registry, so stores
//! can keep plain `&'static Layer` references.

use std::fmt;

/// An RGB colour triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a colour from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Apply `f` to every channel
    pub fn map(self, f: impl Fn(u8) -> u8) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Signature of a layer's colour transform: `(colour, timestamp, x, y) -> colour`
pub type ApplyFn = fn(Rgb, u64, usize, usize) -> Rgb;

/// An immutable layer descriptor
#[derive(Clone, Copy)]
pub struct Layer {
    index: usize,
    name: &'static str,
    apply: ApplyFn,
}

impl Layer {
    pub(crate) const fn new(index: usize, name: &'static str, apply: ApplyFn) -> Self {
        Self { index, name, apply }
    }

    /// Position of this layer in the registry
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run this layer's transform over `colour`
    pub fn apply(&self, colour: Rgb, timestamp: u64, x: usize, y: usize) -> Rgb {
        (self.apply)(colour, timestamp, x, y)
    }
}

// Layers are identified by index; the transform pointer is not compared.
impl PartialEq for Layer {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Layer {}

impl fmt::Debug for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layer")
            .field("index", &self.index)
            .field("name", &self.name)
            .finish()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
