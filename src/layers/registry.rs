//! Built-in layer registry
//!
//! Layers are ordered by index; `get_layers()[i].index() == i` always holds.
//! The sequence store depends on that to turn bit positions back into layers.

use super::layer::{Layer, Rgb};

/// Amount `lighten` and `darken` move each channel by
const SHADE_STEP: u8 = 40;

/// Hue shifts by 10 degrees per cell along each axis and 1 degree per tick.
/// Operands are reduced first so no timestamp or position can overflow.
fn rainbow(_: Rgb, timestamp: u64, x: usize, y: usize) -> Rgb {
    let hue = (timestamp % 360 + (x as u64 % 36 + y as u64 % 36) * 10) % 360;
    hue_to_rgb(hue as u32)
}

fn black(_: Rgb, _: u64, _: usize, _: usize) -> Rgb {
    Rgb::BLACK
}

fn lighten(colour: Rgb, _: u64, _: usize, _: usize) -> Rgb {
    colour.map(|c| c.saturating_add(SHADE_STEP))
}

fn invert(colour: Rgb, _: u64, _: usize, _: usize) -> Rgb {
    colour.map(|c| 255 - c)
}

fn red(_: Rgb, _: u64, _: usize, _: usize) -> Rgb {
    Rgb::new(255, 0, 0)
}

fn green(_: Rgb, _: u64, _: usize, _: usize) -> Rgb {
    Rgb::new(0, 255, 0)
}

fn blue(_: Rgb, _: u64, _: usize, _: usize) -> Rgb {
    Rgb::new(0, 0, 255)
}

fn sparkle(colour: Rgb, timestamp: u64, x: usize, y: usize) -> Rgb {
    if (timestamp % 10 + x as u64 % 10 + y as u64 % 10) % 10 == 0 {
        Rgb::WHITE
    } else {
        colour
    }
}

fn darken(colour: Rgb, _: u64, _: usize, _: usize) -> Rgb {
    colour.map(|c| c.saturating_sub(SHADE_STEP))
}

/// Fully saturated colour for a hue in degrees
fn hue_to_rgb(hue: u32) -> Rgb {
    let hue = hue % 360;
    let rising = ((hue % 60) * 255 / 60) as u8;
    let falling = 255 - rising;
    match hue / 60 {
        0 => Rgb::new(255, rising, 0),
        1 => Rgb::new(falling, 255, 0),
        2 => Rgb::new(0, 255, rising),
        3 => Rgb::new(0, falling, 255),
        4 => Rgb::new(rising, 0, 255),
        _ => Rgb::new(255, 0, falling),
    }
}

static LAYERS: [Layer; 9] = [
    Layer::new(0, "rainbow", rainbow),
    Layer::new(1, "black", black),
    Layer::new(2, "lighten", lighten),
    Layer::new(3, "invert", invert),
    Layer::new(4, "red", red),
    Layer::new(5, "green", green),
    Layer::new(6, "blue", blue),
    Layer::new(7, "sparkle", sparkle),
    Layer::new(8, "darken", darken),
];

const INVERT_INDEX: usize = 3;

/// The invert layer, also used by the set store's special mode
pub fn invert_layer() -> &'static Layer {
    &LAYERS[INVERT_INDEX]
}

/// All registered layers, ordered by index
pub fn get_layers() -> &'static [Layer] {
    &LAYERS
}

/// Look up a layer by its index
pub fn get_layer(index: usize) -> Option<&'static Layer> {
    LAYERS.get(index)
}

/// Look up a layer by name (case-insensitive)
pub fn layer_by_name(name: &str) -> Option<&'static Layer> {
    LAYERS.iter().find(|l| l.name().eq_ignore_ascii_case(name))
}
