//! Time-based colour cycling
//!
//! Every entity is drawn with the same colour on a given frame. The three
//! channels follow phase-shifted sine waves so the palette drifts slowly
//! through the rainbow.

use serde::{Deserialize, Serialize};

/// Frames per radian of colour drift
const CYCLE_PERIOD: f64 = 1000.0;
/// Phase offsets (radians) for the red, green and blue channels
const CHANNEL_PHASES: [f64; 3] = [0.0, 2.0, 4.0];

/// An opaque 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS colour string, e.g. `rgb(127, 242, 30)`
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Sample one channel: floor(127 + 127 * sin(t / 1000 + phase))
#[inline]
fn channel(t: u64, phase: f64) -> u8 {
    let v = (127.0 + 127.0 * (t as f64 / CYCLE_PERIOD + phase).sin()).floor();
    // sin() is within [-1, 1], so v is within [0, 254]
    v as u8
}

/// Colour for the given frame counter
pub fn dynamic_color(t: u64) -> Rgb {
    let [r, g, b] = CHANNEL_PHASES.map(|phase| channel(t, phase));
    Rgb { r, g, b }
}

/// Layered glow used around the playfield
pub fn glow_shadow(color: Rgb) -> String {
    let c = color.to_css();
    format!("0 0 10px {c}, 0 0 20px {c}, 0 0 30px {c}")
}
