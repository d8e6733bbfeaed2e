//! Linear RGBA colors and the linear-to-display transfer function.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// Convert sRGB component [0,1] to linear RGB (remove gamma).
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert linear RGB component to sRGB [0,1] (apply gamma).
pub fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Color in linear space. Components may exceed 1.0 while accumulating.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "default_alpha")]
    pub a: f32,
}

fn default_alpha() -> f32 {
    1.0
}

impl LinearColor {
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Build a linear color from an 8-bit sRGB triple.
    pub fn from_srgb8(rgb: [u8; 3]) -> Self {
        Self::rgb(
            srgb_to_linear(rgb[0] as f32 / 255.0),
            srgb_to_linear(rgb[1] as f32 / 255.0),
            srgb_to_linear(rgb[2] as f32 / 255.0),
        )
    }

    /// Largest of the three color channels (alpha excluded).
    pub fn max_rgb(&self) -> f32 {
        self.r.max(self.g).max(self.b)
    }

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Bring RGB into [0,1] while keeping channel ratios.
    ///
    /// If the brightest channel exceeds 1 all channels are divided by it,
    /// otherwise RGB is clamped. Alpha is forced to 1.
    pub fn normalize_to_max(&self) -> Self {
        let max = self.max_rgb();
        if max <= 1.0 {
            return Self::rgb(
                self.r.clamp(0.0, 1.0),
                self.g.clamp(0.0, 1.0),
                self.b.clamp(0.0, 1.0),
            );
        }
        Self::rgb(
            (self.r / max).max(0.0),
            (self.g / max).max(0.0),
            (self.b / max).max(0.0),
        )
    }

    /// Encode to 8-bit RGBA. Color channels go through the sRGB curve,
    /// alpha stays linear.
    pub fn to_srgb8(&self) -> [u8; 4] {
        [
            encode_channel(linear_to_srgb(self.r.clamp(0.0, 1.0))),
            encode_channel(linear_to_srgb(self.g.clamp(0.0, 1.0))),
            encode_channel(linear_to_srgb(self.b.clamp(0.0, 1.0))),
            encode_channel(self.a.clamp(0.0, 1.0)),
        ]
    }
}

#[inline]
fn encode_channel(c: f32) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

impl Default for LinearColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Add for LinearColor {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b, self.a + rhs.a)
    }
}

impl Mul<f32> for LinearColor {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}
