//! RGBA colors with CSS-style constructors
//!
//! Colors are stored as straight (non-premultiplied) sRGB components in
//! `[0, 1]`, which is what the render pipeline writes to the surface.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Parse `#rgb` or `#rrggbb` (leading `#` optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| v as f32 / 255.0);

        match digits.len() {
            3 => {
                // #abc is shorthand for #aabbcc
                let expand = |i: usize| channel(&digits[i..=i].repeat(2));
                Some(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Some(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => None,
        }
    }

    /// Build from hue (degrees), saturation and lightness (both `[0, 1]`)
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let m = l - chroma / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Self::rgb(r + m, g + m, b + m)
    }

    /// A saturated, bright color with a random whole-degree hue
    pub fn random_neon<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let hue = rng.random_range(0..360) as f32;
        Self::from_hsl(hue, 0.85, 0.60)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Fixed colors
pub mod palette {
    use super::Color;

    /// `#666`
    pub const POLYGON: Color = Color::rgb(0.4, 0.4, 0.4);
    /// `#4ecdc4`
    pub const BALL: Color = Color::rgb(78.0 / 255.0, 205.0 / 255.0, 196.0 / 255.0);
    pub const BACKGROUND: Color = Color::rgb(0.02, 0.02, 0.05);
}
