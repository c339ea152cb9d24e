//! Viewport to arena geometry
//!
//! Portrait screens (phones) get a smaller polygon lifted well above the
//! middle so the controls at the bottom stay clear; landscape screens get a
//! height-based radius with only a small lift for the title text.

use glam::Vec2;

/// Radius as a fraction of the shorter side in portrait
const PORTRAIT_RADIUS_FACTOR: f32 = 0.32;
/// Upward shift of the center in portrait (pixels)
const PORTRAIT_LIFT: f32 = 60.0;
/// Radius as a fraction of the height in landscape
const LANDSCAPE_RADIUS_FACTOR: f32 = 0.28;
const LANDSCAPE_LIFT: f32 = 15.0;

/// Arena placement for a given viewport (CSS pixels, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub center: Vec2,
    pub radius: f32,
}

impl Layout {
    pub fn from_viewport(width: f32, height: f32) -> Self {
        let (radius, lift) = if width < height {
            (width.min(height) * PORTRAIT_RADIUS_FACTOR, PORTRAIT_LIFT)
        } else {
            (height * LANDSCAPE_RADIUS_FACTOR, LANDSCAPE_LIFT)
        };

        Self {
            width,
            height,
            center: Vec2::new(width / 2.0, height / 2.0 - lift),
            radius,
        }
    }

    pub fn is_portrait(&self) -> bool {
        self.width < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landscape() {
        let layout = Layout::from_viewport(1280.0, 720.0);
        assert!(!layout.is_portrait());
        assert!((layout.radius - 201.6).abs() < 0.001);
        assert_eq!(layout.center, Vec2::new(640.0, 345.0));
    }

    #[test]
    fn test_portrait() {
        let layout = Layout::from_viewport(400.0, 800.0);
        assert!(layout.is_portrait());
        assert!((layout.radius - 128.0).abs() < 0.001);
        assert_eq!(layout.center, Vec2::new(200.0, 340.0));
    }

    #[test]
    fn test_square_is_landscape() {
        let layout = Layout::from_viewport(500.0, 500.0);
        assert!(!layout.is_portrait());
        assert!((layout.radius - 140.0).abs() < 0.001);
    }
}
