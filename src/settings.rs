//! Simulation tunables
//!
//! Defaults come from [`crate::consts`]. A page can override any subset by
//! putting a JSON object in the canvas's `data-settings` attribute, e.g.
//! `<canvas data-settings='{"gravity": 0.1, "trail_length": 30}'>`.

use serde::{Deserialize, Serialize};

use crate::color::{Color, palette};
use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Polygon ===
    /// Side count after init/reset
    pub initial_sides: u32,
    /// Starting polygon color (CSS hex)
    pub polygon_color: String,
    /// Stroke width in pixels
    pub line_width: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Starting ball color (CSS hex)
    pub ball_color: String,
    /// Spawn distance above the polygon center
    pub spawn_offset: f32,
    /// Horizontal spawn velocity span (uniform in [-span/2, span/2))
    pub spawn_vx_span: f32,
    pub spawn_vy: f32,

    // === Physics ===
    pub gravity: f32,
    pub speed_growth: f32,
    pub max_speed: f32,
    pub substeps: u32,
    pub lateral_jitter: f32,
    pub recenter_margin: f32,

    // === Visuals ===
    pub trail_length: usize,
    pub glow_radius: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_sides: INITIAL_SIDES,
            polygon_color: "#666".to_string(),
            line_width: POLYGON_LINE_WIDTH,

            ball_radius: BALL_RADIUS,
            ball_color: "#4ecdc4".to_string(),
            spawn_offset: BALL_SPAWN_OFFSET,
            spawn_vx_span: BALL_SPAWN_VX_SPAN,
            spawn_vy: BALL_SPAWN_VY,

            gravity: GRAVITY,
            speed_growth: SPEED_GROWTH,
            max_speed: BALL_MAX_SPEED,
            substeps: SUBSTEPS,
            lateral_jitter: LATERAL_JITTER,
            recenter_margin: RECENTER_MARGIN,

            trail_length: TRAIL_LENGTH,
            glow_radius: GLOW_RADIUS,
        }
    }
}

impl Settings {
    /// Canvas attribute holding JSON overrides
    pub const DATA_ATTRIBUTE: &'static str = "data-settings";

    /// Parse a (possibly partial) JSON object of overrides
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.validated())
    }

    /// Clamp values that would break the simulation
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        self.initial_sides = self.initial_sides.max(MIN_SIDES);
        self.substeps = self.substeps.max(1);
        self.trail_length = self.trail_length.max(1);
        if !(self.max_speed.is_finite() && self.max_speed > 0.0) {
            self.max_speed = defaults.max_speed;
        }
        if !(self.ball_radius.is_finite() && self.ball_radius > 0.0) {
            self.ball_radius = defaults.ball_radius;
        }
        if !(self.speed_growth.is_finite() && self.speed_growth > 0.0) {
            self.speed_growth = defaults.speed_growth;
        }
        self.recenter_margin = self.recenter_margin.max(0.0);
        self.line_width = self.line_width.max(0.0);
        self.glow_radius = self.glow_radius.max(0.0);

        self
    }

    pub fn polygon_color(&self) -> Color {
        Color::from_hex(&self.polygon_color).unwrap_or(palette::POLYGON)
    }

    pub fn ball_color(&self) -> Color {
        Color::from_hex(&self.ball_color).unwrap_or(palette::BALL)
    }

    /// Load overrides from the canvas attribute (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load(canvas: &web_sys::Element) -> Self {
        if let Some(json) = canvas.get_attribute(Self::DATA_ATTRIBUTE) {
            match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::DATA_ATTRIBUTE);
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed {}: {}", Self::DATA_ATTRIBUTE, e),
            }
        }

        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let settings = Settings::from_json(r#"{"gravity": 0.0, "trail_length": 30}"#).unwrap();
        assert_eq!(settings.gravity, 0.0);
        assert_eq!(settings.trail_length, 30);
        assert_eq!(settings.max_speed, BALL_MAX_SPEED);
        assert_eq!(settings.initial_sides, INITIAL_SIDES);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{gravity: }").is_err());
        assert!(Settings::from_json(r#"{"substeps": "many"}"#).is_err());
    }

    #[test]
    fn test_validation_clamps() {
        let settings =
            Settings::from_json(r#"{"initial_sides": 1, "substeps": 0, "trail_length": 0, "max_speed": -3}"#)
                .unwrap();
        assert_eq!(settings.initial_sides, MIN_SIDES);
        assert_eq!(settings.substeps, 1);
        assert_eq!(settings.trail_length, 1);
        assert_eq!(settings.max_speed, BALL_MAX_SPEED);
    }

    #[test]
    fn test_bad_color_falls_back() {
        let settings = Settings {
            polygon_color: "not a color".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.polygon_color(), palette::POLYGON);
        assert_eq!(Settings::default().ball_color(), Color::from_hex("#4ecdc4").unwrap());
    }
}
