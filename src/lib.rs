//! Polygon Bounce - a ball that grows the polygon it bounces in
//!
//! Every wall hit reflects the ball, speeds it up a little, adds a side to
//! the polygon and recolors both in a fresh neon hue.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (polygon, ball, collisions)
//! - `frame_loop`: Fixed-rate start/stop pacing for the animation loop
//! - `renderer`: WebGPU rendering pipeline
//! - `layout`: Viewport to arena geometry
//! - `settings`: Data-driven tunables

pub mod color;
pub mod error;
pub mod frame_loop;
pub mod layout;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use color::Color;
pub use error::SetupError;
pub use frame_loop::{FrameLoop, LoopPhase};
pub use layout::Layout;
pub use settings::Settings;

use glam::Vec2;

/// Default tuning constants (per-frame units, screen pixels, y pointing down)
pub mod consts {
    /// Target animation rate
    pub const FPS: f64 = 60.0;
    /// Minimum time between simulated frames
    pub const FRAME_INTERVAL_MS: f64 = 1000.0 / FPS;

    /// Polygon defaults
    pub const INITIAL_SIDES: u32 = 3;
    pub const MIN_SIDES: u32 = 3;
    /// First vertex points straight up
    pub const POLYGON_ROTATION: f32 = -std::f32::consts::FRAC_PI_2;
    pub const POLYGON_LINE_WIDTH: f32 = 5.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 12.0;
    /// Spawn point distance above the polygon center
    pub const BALL_SPAWN_OFFSET: f32 = 50.0;
    /// Horizontal spawn velocity is uniform in [-SPAN/2, SPAN/2)
    pub const BALL_SPAWN_VX_SPAN: f32 = 8.0;
    pub const BALL_SPAWN_VY: f32 = -4.0;

    /// Physics
    pub const GRAVITY: f32 = 0.2;
    /// Speed multiplier applied on every wall hit
    pub const SPEED_GROWTH: f32 = 1.01;
    pub const BALL_MAX_SPEED: f32 = 25.0;
    /// Integration sub-steps per frame (tunneling guard)
    pub const SUBSTEPS: u32 = 20;
    /// Total span of the random nudge along the wall after a bounce
    pub const LATERAL_JITTER: f32 = 0.5;
    /// Ball is recentered once it is this far outside the polygon radius
    pub const RECENTER_MARGIN: f32 = 100.0;
    /// Edges shorter than this (squared) are ignored by collision
    pub const DEGENERATE_EDGE_EPSILON: f32 = 1e-4;

    /// Visuals
    pub const TRAIL_LENGTH: usize = 10;
    pub const GLOW_RADIUS: f32 = 25.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
