//! Deterministic simulation module
//!
//! All per-frame logic lives here. This module must be pure and deterministic:
//! - Per-frame units only (no wall-clock time)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod ball;
pub mod collision;
pub mod polygon;
pub mod state;
pub mod tick;

pub use ball::{Ball, Bounce, TrailPoint};
pub use collision::{
    CollisionResult, ball_edge_collision, closest_point_on_segment, interior_normal,
    reflect_velocity,
};
pub use polygon::Polygon;
pub use state::{SimEvent, World};
pub use tick::tick;

