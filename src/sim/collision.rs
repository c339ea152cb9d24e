//! Ball vs. polygon edge collision detection
//!
//! Each edge is a finite line segment. The ball is a circle; it touches an
//! edge when the closest point on the segment is within one radius of its
//! center.

use glam::Vec2;

use crate::consts::DEGENERATE_EDGE_EPSILON;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Closest point on the edge (if hit)
    pub point: Vec2,
    /// Unit wall normal facing the polygon interior
    pub normal: Vec2,
    /// Penetration depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Unit normal of edge `p1 -> p2` on the side facing `center`
///
/// Returns `None` for a degenerate (zero-length) edge.
pub fn interior_normal(p1: Vec2, p2: Vec2, center: Vec2) -> Option<Vec2> {
    let edge = p2 - p1;
    if edge.length_squared() < DEGENERATE_EDGE_EPSILON {
        return None;
    }

    let midpoint = (p1 + p2) * 0.5;
    let perp = edge.perp();
    let normal = if perp.dot(center - midpoint) < 0.0 { -perp } else { perp };
    Some(normal.normalize())
}

/// Closest point to `point` on the segment `p1 -> p2`
pub fn closest_point_on_segment(point: Vec2, p1: Vec2, p2: Vec2) -> Vec2 {
    let edge = p2 - p1;
    let len_sq = edge.length_squared();
    if len_sq < DEGENERATE_EDGE_EPSILON {
        return p1;
    }

    let t = ((point - p1).dot(edge) / len_sq).clamp(0.0, 1.0);
    p1 + edge * t
}

/// Check collision between a ball and one polygon edge
///
/// Degenerate edges never collide.
pub fn ball_edge_collision(
    ball_pos: Vec2,
    ball_radius: f32,
    p1: Vec2,
    p2: Vec2,
    center: Vec2,
) -> CollisionResult {
    let Some(normal) = interior_normal(p1, p2, center) else {
        return CollisionResult::miss();
    };

    let closest = closest_point_on_segment(ball_pos, p1, p2);
    let distance = ball_pos.distance(closest);

    if distance < ball_radius {
        CollisionResult {
            hit: true,
            point: closest,
            normal,
            penetration: ball_radius - distance,
        }
    } else {
        CollisionResult::miss()
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}
