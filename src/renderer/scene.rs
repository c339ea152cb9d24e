//! Frame composition
//!
//! Painter's order: polygon outline, then the trail (oldest first), then the
//! ball's glow and body. Later vertices draw over earlier ones.

use super::shapes;
use super::vertex::Vertex;
use crate::sim::{Ball, Polygon, World};

const JOIN_SEGMENTS: u32 = 8;
const TRAIL_SEGMENTS: u32 = 16;
const BALL_SEGMENTS: u32 = 32;

/// Trail dots shrink to this fraction of the ball radius at the newest end
const TRAIL_RADIUS_SCALE: f32 = 0.8;
/// Trail dots fade to this alpha at the newest end
const TRAIL_ALPHA_SCALE: f32 = 0.5;

/// Build the full triangle list for one frame
pub fn build_frame(world: &World) -> Vec<Vertex> {
    let mut vertices = polygon_vertices(&world.polygon, world.settings.line_width);
    vertices.extend(ball_vertices(&world.ball, world.settings.glow_radius));
    vertices
}

pub fn polygon_vertices(polygon: &Polygon, line_width: f32) -> Vec<Vertex> {
    shapes::closed_stroke(polygon.points(), line_width, polygon.color, JOIN_SEGMENTS)
}

pub fn ball_vertices(ball: &Ball, glow_radius: f32) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    let len = ball.trail.len() as f32;
    for (i, point) in ball.trail.iter().enumerate() {
        // Oldest point is smallest and most transparent
        let ratio = (i + 1) as f32 / len;
        let color = point.color.with_alpha(ratio * TRAIL_ALPHA_SCALE);
        vertices.extend(shapes::circle(
            point.pos,
            ball.radius * ratio * TRAIL_RADIUS_SCALE,
            color,
            TRAIL_SEGMENTS,
        ));
    }

    vertices.extend(shapes::glow(
        ball.pos,
        ball.radius,
        glow_radius,
        ball.color,
        BALL_SEGMENTS,
    ));
    vertices.extend(shapes::circle(ball.pos, ball.radius, ball.color, BALL_SEGMENTS));

    vertices
}
