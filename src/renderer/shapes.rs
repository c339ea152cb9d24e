//! Shape generation for 2D primitives
//!
//! Everything is tessellated into a plain triangle list in screen pixels.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;
use crate::color::Color;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to edge
        vertices.push(Vertex::at(center, color));
        vertices.push(Vertex::at(center + Vec2::from_angle(theta1) * radius, color));
        vertices.push(Vertex::at(center + Vec2::from_angle(theta2) * radius, color));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
///
/// `inner_color` and `outer_color` are interpolated across the band.
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    inner_color: Color,
    outer_color: Color,
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let dir1 = Vec2::from_angle((i as f32 / segments as f32) * TAU);
        let dir2 = Vec2::from_angle(((i + 1) as f32 / segments as f32) * TAU);

        let inner1 = Vertex::at(center + dir1 * inner_radius, inner_color);
        let outer1 = Vertex::at(center + dir1 * outer_radius, outer_color);
        let inner2 = Vertex::at(center + dir2 * inner_radius, inner_color);
        let outer2 = Vertex::at(center + dir2 * outer_radius, outer_color);

        // Two triangles per segment
        vertices.extend_from_slice(&[inner1, outer1, inner2, inner2, outer1, outer2]);
    }

    vertices
}

/// Stroke a closed loop of points with round joins
pub fn closed_stroke(points: &[Vec2], width: f32, color: Color, join_segments: u32) -> Vec<Vertex> {
    if points.len() < 2 || width <= 0.0 {
        return Vec::new();
    }

    let half = width / 2.0;
    let mut vertices = Vec::with_capacity(points.len() * (6 + join_segments as usize * 3));

    for (i, &p1) in points.iter().enumerate() {
        let p2 = points[(i + 1) % points.len()];
        let perp = (p2 - p1).normalize_or_zero().perp() * half;

        let a = Vertex::at(p1 + perp, color);
        let b = Vertex::at(p1 - perp, color);
        let c = Vertex::at(p2 + perp, color);
        let d = Vertex::at(p2 - perp, color);
        vertices.extend_from_slice(&[a, b, c, c, b, d]);

        // Round join at each corner
        vertices.extend(circle(p1, half, color, join_segments));
    }

    vertices
}

/// Soft halo around a disc, fading from `color` at `radius` to clear at
/// `radius + spread`
pub fn glow(center: Vec2, radius: f32, spread: f32, color: Color, segments: u32) -> Vec<Vertex> {
    if spread <= 0.0 {
        return Vec::new();
    }
    ring(
        center,
        radius,
        radius + spread,
        color.with_alpha(color.a * 0.6),
        color.with_alpha(0.0),
        segments,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::palette;

    #[test]
    fn test_circle_vertex_count_and_extent() {
        let verts = circle(Vec2::new(10.0, 10.0), 5.0, palette::BALL, 16);
        assert_eq!(verts.len(), 48);
        for v in &verts {
            let d = Vec2::from(v.position).distance(Vec2::new(10.0, 10.0));
            assert!(d <= 5.0 + 1e-4);
        }
    }

    #[test]
    fn test_closed_stroke_covers_every_edge() {
        let square = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        let verts = closed_stroke(&square, 2.0, palette::POLYGON, 8);
        assert_eq!(verts.len(), 4 * (6 + 8 * 3));
        assert!(closed_stroke(&square[..1], 2.0, palette::POLYGON, 8).is_empty());
    }

    #[test]
    fn test_glow_fades_out() {
        let verts = glow(Vec2::ZERO, 10.0, 20.0, palette::BALL, 12);
        assert_eq!(verts.len(), 12 * 6);
        let outer_alpha = verts
            .iter()
            .filter(|v| Vec2::from(v.position).length() > 25.0)
            .map(|v| v.color[3]);
        for a in outer_alpha {
            assert_eq!(a, 0.0);
        }
        assert!(glow(Vec2::ZERO, 10.0, 0.0, palette::BALL, 12).is_empty());
    }
}
