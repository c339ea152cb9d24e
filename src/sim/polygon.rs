//! Regular polygon arena
//!
//! Vertices are derived data: they are recomputed from center, radius,
//! rotation and side count whenever any of those change.

use glam::Vec2;

use crate::color::Color;
use crate::consts::{MIN_SIDES, POLYGON_ROTATION};
use crate::polar_to_cartesian;

#[derive(Debug, Clone)]
pub struct Polygon {
    sides: u32,
    /// Angle of the first vertex (radians)
    rotation: f32,
    pub color: Color,
    center: Vec2,
    radius: f32,
    points: Vec<Vec2>,
}

impl Polygon {
    /// Side counts below three are raised to three
    pub fn new(sides: u32, center: Vec2, radius: f32, color: Color) -> Self {
        let mut polygon = Self {
            sides: sides.max(MIN_SIDES),
            rotation: POLYGON_ROTATION,
            color,
            center,
            radius,
            points: Vec::new(),
        };
        polygon.update_points();
        polygon
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Move/scale the polygon (viewport resize)
    pub fn set_geometry(&mut self, center: Vec2, radius: f32) {
        self.center = center;
        self.radius = radius;
        self.update_points();
    }

    /// Add one side
    pub fn grow(&mut self) {
        self.sides += 1;
        self.update_points();
    }

    /// Edges as (start, end) pairs, closing back to the first vertex
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Text for the side counter
    pub fn label(&self) -> String {
        format!("{} SIDES", self.sides)
    }

    fn update_points(&mut self) {
        let (center, radius, rotation) = (self.center, self.radius, self.rotation);
        let step = std::f32::consts::TAU / self.sides as f32;
        self.points.clear();
        self.points.extend(
            (0..self.sides).map(|i| center + polar_to_cartesian(radius, rotation + i as f32 * step)),
        );
    }
}
