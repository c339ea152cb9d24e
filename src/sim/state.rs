//! World state: one polygon, one ball, the RNG that colors them

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::ball::{Ball, Bounce};
use super::polygon::Polygon;
use crate::layout::Layout;
use crate::settings::Settings;

/// Things that happened during a frame, drained by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimEvent {
    /// Ball bounced off edge `edge` (index of its first vertex)
    WallHit { edge: usize, speed: f32 },
    /// Polygon gained a side
    Grew { sides: u32 },
    /// Ball escaped and was put back at the center
    Recentered,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    pub settings: Settings,
    pub layout: Layout,
    pub polygon: Polygon,
    pub ball: Ball,
    pub(crate) rng: Pcg32,
    seed: u64,
    /// Frames simulated since init/reset
    pub frame: u64,
    /// Wall hits since init/reset
    pub collisions: u64,
    pub(crate) events: Vec<SimEvent>,
}

impl World {
    /// Create a fresh world; the seed fully determines the run
    pub fn new(settings: Settings, layout: Layout, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let polygon = Self::spawn_polygon(&settings, &layout);
        let ball = Self::spawn_ball(&settings, &layout, &mut rng);

        Self {
            settings,
            layout,
            polygon,
            ball,
            rng,
            seed,
            frame: 0,
            collisions: 0,
            events: Vec::new(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Discard polygon and ball and start over with a new seed
    pub fn reset(&mut self, seed: u64) {
        *self = Self::new(self.settings.clone(), self.layout, seed);
    }

    /// Refit the polygon to a new viewport; the ball stays where it is
    pub fn resize(&mut self, layout: Layout) {
        self.layout = layout;
        self.polygon.set_geometry(layout.center, layout.radius);
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, SimEvent> {
        self.events.drain(..)
    }

    pub(crate) fn bounce(&self) -> Bounce {
        Bounce {
            speed_growth: self.settings.speed_growth,
            lateral_jitter: self.settings.lateral_jitter,
        }
    }

    fn spawn_polygon(settings: &Settings, layout: &Layout) -> Polygon {
        Polygon::new(
            settings.initial_sides,
            layout.center,
            layout.radius,
            settings.polygon_color(),
        )
    }

    fn spawn_ball(settings: &Settings, layout: &Layout, rng: &mut Pcg32) -> Ball {
        let pos = layout.center - Vec2::new(0.0, settings.spawn_offset);
        let vx = (rng.random::<f32>() - 0.5) * settings.spawn_vx_span;
        let vel = Vec2::new(vx, settings.spawn_vy);
        Ball::new(pos, vel, settings.ball_radius, settings.ball_color())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world(seed: u64) -> World {
        World::new(Settings::default(), Layout::from_viewport(1280.0, 720.0), seed)
    }

    #[test]
    fn test_new_world() {
        let world = world(42);
        assert_eq!(world.polygon.sides(), 3);
        assert_eq!(world.polygon.center(), world.layout.center);
        assert_eq!(world.ball.pos, world.layout.center - Vec2::new(0.0, 50.0));
        assert_eq!(world.ball.vel.y, -4.0);
        assert!(world.ball.vel.x.abs() <= 4.0);
        assert!(world.ball.trail.is_empty());
        assert_eq!(world.seed(), 42);
    }

    #[test]
    fn test_same_seed_same_spawn() {
        assert_eq!(world(7).ball.vel, world(7).ball.vel);
    }

    #[test]
    fn test_reset_recreates_entities() {
        let mut world = world(1);
        world.polygon.grow();
        world.ball.record_trail(10);
        world.collisions = 5;

        world.reset(2);
        assert_eq!(world.polygon.sides(), 3);
        assert!(world.ball.trail.is_empty());
        assert_eq!(world.collisions, 0);
        assert_eq!(world.seed(), 2);
    }

    #[test]
    fn test_resize_moves_polygon_not_ball() {
        let mut world = world(1);
        let ball_pos = world.ball.pos;
        world.polygon.grow();

        let layout = Layout::from_viewport(400.0, 800.0);
        world.resize(layout);
        assert_eq!(world.polygon.center(), layout.center);
        assert_eq!(world.polygon.radius(), layout.radius);
        assert_eq!(world.polygon.sides(), 4);
        assert_eq!(world.ball.pos, ball_pos);
    }
}
