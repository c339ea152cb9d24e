//! The bouncing ball

use std::collections::VecDeque;

use glam::Vec2;
use rand::Rng;

use super::collision::{ball_edge_collision, reflect_velocity};
use crate::color::Color;

/// Trail point for ball rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub pos: Vec2,
    pub color: Color,
}

/// How a wall hit changes the ball's velocity
#[derive(Debug, Clone, Copy)]
pub struct Bounce {
    /// Speed multiplier after reflection
    pub speed_growth: f32,
    /// Total span of the random nudge along the wall
    pub lateral_jitter: f32,
}

#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
    /// Recent positions, oldest first
    pub trail: VecDeque<TrailPoint>,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Color) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
            trail: VecDeque::new(),
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Record current position to trail, dropping the oldest beyond `max_len`
    pub fn record_trail(&mut self, max_len: usize) {
        self.trail.push_back(TrailPoint {
            pos: self.pos,
            color: self.color,
        });
        while self.trail.len() > max_len {
            self.trail.pop_front();
        }
    }

    /// Scale velocity down uniformly so speed is at most `max_speed`
    pub fn clamp_speed(&mut self, max_speed: f32) {
        let speed = self.speed();
        if speed > max_speed {
            self.vel *= max_speed / speed;
        }
    }

    /// Resolve contact with the edge `p1 -> p2` of a polygon centered at `center`
    ///
    /// Any overlap is pushed out along the wall normal. The velocity is only
    /// reflected (and the hit reported) when the ball is moving into the
    /// wall, so a ball already heading away is never bounced twice.
    pub fn collide_edge<R: Rng + ?Sized>(
        &mut self,
        p1: Vec2,
        p2: Vec2,
        center: Vec2,
        bounce: Bounce,
        rng: &mut R,
    ) -> bool {
        let contact = ball_edge_collision(self.pos, self.radius, p1, p2, center);
        if !contact.hit {
            return false;
        }

        self.pos += contact.normal * contact.penetration;

        if self.vel.dot(contact.normal) >= 0.0 {
            return false;
        }

        self.vel = reflect_velocity(self.vel, contact.normal) * bounce.speed_growth;

        // Nudge along the wall; leaves the normal component untouched
        let tangent = (p2 - p1).normalize_or_zero();
        let nudge = (rng.random::<f32>() - 0.5) * bounce.lateral_jitter;
        self.vel += tangent * nudge;

        true
    }

    /// Put the ball back at `center`, at rest
    pub fn recenter(&mut self, center: Vec2) {
        self.pos = center;
        self.vel = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::palette;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const P1: Vec2 = Vec2::new(0.0, 100.0);
    const P2: Vec2 = Vec2::new(200.0, 100.0);
    const CENTER: Vec2 = Vec2::new(100.0, 0.0);
    const BOUNCE: Bounce = Bounce {
        speed_growth: 1.01,
        lateral_jitter: 0.5,
    };

    fn ball_at(pos: Vec2, vel: Vec2) -> Ball {
        Ball::new(pos, vel, 12.0, palette::BALL)
    }

    #[test]
    fn test_trail_evicts_oldest() {
        let mut ball = ball_at(Vec2::ZERO, Vec2::ZERO);
        for i in 0..15 {
            ball.pos = Vec2::new(i as f32, 0.0);
            ball.record_trail(10);
        }
        assert_eq!(ball.trail.len(), 10);
        assert_eq!(ball.trail.front().unwrap().pos.x, 5.0);
        assert_eq!(ball.trail.back().unwrap().pos.x, 14.0);
    }

    #[test]
    fn test_bounce_off_floor() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ball = ball_at(Vec2::new(50.0, 95.0), Vec2::new(0.0, 5.0));

        assert!(ball.collide_edge(P1, P2, CENTER, BOUNCE, &mut rng));
        // Pushed out to exactly one radius above the floor
        assert!((ball.pos.y - 88.0).abs() < 1e-4);
        // Now moving up, 1% faster
        assert!((ball.vel.y + 5.05).abs() < 1e-4);
        assert!(ball.vel.x.abs() <= 0.25);
    }

    #[test]
    fn test_moving_away_is_pushed_but_not_reflected() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ball = ball_at(Vec2::new(50.0, 95.0), Vec2::new(1.0, -3.0));

        assert!(!ball.collide_edge(P1, P2, CENTER, BOUNCE, &mut rng));
        assert!((ball.pos.y - 88.0).abs() < 1e-4);
        assert_eq!(ball.vel, Vec2::new(1.0, -3.0));
    }

    #[test]
    fn test_no_contact_leaves_ball_alone() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut ball = ball_at(Vec2::new(50.0, 50.0), Vec2::new(0.0, 5.0));
        assert!(!ball.collide_edge(P1, P2, CENTER, BOUNCE, &mut rng));
        assert_eq!(ball.pos, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_recenter() {
        let mut ball = ball_at(Vec2::new(900.0, 900.0), Vec2::new(3.0, 3.0));
        ball.recenter(CENTER);
        assert_eq!(ball.pos, CENTER);
        assert_eq!(ball.vel, Vec2::ZERO);
    }

    proptest! {
        #[test]
        fn clamped_speed_never_exceeds_max(
            vx in -500.0f32..500.0,
            vy in -500.0f32..500.0,
            max in 0.5f32..100.0,
        ) {
            let mut ball = ball_at(Vec2::ZERO, Vec2::new(vx, vy));
            let before = ball.vel;
            ball.clamp_speed(max);
            prop_assert!(ball.speed() <= max * (1.0 + 1e-5));
            // Direction is preserved
            prop_assert!(ball.vel.perp_dot(before).abs() <= before.length() * 1e-3 + 1e-3);
        }

        #[test]
        fn trail_never_exceeds_max(records in 0usize..100, max in 1usize..30) {
            let mut ball = ball_at(Vec2::ZERO, Vec2::ZERO);
            for _ in 0..records {
                ball.record_trail(max);
                prop_assert!(ball.trail.len() <= max);
            }
        }

        #[test]
        fn resolved_bounce_points_away_from_wall(
            x in 0.0f32..200.0,
            depth in 0.1f32..11.9,
            vx in -20.0f32..20.0,
            vy in 0.01f32..20.0,
            seed in any::<u64>(),
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut ball = ball_at(Vec2::new(x, 100.0 - 12.0 + depth), Vec2::new(vx, vy));
            if ball.collide_edge(P1, P2, CENTER, BOUNCE, &mut rng) {
                // Interior normal is (0, -1)
                prop_assert!(ball.vel.y < 0.0);
            }
        }
    }
}
