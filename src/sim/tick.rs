//! Per-frame simulation step
//!
//! Advances the ball by one frame: gravity, trail, speed clamp, then
//! sub-stepped integration with a collision pass after every sub-step.

use super::state::{SimEvent, World};
use crate::color::Color;

/// Advance the world by one frame
pub fn tick(world: &mut World) {
    let bounce = world.bounce();
    let World {
        settings,
        polygon,
        ball,
        rng,
        events,
        frame,
        collisions,
        ..
    } = world;

    *frame += 1;

    ball.vel.y += settings.gravity;
    ball.record_trail(settings.trail_length);
    ball.clamp_speed(settings.max_speed);

    let substeps = settings.substeps.max(1);
    let step = 1.0 / substeps as f32;
    let center = polygon.center();

    for _ in 0..substeps {
        ball.pos += ball.vel * step;

        // First wall hit wins; the rest of the frame's motion is dropped
        let hit = polygon
            .edges()
            .position(|(p1, p2)| ball.collide_edge(p1, p2, center, bounce, &mut *rng));

        if let Some(edge) = hit {
            polygon.grow();
            let color = Color::random_neon(&mut *rng);
            polygon.color = color;
            ball.color = color;
            *collisions += 1;

            events.push(SimEvent::WallHit {
                edge,
                speed: ball.speed(),
            });
            events.push(SimEvent::Grew {
                sides: polygon.sides(),
            });
            log::debug!(
                "Wall hit on edge {} at speed {:.2}, now {} sides",
                edge,
                ball.speed(),
                polygon.sides()
            );
            break;
        }
    }

    if ball.pos.distance(center) > polygon.radius() + settings.recenter_margin {
        log::warn!(
            "Ball escaped to ({:.1}, {:.1}), recentering",
            ball.pos.x,
            ball.pos.y
        );
        ball.recenter(center);
        events.push(SimEvent::Recentered);
    }
}
