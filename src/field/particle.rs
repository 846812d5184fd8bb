//! Particle entity

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::render::Rgba;
use crate::tuning::FieldTuning;

/// Accent palette the particles are drawn from
pub const PALETTE: [Rgba; 3] = [
    Rgba::opaque(217, 70, 239),
    Rgba::opaque(139, 92, 246),
    Rgba::opaque(6, 182, 212),
];

/// Connective lines use the violet accent
pub const LINK_COLOR: Rgba = PALETTE[1];

/// A single moving point of the background network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

impl Particle {
    /// Spawn at a uniform-random position inset from the edges, with a small
    /// uniform-random velocity and a palette color.
    pub fn spawn(rng: &mut Pcg32, bounds: Vec2, tuning: &FieldTuning) -> Self {
        // Degenerate tuning ranges collapse instead of panicking
        let radius = if tuning.max_radius > tuning.min_radius {
            rng.random_range(tuning.min_radius..tuning.max_radius)
        } else {
            tuning.min_radius
        };
        let inset = radius * 2.0;
        let pos = Vec2::new(
            spawn_coord(rng, bounds.x, inset),
            spawn_coord(rng, bounds.y, inset),
        );
        let s = tuning.max_speed;
        let vel = if s > 0.0 {
            Vec2::new(rng.random_range(-s..s), rng.random_range(-s..s))
        } else {
            Vec2::ZERO
        };
        let color = PALETTE[rng.random_range(0..PALETTE.len())];

        Self {
            pos,
            vel,
            radius,
            color,
        }
    }

    /// Advance one tick: reflect at the edges, integrate, repel from the
    /// pointer. Reads only its own state and the pointer, so particle update
    /// order never changes the outcome.
    pub fn step(&mut self, bounds: Vec2, pointer: Option<Vec2>, tuning: &FieldTuning) {
        // Reflect when the next position would cross an edge
        let next = self.pos + self.vel;
        if next.x < 0.0 || next.x > bounds.x {
            self.vel.x = -self.vel.x;
        }
        if next.y < 0.0 || next.y > bounds.y {
            self.vel.y = -self.vel.y;
        }
        self.pos += self.vel;

        // Constant-speed push directly away from the pointer
        if let Some(mouse) = pointer {
            if self.pos.distance(mouse) < tuning.repulse_radius {
                let angle = (mouse.y - self.pos.y).atan2(mouse.x - self.pos.x);
                self.pos.x -= angle.cos() * tuning.repulse_step;
                self.pos.y -= angle.sin() * tuning.repulse_step;
            }
        }

        // The push can land past an edge; keep the particle on the surface
        self.pos = self.pos.clamp(Vec2::ZERO, bounds);
    }
}

/// Uniform coordinate in [inset, extent - inset], degrading to the center
/// when the viewport is too small to inset.
fn spawn_coord(rng: &mut Pcg32, extent: f32, inset: f32) -> f32 {
    if extent > inset * 2.0 {
        rng.random_range(inset..extent - inset)
    } else {
        extent / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::FieldTuning;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_within_inset_bounds() {
        let tuning = FieldTuning::default();
        let bounds = Vec2::new(800.0, 600.0);
        let mut rng = Pcg32::seed_from_u64(7);

        for _ in 0..200 {
            let p = Particle::spawn(&mut rng, bounds, &tuning);
            let inset = p.radius * 2.0;
            assert!(p.pos.x >= inset && p.pos.x <= bounds.x - inset);
            assert!(p.pos.y >= inset && p.pos.y <= bounds.y - inset);
            assert!(p.radius >= tuning.min_radius && p.radius < tuning.max_radius);
            assert!(p.vel.x.abs() < tuning.max_speed);
            assert!(p.vel.y.abs() < tuning.max_speed);
            assert!(PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn test_step_reflects_at_edge() {
        let tuning = FieldTuning::default();
        let bounds = Vec2::new(100.0, 100.0);
        let mut p = Particle {
            pos: Vec2::new(99.9, 50.0),
            vel: Vec2::new(0.4, 0.0),
            radius: 2.0,
            color: PALETTE[0],
        };

        p.step(bounds, None, &tuning);
        assert!(p.vel.x < 0.0, "x velocity should have flipped");
        assert!(p.pos.x <= bounds.x);
    }

    #[test]
    fn test_repulsion_pushes_away_from_pointer() {
        let tuning = FieldTuning::default();
        let bounds = Vec2::new(500.0, 500.0);
        let mut p = Particle {
            pos: Vec2::new(250.0, 250.0),
            vel: Vec2::ZERO,
            radius: 2.0,
            color: PALETTE[0],
        };
        let mouse = Vec2::new(300.0, 250.0);

        let before = p.pos.distance(mouse);
        p.step(bounds, Some(mouse), &tuning);
        assert!(p.pos.distance(mouse) > before);
    }

    #[test]
    fn test_pointer_outside_radius_is_ignored() {
        let tuning = FieldTuning::default();
        let bounds = Vec2::new(500.0, 500.0);
        let mut p = Particle {
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::ZERO,
            radius: 2.0,
            color: PALETTE[0],
        };

        p.step(bounds, Some(Vec2::new(400.0, 400.0)), &tuning);
        assert_eq!(p.pos, Vec2::new(100.0, 100.0));
    }
}
