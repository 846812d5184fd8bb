//! Particle-network background
//!
//! Owns the particle set, advances physics each frame, and renders particles
//! plus connective lines between nearby pairs. The module is pure:
//! - Seeded RNG only (`Pcg32`)
//! - No platform or timer dependencies
//! - `step` and `draw` are separate so tests can tick without a surface
//!
//! The connective-line pass is O(N²) per frame. N is derived from viewport
//! area (a few hundred at desktop sizes), which keeps this affordable; it is
//! a known scalability ceiling, not something to spatially partition away.

pub mod particle;

pub use particle::{LINK_COLOR, PALETTE, Particle};

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::render::Surface;
use crate::tuning::FieldTuning;

/// A connective line between two particles, by index, with its opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: f32,
}

/// The simulated particle collection for one viewport.
pub struct ParticleField {
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    rng: Pcg32,
    tuning: FieldTuning,
}

impl ParticleField {
    /// Build a field for the given viewport and populate it.
    pub fn new(width: f32, height: f32, seed: u64, tuning: FieldTuning) -> Self {
        let mut field = Self {
            width,
            height,
            particles: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        };
        field.populate();
        field
    }

    /// Particle count for a viewport: area / density divisor.
    pub fn count_for(width: f32, height: f32, tuning: &FieldTuning) -> usize {
        let area = width * height;
        if area <= 0.0 || tuning.density_divisor <= 0.0 {
            return 0;
        }
        (area / tuning.density_divisor) as usize
    }

    /// Discard every particle and respawn the full set for the current
    /// viewport. The RNG stream continues across epochs.
    fn populate(&mut self) {
        let bounds = Vec2::new(self.width, self.height);
        let count = Self::count_for(self.width, self.height, &self.tuning);
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle::spawn(&mut self.rng, bounds, &self.tuning));
        }
        self.particles = particles;
        log::debug!(
            "particle field populated: {}x{} -> {} particles",
            self.width,
            self.height,
            self.particles.len()
        );
    }

    /// Viewport resized: full re-initialization, no particle survives.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.populate();
    }

    /// Advance every particle one tick. Each particle reads only the pointer
    /// and its own state, never a neighbor's already-updated position.
    pub fn step(&mut self, pointer: Option<Vec2>) {
        let bounds = Vec2::new(self.width, self.height);
        for p in &mut self.particles {
            p.step(bounds, pointer, &self.tuning);
        }
    }

    /// Connective lines for the current positions: every unordered pair
    /// closer (squared) than `(w/7)*(h/7)`, opacity falling off linearly
    /// with squared distance and clamped to [0, 1].
    pub fn links(&self) -> Vec<Link> {
        let d = self.tuning.link_cell_divisor;
        let cutoff = (self.width / d) * (self.height / d);
        let mut links = Vec::new();

        for a in 0..self.particles.len() {
            for b in (a + 1)..self.particles.len() {
                let d2 = self.particles[a].pos.distance_squared(self.particles[b].pos);
                if d2 < cutoff {
                    links.push(Link {
                        a,
                        b,
                        alpha: link_alpha(d2, self.tuning.link_falloff),
                    });
                }
            }
        }
        links
    }

    /// Render one frame: clear, particles, then connective lines.
    pub fn draw<S: Surface>(&self, surface: &mut S) {
        surface.clear(self.width, self.height);
        for p in &self.particles {
            surface.fill_circle(p.pos, p.radius, p.color);
        }
        for link in self.links() {
            surface.stroke_line(
                self.particles[link.a].pos,
                self.particles[link.b].pos,
                LINK_COLOR.with_alpha(link.alpha),
                1.0,
            );
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

/// Linear opacity falloff in squared distance, clamped to [0, 1].
#[inline]
fn link_alpha(dist_sq: f32, falloff: f32) -> f32 {
    (1.0 - dist_sq / falloff).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawOp, RecordingSurface};
    use proptest::prelude::*;

    fn field(width: f32, height: f32, seed: u64) -> ParticleField {
        ParticleField::new(width, height, seed, FieldTuning::default())
    }

    #[test]
    fn test_count_from_viewport_area() {
        let f = field(900.0, 900.0, 1);
        assert_eq!(f.len(), 90);
    }

    #[test]
    fn test_resize_discards_and_repopulates() {
        let mut f = field(900.0, 900.0, 1);
        let before: Vec<_> = f.particles().to_vec();
        f.resize(1800.0, 1800.0);
        assert_eq!(f.len(), 360);
        // Fresh epoch: the old set is gone, not carried over
        assert!(f.particles()[..before.len()] != before[..]);
    }

    #[test]
    fn test_zero_viewport_degrades_to_nothing() {
        let f = field(0.0, 0.0, 1);
        assert!(f.is_empty());

        let mut surface = RecordingSurface::new();
        f.draw(&mut surface);
        assert_eq!(
            surface.ops,
            vec![DrawOp::Clear {
                width: 0.0,
                height: 0.0
            }]
        );
    }

    #[test]
    fn test_links_respect_cutoff() {
        let mut f = field(700.0, 700.0, 1);
        // cutoff = (700/7)*(700/7) = 10000, so pairs link under distance 100
        f.particles = vec![
            Particle {
                pos: Vec2::new(100.0, 100.0),
                vel: Vec2::ZERO,
                radius: 2.0,
                color: PALETTE[0],
            },
            Particle {
                pos: Vec2::new(150.0, 100.0),
                vel: Vec2::ZERO,
                radius: 2.0,
                color: PALETTE[1],
            },
            Particle {
                pos: Vec2::new(600.0, 600.0),
                vel: Vec2::ZERO,
                radius: 2.0,
                color: PALETTE[2],
            },
        ];

        let links = f.links();
        assert_eq!(links.len(), 1);
        assert_eq!((links[0].a, links[0].b), (0, 1));
        // d² = 2500 -> 1 - 2500/20000
        assert!((links[0].alpha - 0.875).abs() < 1e-6);
    }

    #[test]
    fn test_link_alpha_monotone_and_clamped() {
        let falloff = 20000.0;
        let mut prev = f32::INFINITY;
        for d2 in [0.0, 1000.0, 10000.0, 19999.0, 20000.0, 50000.0] {
            let a = link_alpha(d2, falloff);
            assert!((0.0..=1.0).contains(&a));
            assert!(a <= prev);
            prev = a;
        }
        // Far pairs must clamp to zero rather than go negative
        assert_eq!(link_alpha(40000.0, falloff), 0.0);
    }

    #[test]
    fn test_draw_emits_clear_circles_lines() {
        let f = field(900.0, 900.0, 3);
        let mut surface = RecordingSurface::new();
        f.draw(&mut surface);

        assert_eq!(surface.ops[0], DrawOp::Clear { width: 900.0, height: 900.0 });
        assert_eq!(surface.circles().count(), 90);
        assert_eq!(surface.lines().count(), f.links().len());
        for (_, _, color) in surface.lines() {
            assert!((0.0..=1.0).contains(&color.a));
        }
    }

    proptest! {
        #[test]
        fn prop_particles_stay_in_bounds(
            seed in 0u64..1000,
            ticks in 1usize..300,
            mx in 0.0f32..900.0,
            my in 0.0f32..900.0,
        ) {
            let mut f = field(900.0, 900.0, seed);
            for _ in 0..ticks {
                f.step(Some(Vec2::new(mx, my)));
            }
            for p in f.particles() {
                prop_assert!(p.pos.x >= 0.0 && p.pos.x <= 900.0);
                prop_assert!(p.pos.y >= 0.0 && p.pos.y <= 900.0);
            }
        }

        #[test]
        fn prop_update_order_independent_of_pointer_absence(
            seed in 0u64..1000,
            ticks in 1usize..100,
        ) {
            // Two identical fields stepped identically stay identical
            let mut f1 = field(600.0, 400.0, seed);
            let mut f2 = field(600.0, 400.0, seed);
            for _ in 0..ticks {
                f1.step(None);
                f2.step(None);
            }
            prop_assert_eq!(f1.particles(), f2.particles());
        }
    }
}
