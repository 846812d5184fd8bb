//! Folio FX - interactive behavior layer for a portfolio page
//!
//! Core modules:
//! - `field`: Particle-network background simulation
//! - `carousel`: Horizontal project navigator state machine
//! - `reveal`: One-shot scroll-triggered reveal bookkeeping
//! - `effects`: Cursor follower, tilt-on-hover, typewriter
//! - `render`: Drawing surface abstraction (Canvas 2D on wasm)
//! - `tuning`: Data-driven constants
//!
//! Everything outside `dom` and `render::canvas` is pure and deterministic:
//! no timers, no DOM, no wall clock. Time-dependent components take a
//! `now_ms: f64` timestamp so tests can drive them with a synthetic clock.

pub mod carousel;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod effects;
pub mod field;
pub mod render;
pub mod reveal;
pub mod tuning;

pub use carousel::{Carousel, NavOutcome};
pub use field::{Particle, ParticleField};
pub use tuning::Tuning;

use glam::Vec2;

/// Baseline constants. `tuning` builds its defaults from these.
pub mod consts {
    /// Viewport area per particle (count = area / divisor)
    pub const PARTICLE_DENSITY_DIVISOR: f32 = 9000.0;
    /// Pointer repulsion radius
    pub const REPULSE_RADIUS: f32 = 150.0;
    /// Constant repulsion step per axis component
    pub const REPULSE_STEP: f32 = 1.0;
    /// Particle radius range
    pub const PARTICLE_MIN_RADIUS: f32 = 1.0;
    pub const PARTICLE_MAX_RADIUS: f32 = 3.0;
    /// Velocity component magnitude bound
    pub const PARTICLE_MAX_SPEED: f32 = 0.5;
    /// Squared-distance scale for link opacity falloff
    pub const LINK_FALLOFF: f32 = 20000.0;
    /// Link cutoff is (width / divisor) * (height / divisor), in squared units
    pub const LINK_CELL_DIVISOR: f32 = 7.0;

    /// Wheel coalescing window
    pub const WHEEL_WINDOW_MS: f64 = 50.0;
    /// Horizontal displacement before a touch gesture navigates
    pub const SWIPE_THRESHOLD: f32 = 50.0;
    /// Transition settle delay before new navigation is accepted
    pub const SETTLE_MS: f64 = 800.0;

    /// Typewriter cadence
    pub const TYPE_INTERVAL_MS: f64 = 50.0;
    /// Maximum tilt, degrees
    pub const TILT_MAX_DEG: f32 = 10.0;
    /// Scale applied while tilted
    pub const TILT_SCALE: f32 = 1.02;
    /// Cursor outline trailing time
    pub const CURSOR_EASE_MS: f32 = 500.0;
    /// Per-item reveal stagger
    pub const REVEAL_STAGGER_MS: f64 = 150.0;
}

/// Page-wide pointer position, written by pointer-move events only.
/// Readers (the particle field, the cursor follower) get an `Option<Vec2>`
/// and cannot mutate it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    pos: Option<Vec2>,
}

impl PointerState {
    pub fn new() -> Self {
        Self { pos: None }
    }

    /// Record a pointer-move event
    pub fn set(&mut self, x: f32, y: f32) {
        self.pos = Some(Vec2::new(x, y));
    }

    /// Pointer left the page
    pub fn clear(&mut self) {
        self.pos = None;
    }

    /// Current position, if the pointer has been seen
    #[inline]
    pub fn get(&self) -> Option<Vec2> {
        self.pos
    }
}
