//! Custom cursor follower
//!
//! The dot rides the pointer exactly; the outline trails it with an
//! exponential ease so it settles over roughly the configured follow time.

use glam::Vec2;

/// Trailing outline state.
#[derive(Debug, Clone, Copy)]
pub struct CursorTrail {
    outline: Option<Vec2>,
    ease_ms: f32,
}

impl CursorTrail {
    pub fn new(ease_ms: f32) -> Self {
        Self {
            outline: None,
            ease_ms: ease_ms.max(1.0),
        }
    }

    /// Advance the outline toward `target` over `dt_ms` and return its new
    /// position. The first sighting snaps instead of easing in from nowhere.
    pub fn follow(&mut self, target: Vec2, dt_ms: f32) -> Vec2 {
        let pos = match self.outline {
            None => target,
            Some(current) => {
                // Time constant at ~1/5 of the follow window lands the
                // outline visually on target within that window
                let tau = self.ease_ms / 5.0;
                let blend = 1.0 - (-dt_ms.max(0.0) / tau).exp();
                current.lerp(target, blend)
            }
        };
        self.outline = Some(pos);
        pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sighting_snaps() {
        let mut trail = CursorTrail::new(500.0);
        let pos = trail.follow(Vec2::new(40.0, 60.0), 16.0);
        assert_eq!(pos, Vec2::new(40.0, 60.0));
    }

    #[test]
    fn test_outline_converges_monotonically() {
        let mut trail = CursorTrail::new(500.0);
        trail.follow(Vec2::ZERO, 16.0);

        let target = Vec2::new(100.0, 0.0);
        let mut prev_dist = f32::INFINITY;
        for _ in 0..60 {
            let pos = trail.follow(target, 16.0);
            let dist = pos.distance(target);
            assert!(dist < prev_dist || dist == 0.0);
            prev_dist = dist;
        }
        // Settled well within a second of frames
        assert!(prev_dist < 1.0);
    }
}
