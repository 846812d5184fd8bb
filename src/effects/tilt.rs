//! Tilt-on-hover transform

use glam::Vec2;

/// A perspective tilt to apply to a hovered card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltTransform {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
    pub scale: f32,
}

impl TiltTransform {
    /// The rest pose (pointer left the element).
    pub const RESET: Self = Self {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
        scale: 1.0,
    };

    /// CSS transform string
    pub fn css(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) scale3d({s}, {s}, {s})",
            self.rotate_x_deg,
            self.rotate_y_deg,
            s = self.scale
        )
    }
}

/// Tilt for a pointer at `local` inside an element of `size`. The element
/// leans toward the pointer, up to `max_deg` at the edges. Degenerate sizes
/// reset instead of dividing by zero.
pub fn tilt_for(local: Vec2, size: Vec2, max_deg: f32, scale: f32) -> TiltTransform {
    if size.x <= 0.0 || size.y <= 0.0 {
        return TiltTransform::RESET;
    }
    let center = size / 2.0;
    let rotate_x = ((local.y - center.y) / center.y) * -max_deg;
    let rotate_y = ((local.x - center.x) / center.x) * max_deg;
    TiltTransform {
        rotate_x_deg: rotate_x.clamp(-max_deg, max_deg),
        rotate_y_deg: rotate_y.clamp(-max_deg, max_deg),
        scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_flat() {
        let t = tilt_for(Vec2::new(100.0, 50.0), Vec2::new(200.0, 100.0), 10.0, 1.02);
        assert_eq!(t.rotate_x_deg, 0.0);
        assert_eq!(t.rotate_y_deg, 0.0);
        assert_eq!(t.scale, 1.02);
    }

    #[test]
    fn test_corners_hit_max_tilt() {
        let size = Vec2::new(200.0, 100.0);
        let t = tilt_for(Vec2::new(200.0, 0.0), size, 10.0, 1.02);
        assert_eq!(t.rotate_x_deg, 10.0);
        assert_eq!(t.rotate_y_deg, 10.0);

        let t = tilt_for(Vec2::new(0.0, 100.0), size, 10.0, 1.02);
        assert_eq!(t.rotate_x_deg, -10.0);
        assert_eq!(t.rotate_y_deg, -10.0);
    }

    #[test]
    fn test_pointer_outside_clamps() {
        let t = tilt_for(Vec2::new(500.0, -50.0), Vec2::new(200.0, 100.0), 10.0, 1.02);
        assert!(t.rotate_y_deg <= 10.0);
        assert!(t.rotate_x_deg <= 10.0);
    }

    #[test]
    fn test_zero_size_resets() {
        assert_eq!(
            tilt_for(Vec2::new(5.0, 5.0), Vec2::ZERO, 10.0, 1.02),
            TiltTransform::RESET
        );
    }

    #[test]
    fn test_css_reset_string() {
        assert_eq!(
            TiltTransform::RESET.css(),
            "perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1, 1, 1)"
        );
    }
}
