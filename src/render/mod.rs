//! Drawing surface abstraction
//!
//! The particle field draws through the `Surface` trait so the simulation
//! never touches the platform. Backends:
//! - `canvas` (wasm): HTML Canvas 2D context
//! - `record`: stores draw ops in a Vec, for tests and the headless demo

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod record;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use record::{DrawOp, RecordingSurface};

use glam::Vec2;

/// An RGB color with an alpha channel in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with a different alpha, clamped to [0, 1]
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba(...)` string
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Primitive operations the effects need from a render target.
pub trait Surface {
    /// Clear the whole surface
    fn clear(&mut self, width: f32, height: f32);

    /// Draw a filled circle
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Draw a stroked line segment
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_alpha_clamps() {
        let c = Rgba::opaque(139, 92, 246);
        assert_eq!(c.with_alpha(0.5).a, 0.5);
        assert_eq!(c.with_alpha(-0.3).a, 0.0);
        assert_eq!(c.with_alpha(7.0).a, 1.0);
    }

    #[test]
    fn test_css_format() {
        let c = Rgba::opaque(6, 182, 212).with_alpha(0.25);
        assert_eq!(c.css(), "rgba(6, 182, 212, 0.25)");
    }
}
