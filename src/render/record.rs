//! Recording surface for tests and the headless demo

use glam::Vec2;

use super::{Rgba, Surface};

/// A single recorded draw operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear { width: f32, height: f32 },
    Circle { center: Vec2, radius: f32, color: Rgba },
    Line { from: Vec2, to: Vec2, color: Rgba, width: f32 },
}

/// Surface that stores every operation instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.ops.clear();
    }

    /// Recorded circles, in draw order
    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Rgba)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Circle {
                center,
                radius,
                color,
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    /// Recorded lines, in draw order
    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, Rgba)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Line {
                from, to, color, ..
            } => Some((*from, *to, *color)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ops.push(DrawOp::Clear { width, height });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            color,
            width,
        });
    }
}
