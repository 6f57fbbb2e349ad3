use foundation::math::Vec2;

use crate::color::Color;

/// The external 2D drawing surface the composition pass targets.
///
/// The surface owns a transform stack (save/restore/translate) and two
/// primitives: stroked line segments and filled quads with an alpha in
/// `[0, 1]`. There is no depth buffer; callers are responsible for draw
/// order.
pub trait DrawSurface {
    fn clear(&mut self);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn stroke_line(&mut self, a: Vec2, b: Vec2, color: Color);
    fn fill_quad(&mut self, corners: [Vec2; 4], color: Color, alpha: f64);
}

/// A recorded surface call, for tests and headless runs.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Save,
    Restore,
    Translate { x: f64, y: f64 },
    Line { a: Vec2, b: Vec2, color: Color },
    Quad { corners: [Vec2; 4], color: Color, alpha: f64 },
}

/// Surface that records every call instead of rasterizing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. }))
    }

    pub fn quads(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Quad { .. }))
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::Translate { x, y });
    }

    fn stroke_line(&mut self, a: Vec2, b: Vec2, color: Color) {
        self.ops.push(DrawOp::Line { a, b, color });
    }

    fn fill_quad(&mut self, corners: [Vec2; 4], color: Color, alpha: f64) {
        self.ops.push(DrawOp::Quad {
            corners,
            color,
            alpha,
        });
    }
}
