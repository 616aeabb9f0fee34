use super::surface::{DrawSurface, StrokeStyle};
use crate::domain::chart::{CanvasSize, Color, PathCommand, Point};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(CanvasSize),
    FillPath { path: Vec<PathCommand>, color: Color },
    StrokePath { path: Vec<PathCommand>, style: StrokeStyle },
    FillCircle { center: Point, radius: f64, color: Color },
    FillRect { origin: Point, width: f64, height: f64, color: Color },
}

impl DrawOp {
    pub fn kind(&self) -> &'static str {
        match self {
            DrawOp::Clear(_) => "clear",
            DrawOp::FillPath { .. } => "fill_path",
            DrawOp::StrokePath { .. } => "stroke_path",
            DrawOp::FillCircle { .. } => "fill_circle",
            DrawOp::FillRect { .. } => "fill_rect",
        }
    }
}

/// Headless surface that keeps every call, for tests and offline inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn kinds(&self) -> Vec<&'static str> {
        self.ops.iter().map(DrawOp::kind).collect()
    }

    pub fn count(&self, kind: &str) -> usize {
        self.ops.iter().filter(|op| op.kind() == kind).count()
    }

    pub fn reset(&mut self) {
        self.ops.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, size: CanvasSize) {
        self.ops.push(DrawOp::Clear(size));
    }

    fn fill_path(&mut self, path: &[PathCommand], color: Color) {
        self.ops.push(DrawOp::FillPath { path: path.to_vec(), color });
    }

    fn stroke_path(&mut self, path: &[PathCommand], style: &StrokeStyle) {
        self.ops.push(DrawOp::StrokePath { path: path.to_vec(), style: *style });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.ops.push(DrawOp::FillCircle { center, radius, color });
    }

    fn fill_rect(&mut self, origin: Point, width: f64, height: f64, color: Color) {
        self.ops.push(DrawOp::FillRect { origin, width, height, color });
    }
}
