use crate::domain::chart::{CanvasSize, Color, PathCommand, Point};

/// Stroke parameters. `dash` is `[on, off]` in pixels, `None` draws a solid line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    pub dash: Option<[f64; 2]>,
}

impl StrokeStyle {
    pub fn solid(color: Color, width: f64) -> Self {
        Self { color, width, dash: None }
    }

    pub fn dashed(color: Color, width: f64, dash: [f64; 2]) -> Self {
        Self { color, width, dash: Some(dash) }
    }
}

/// 2D immediate-mode drawing target. Colors carry their own alpha.
pub trait DrawSurface {
    fn clear(&mut self, size: CanvasSize);
    fn fill_path(&mut self, path: &[PathCommand], color: Color);
    fn stroke_path(&mut self, path: &[PathCommand], style: &StrokeStyle);
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);
    fn fill_rect(&mut self, origin: Point, width: f64, height: f64, color: Color);
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    fn clear(&mut self, size: CanvasSize) {
        (**self).clear(size)
    }

    fn fill_path(&mut self, path: &[PathCommand], color: Color) {
        (**self).fill_path(path, color)
    }

    fn stroke_path(&mut self, path: &[PathCommand], style: &StrokeStyle) {
        (**self).stroke_path(path, style)
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        (**self).fill_circle(center, radius, color)
    }

    fn fill_rect(&mut self, origin: Point, width: f64, height: f64, color: Color) {
        (**self).fill_rect(origin, width, height, color)
    }
}
