//! Screen-space geometry for the two depth curves.
//!
//! Level `i` of a side sits at `center ∓ (i + 1) * (half_width / level_count)`
//! and at `height * (1 - cumulative_ratio)`. Consecutive points are joined by a
//! horizontal run at the previous height followed by a vertical rise, so the
//! curve is a staircase.

use serde::Serialize;

use super::value_objects::{CanvasSize, Point};
use crate::domain::order_book::{DepthBook, PriceLevel, Side};

/// Number of grid columns
pub const GRID_COLUMNS: usize = 4;
/// Number of grid rows
pub const GRID_ROWS: usize = 3;

/// One immediate-mode path instruction
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

impl PathCommand {
    pub fn move_to(x: f64, y: f64) -> Self {
        PathCommand::MoveTo(Point::new(x, y))
    }

    pub fn line_to(x: f64, y: f64) -> Self {
        PathCommand::LineTo(Point::new(x, y))
    }

    pub fn point(&self) -> Option<Point> {
        match self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::Close => None,
        }
    }
}

/// A level mapped into canvas pixel space, valid for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint<'a> {
    pub x: f64,
    pub y: f64,
    pub level: &'a PriceLevel,
}

impl ScreenPoint<'_> {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Horizontal position of level `index` on `side`.
pub fn level_x(side: Side, index: usize, level_count: usize, center: f64, half_width: f64) -> f64 {
    let gap = half_width / level_count as f64;
    center + side.direction() * (index + 1) as f64 * gap
}

/// Vertical position for a cumulative ratio inside a band starting at `top` with height `height`.
pub fn ratio_y(cumulative_ratio: f64, top: f64, height: f64) -> f64 {
    top + height * (1.0 - cumulative_ratio)
}

/// Outer canvas edge a side's curve extends to.
pub fn outer_edge(side: Side, size: CanvasSize) -> f64 {
    match side {
        Side::Buy => 0.0,
        Side::Sell => size.width,
    }
}

/// Points and paths for one side.
#[derive(Debug, Clone, PartialEq)]
pub struct SideGeometry<'a> {
    pub side: Side,
    pub points: Vec<ScreenPoint<'a>>,
    /// Open staircase polyline
    pub stroke: Vec<PathCommand>,
    /// Staircase closed back to the baseline, for the area fill
    pub fill: Vec<PathCommand>,
}

impl<'a> SideGeometry<'a> {
    pub fn build(side: Side, levels: &'a [PriceLevel], size: CanvasSize) -> Self {
        let count = levels.len();
        let points: Vec<ScreenPoint<'a>> = levels
            .iter()
            .enumerate()
            .map(|(i, level)| ScreenPoint {
                x: level_x(side, i, count, size.center_x(), size.half_width()),
                y: ratio_y(level.cumulative_ratio, 0.0, size.height),
                level,
            })
            .collect();

        let (stroke, fill) = match (points.first(), points.last()) {
            (Some(first), Some(last)) => {
                let baseline = size.height;
                let edge = outer_edge(side, size);

                let mut stroke = Vec::with_capacity(2 * points.len() + 1);
                stroke.push(PathCommand::move_to(first.x, baseline));
                stroke.push(PathCommand::line_to(first.x, first.y));
                for pair in points.windows(2) {
                    let (prev, next) = (&pair[0], &pair[1]);
                    stroke.push(PathCommand::line_to(next.x, prev.y));
                    stroke.push(PathCommand::line_to(next.x, next.y));
                }
                stroke.push(PathCommand::line_to(edge, last.y));

                let mut fill = Vec::with_capacity(stroke.len() + 3);
                fill.extend_from_slice(&stroke);
                fill.push(PathCommand::line_to(edge, baseline));
                fill.push(PathCommand::line_to(first.x, baseline));
                fill.push(PathCommand::Close);

                (stroke, fill)
            }
            _ => (Vec::new(), Vec::new()),
        };

        Self { side, points, stroke, fill }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Geometry of both sides for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthGeometry<'a> {
    pub size: CanvasSize,
    pub buy: SideGeometry<'a>,
    pub sell: SideGeometry<'a>,
}

impl<'a> DepthGeometry<'a> {
    pub fn build(book: &'a DepthBook, size: CanvasSize) -> Self {
        Self {
            size,
            buy: SideGeometry::build(Side::Buy, book.buys(), size),
            sell: SideGeometry::build(Side::Sell, book.sells(), size),
        }
    }

    pub fn side(&self, side: Side) -> &SideGeometry<'a> {
        match side {
            Side::Buy => &self.buy,
            Side::Sell => &self.sell,
        }
    }

    /// Buy points followed by sell points, each in its side's order.
    pub fn points(&self) -> impl Iterator<Item = &ScreenPoint<'a>> + '_ {
        self.buy.points.iter().chain(self.sell.points.iter())
    }

    pub fn point_count(&self) -> usize {
        self.buy.points.len() + self.sell.points.len()
    }

    pub fn point(&self, side: Side, index: usize) -> Option<&ScreenPoint<'a>> {
        self.side(side).points.get(index)
    }
}

/// Grid line segments: `GRID_ROWS + 1` horizontal then `GRID_COLUMNS + 1` vertical.
pub fn grid_lines(size: CanvasSize) -> Vec<[PathCommand; 2]> {
    let horizontal = (0..=GRID_ROWS).map(|i| {
        let y = size.height * i as f64 / GRID_ROWS as f64;
        [PathCommand::move_to(0.0, y), PathCommand::line_to(size.width, y)]
    });
    let vertical = (0..=GRID_COLUMNS).map(|i| {
        let x = size.width * i as f64 / GRID_COLUMNS as f64;
        [PathCommand::move_to(x, 0.0), PathCommand::line_to(x, size.height)]
    });
    horizontal.chain(vertical).collect()
}
