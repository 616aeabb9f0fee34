use serde::{Deserialize, Serialize};

use super::{
    geometry::{level_x, ratio_y},
    interaction::HoverTarget,
    value_objects::{CanvasSize, Point},
};
use crate::domain::{
    number_format::{NumberFormat, format_number},
    order_book::{DepthBook, Side},
};

/// Placement rules for the tooltip anchor.
///
/// The anchor uses its own padded coordinate system: the horizontal span is
/// shrunk by `horizontal_padding` on both edges and the vertical span starts at
/// `padding_top`. It is close to, but not identical with, the drawing mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipLayout {
    pub horizontal_padding: f64,
    pub padding_top: f64,
    pub vertical_offset: f64,
    pub min_x: f64,
    pub right_margin: f64,
}

impl Default for TooltipLayout {
    fn default() -> Self {
        Self { horizontal_padding: 5.0, padding_top: 10.0, vertical_offset: 30.0, min_x: 30.0, right_margin: 60.0 }
    }
}

impl TooltipLayout {
    /// Anchor for the hovered level, or `None` if the target is out of range.
    pub fn anchor(&self, target: HoverTarget, book: &DepthBook, size: CanvasSize) -> Option<Point> {
        let levels = book.levels(target.side);
        let level = levels.get(target.index)?;

        let half_width = (size.width - self.horizontal_padding * 2.0) / 2.0;
        let x = level_x(target.side, target.index, levels.len(), self.horizontal_padding + half_width, half_width);
        // max first, then min: a very narrow canvas pins to the right margin
        let x = x.max(self.min_x).min(size.width - self.right_margin);

        let y = ratio_y(level.cumulative_ratio, self.padding_top, size.height - self.padding_top) - self.vertical_offset;

        Some(Point::new(x, y.max(0.0)))
    }
}

/// Tooltip body for the hovered level
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub side: Side,
    pub index: usize,
    pub anchor: Point,
    pub price: String,
    pub quantity: String,
    pub total: String,
}

impl Tooltip {
    /// Looks the level up in its own side's list using the per-side index.
    pub fn describe(target: HoverTarget, anchor: Point, book: &DepthBook) -> Option<Self> {
        let level = book.level(target.side, target.index)?;
        Some(Self {
            side: target.side,
            index: target.index,
            anchor,
            price: format_number(&level.price, &NumberFormat::price()),
            quantity: format_number(&level.quantity, &NumberFormat::volume()),
            total: format_number(&level.cumulative_quantity, &NumberFormat::volume()),
        })
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Side: {}", self.side),
            format!("Index: {}", self.index),
            format!("Price: {}", self.price),
            format!("Quantity: {}", self.quantity),
            format!("Total: {}", self.total),
        ]
    }
}
