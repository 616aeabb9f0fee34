//! Hover hit-testing: pointer X → hovered (side, index).

use serde::Serialize;

use super::{
    geometry::{DepthGeometry, ScreenPoint},
    tooltip::TooltipLayout,
    value_objects::Point,
};
use crate::domain::order_book::{DepthBook, Side};

/// A point only counts as hovered when the pointer is closer than this, horizontally.
pub const HOVER_THRESHOLD_PX: f64 = 20.0;

/// Hovered level. `index` is per side, not the flattened index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HoverTarget {
    pub side: Side,
    pub index: usize,
}

impl HoverTarget {
    pub fn new(side: Side, index: usize) -> Self {
        Self { side, index }
    }
}

/// Index and distance of the x closest to `pointer_x`. Ties go to the lowest index.
pub fn nearest_point(pointer_x: f64, xs: impl IntoIterator<Item = f64>) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (index, x) in xs.into_iter().enumerate() {
        let distance = (x - pointer_x).abs();
        match best {
            Some((_, nearest)) if !(distance < nearest) => {}
            _ => best = Some((index, distance)),
        }
    }
    best
}

/// Resolve the hovered level from a flattened point list (buy points first).
pub fn hit_test_points(pointer_x: f64, points: &[ScreenPoint<'_>], buy_count: usize) -> Option<HoverTarget> {
    resolve(pointer_x, points.iter().map(|p| p.x), buy_count)
}

/// Resolve the hovered level against a frame's geometry.
pub fn hit_test(pointer_x: f64, geometry: &DepthGeometry<'_>) -> Option<HoverTarget> {
    resolve(pointer_x, geometry.points().map(|p| p.x), geometry.buy.points.len())
}

fn resolve(pointer_x: f64, xs: impl IntoIterator<Item = f64>, buy_count: usize) -> Option<HoverTarget> {
    let (flat_index, distance) = nearest_point(pointer_x, xs)?;
    if !(distance < HOVER_THRESHOLD_PX) {
        return None;
    }
    Some(if flat_index < buy_count {
        HoverTarget::new(Side::Buy, flat_index)
    } else {
        HoverTarget::new(Side::Sell, flat_index - buy_count)
    })
}

/// Hover state of one chart session
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct HoverState {
    pub target: Option<HoverTarget>,
    pub tooltip_anchor: Point,
}

impl HoverState {
    /// Pure state derivation for a pointer position.
    pub fn resolve(
        pointer_x: f64,
        geometry: &DepthGeometry<'_>,
        book: &DepthBook,
        layout: &TooltipLayout,
    ) -> HoverState {
        match hit_test(pointer_x, geometry) {
            Some(target) => HoverState {
                target: Some(target),
                tooltip_anchor: layout.anchor(target, book, geometry.size).unwrap_or_default(),
            },
            None => HoverState::default(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    pub fn side(&self) -> Option<Side> {
        self.target.map(|t| t.side)
    }

    pub fn index(&self) -> Option<usize> {
        self.target.map(|t| t.index)
    }

    /// Adopt `next` unless it resolves to the same target. Returns whether anything changed.
    pub fn update(&mut self, next: HoverState) -> bool {
        if next.target == self.target {
            return false;
        }
        *self = next;
        true
    }

    /// Pointer left the surface.
    pub fn clear(&mut self) -> bool {
        if self.target.is_none() {
            return false;
        }
        self.target = None;
        true
    }
}
