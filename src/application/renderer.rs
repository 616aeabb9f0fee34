use crate::{
    domain::{
        chart::{
            CanvasSize, DepthGeometry, DepthTheme, HoverTarget, PathCommand, Point, SideGeometry, ViewConfig,
            grid_lines,
        },
        logging::{LogComponent, get_logger},
        order_book::{DepthBook, Side},
    },
    infrastructure::rendering::{DrawSurface, StrokeStyle},
};

/// Draws one frame of the depth chart onto any [`DrawSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DepthChartRenderer {
    theme: DepthTheme,
}

impl DepthChartRenderer {
    pub fn new(theme: DepthTheme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &DepthTheme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: DepthTheme) {
        self.theme = theme;
    }

    /// Render a full frame and hand back the geometry it was drawn from.
    pub fn render<'a, S: DrawSurface>(
        &self,
        surface: &mut S,
        book: &'a DepthBook,
        size: CanvasSize,
        view: &ViewConfig,
        hover: Option<HoverTarget>,
    ) -> DepthGeometry<'a> {
        let geometry = DepthGeometry::build(book, size);

        surface.clear(size);

        if view.show_grid {
            let style = StrokeStyle::solid(self.theme.grid, self.theme.hair_width);
            for line in grid_lines(size) {
                surface.stroke_path(&line, &style);
            }
        }

        self.draw_side(surface, &geometry.buy, view.show_points);
        self.draw_side(surface, &geometry.sell, view.show_points);

        let axis = [PathCommand::move_to(0.0, size.height), PathCommand::line_to(size.width, size.height)];
        surface.stroke_path(&axis, &StrokeStyle::solid(self.theme.axis, self.theme.axis_width));

        if view.show_center_line {
            let center = [PathCommand::move_to(size.center_x(), 0.0), PathCommand::line_to(size.center_x(), size.height)];
            surface.stroke_path(&center, &StrokeStyle::solid(self.theme.center_line, self.theme.hair_width));
        }

        if let Some(target) = hover {
            match geometry.point(target.side, target.index) {
                Some(point) => self.draw_hover(surface, target.side, point.position(), size),
                None => get_logger().warn(
                    LogComponent::Application("DepthChartRenderer"),
                    &format!("Hover target {} #{} is out of range", target.side, target.index),
                ),
            }
        }

        geometry
    }

    fn draw_side<S: DrawSurface>(&self, surface: &mut S, side: &SideGeometry<'_>, show_points: bool) {
        if side.is_empty() {
            return;
        }
        let color = self.theme.side_color(side.side);

        surface.fill_path(&side.fill, color.with_alpha(self.theme.area_alpha));
        surface.stroke_path(&side.stroke, &StrokeStyle::solid(color, self.theme.line_width));

        if show_points {
            for point in &side.points {
                surface.fill_circle(point.position(), self.theme.marker_radius, color);
            }
        }
    }

    fn draw_hover<S: DrawSurface>(&self, surface: &mut S, side: Side, point: Point, size: CanvasSize) {
        let dashed = StrokeStyle::dashed(self.theme.crosshair, self.theme.hair_width, self.theme.crosshair_dash);

        let vertical = [PathCommand::move_to(point.x, 0.0), PathCommand::line_to(point.x, size.height)];
        surface.stroke_path(&vertical, &dashed);

        let horizontal = [PathCommand::move_to(point.x, point.y), PathCommand::line_to(size.center_x(), point.y)];
        surface.stroke_path(&horizontal, &dashed);

        let (origin_x, width) = match side {
            Side::Buy => (0.0, point.x),
            Side::Sell => (point.x, size.width - point.x),
        };
        surface.fill_rect(Point::new(origin_x, 0.0), width.max(0.0), size.height, self.theme.hover_shade);
    }
}
