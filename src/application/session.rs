use super::renderer::DepthChartRenderer;
use crate::{
    domain::{
        chart::{CanvasSize, DepthChartConfig, DepthGeometry, HoverState, Tooltip, ViewConfig, ViewFlag},
        errors::DepthResult,
        logging::{LogComponent, LogLevel, get_logger},
        order_book::DepthBook,
    },
    infrastructure::rendering::DrawSurface,
    log_debug, log_trace,
};

/// One mounted depth chart: data, view toggles, canvas size and hover state.
///
/// Pointer handlers only update state and report whether a redraw is due; the
/// caller decides when to actually draw.
#[derive(Debug, Clone)]
pub struct DepthChartSession {
    book: DepthBook,
    config: DepthChartConfig,
    renderer: DepthChartRenderer,
    size: CanvasSize,
    hover: HoverState,
}

impl DepthChartSession {
    pub fn new(book: DepthBook, config: &DepthChartConfig) -> Self {
        get_logger().info(
            LogComponent::Application("DepthChartSession"),
            &format!("Session created: {} buy / {} sell levels", book.buys().len(), book.sells().len()),
        );
        Self {
            book,
            config: *config,
            renderer: DepthChartRenderer::new(config.theme()),
            size: CanvasSize::default(),
            hover: HoverState::default(),
        }
    }

    pub fn book(&self) -> &DepthBook {
        &self.book
    }

    pub fn config(&self) -> &DepthChartConfig {
        &self.config
    }

    pub fn view_config(&self) -> ViewConfig {
        self.config.view
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    /// Replace the order book. Any hover refers to the old data and is dropped.
    pub fn set_book(&mut self, book: DepthBook) {
        get_logger().log_with_metadata(
            LogLevel::Info,
            LogComponent::Application("DepthChartSession"),
            "Book replaced",
            &format!("buys={} sells={}", book.buys().len(), book.sells().len()),
        );
        self.book = book;
        self.hover = HoverState::default();
    }

    pub fn set_config(&mut self, config: &DepthChartConfig) {
        self.config = *config;
        self.renderer.set_theme(config.theme());
        self.refresh_anchor();
    }

    pub fn set_view_config(&mut self, view: ViewConfig) {
        self.config.view = view;
    }

    pub fn toggle(&mut self, flag: ViewFlag) {
        self.config.view.toggle(flag);
        log_debug!(
            LogComponent::Application("DepthChartSession"),
            "{} toggled: {}",
            flag,
            self.config.view.is_enabled(flag)
        );
    }

    pub fn toggle_grid(&mut self) {
        self.toggle(ViewFlag::Grid);
    }

    pub fn toggle_points(&mut self) {
        self.toggle(ViewFlag::Points);
    }

    pub fn toggle_center_line(&mut self) {
        self.toggle(ViewFlag::CenterLine);
    }

    /// Track a new canvas size. Returns whether it changed.
    pub fn resize(&mut self, size: CanvasSize) -> bool {
        if size == self.size {
            return false;
        }
        self.size = size;
        self.refresh_anchor();
        true
    }

    /// Hit-test a canvas-local pointer X. Returns whether a redraw is needed.
    ///
    /// Ignored until the session knows its canvas size.
    pub fn pointer_move(&mut self, pointer_x: f64) -> bool {
        // no layout before the first resize
        if self.size.width <= 0.0 {
            return false;
        }
        let next = {
            let geometry = DepthGeometry::build(&self.book, self.size);
            HoverState::resolve(pointer_x, &geometry, &self.book, &self.config.tooltip)
        };
        let changed = self.hover.update(next);
        if changed {
            log_trace!(
                LogComponent::Application("DepthChartSession"),
                "Hover -> {:?}",
                self.hover.target
            );
        }
        changed
    }

    pub fn pointer_leave(&mut self) -> bool {
        self.hover.clear()
    }

    pub fn tooltip(&self) -> Option<Tooltip> {
        let target = self.hover.target?;
        Tooltip::describe(target, self.hover.tooltip_anchor, &self.book)
    }

    /// Draw the current state at `size`.
    pub fn render<S: DrawSurface>(&mut self, surface: &mut S, size: CanvasSize) {
        self.resize(size);
        self.renderer.render(surface, &self.book, self.size, &self.config.view, self.hover.target);
    }

    /// Acquire a surface and draw. A failed acquisition is logged and skips the frame.
    pub fn redraw_with<S, F>(&mut self, acquire: F) -> bool
    where
        S: DrawSurface,
        F: FnOnce() -> DepthResult<(S, CanvasSize)>,
    {
        match acquire() {
            Ok((mut surface, size)) => {
                self.render(&mut surface, size);
                true
            }
            Err(e) => {
                get_logger().error(
                    LogComponent::Application("DepthChartSession"),
                    &format!("Redraw skipped: {}", e),
                );
                false
            }
        }
    }

    fn refresh_anchor(&mut self) {
        if let Some(target) = self.hover.target {
            match self.config.tooltip.anchor(target, &self.book, self.size) {
                Some(anchor) => self.hover.tooltip_anchor = anchor,
                None => self.hover = HoverState::default(),
            }
        }
    }
}
