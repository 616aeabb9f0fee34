use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::{DrawSurface, StrokeStyle};
use crate::domain::{
    chart::{CanvasSize, Color, PathCommand, Point},
    errors::{DepthChartError, DepthResult},
    logging::{LogComponent, get_logger},
};

fn surface_error(context: &str, err: JsValue) -> DepthChartError {
    DepthChartError::Surface(format!("{}: {:?}", context, err))
}

/// Canvas 2D backend sized to the element's CSS box and the device pixel ratio
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    size: CanvasSize,
    pixel_ratio: f64,
}

impl CanvasSurface {
    /// Look a canvas up by DOM id.
    pub fn find_canvas(canvas_id: &str) -> DepthResult<HtmlCanvasElement> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| DepthChartError::Surface("Document not available".to_string()))?;
        document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| DepthChartError::Surface(format!("Canvas '{}' not found", canvas_id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| DepthChartError::Surface(format!("Element '{}' is not a canvas", canvas_id)))
    }

    pub fn from_canvas_id(canvas_id: &str) -> DepthResult<Self> {
        Self::from_element(Self::find_canvas(canvas_id)?)
    }

    /// Resize the backing store and acquire a fresh 2D context.
    pub fn from_element(canvas: HtmlCanvasElement) -> DepthResult<Self> {
        let pixel_ratio = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0).max(1.0);
        let rect = canvas.get_bounding_client_rect();
        let size = CanvasSize::new(rect.width(), rect.height());

        canvas.set_width((size.width * pixel_ratio).round() as u32);
        canvas.set_height((size.height * pixel_ratio).round() as u32);

        let context = canvas
            .get_context("2d")
            .map_err(|e| surface_error("Failed to get 2D context", e))?
            .ok_or_else(|| DepthChartError::Surface("2D context not supported".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| DepthChartError::Surface("Failed to cast to 2D context".to_string()))?;

        // draw in CSS pixels
        context
            .set_transform(pixel_ratio, 0.0, 0.0, pixel_ratio, 0.0, 0.0)
            .map_err(|e| surface_error("Failed to scale context", e))?;

        get_logger().debug(
            LogComponent::Infrastructure("CanvasSurface"),
            &format!("Canvas acquired: {}x{} @{}x", size.width, size.height, pixel_ratio),
        );

        Ok(Self { canvas, context, size, pixel_ratio })
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    /// Convert a viewport X coordinate into canvas-local CSS pixels.
    pub fn local_x(canvas: &HtmlCanvasElement, client_x: f64) -> f64 {
        client_x - canvas.get_bounding_client_rect().x()
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn trace(&self, path: &[PathCommand]) {
        self.context.begin_path();
        for command in path {
            match command {
                PathCommand::MoveTo(p) => self.context.move_to(p.x, p.y),
                PathCommand::LineTo(p) => self.context.line_to(p.x, p.y),
                PathCommand::Close => self.context.close_path(),
            }
        }
    }

    fn set_fill(&self, color: Color) {
        self.context.set_global_alpha(color.a as f64);
        self.context.set_fill_style_str(&color.to_css_hex());
    }

    fn set_dash(&self, dash: Option<[f64; 2]>) {
        let segments = js_sys::Array::new();
        if let Some([on, off]) = dash {
            segments.push(&JsValue::from_f64(on));
            segments.push(&JsValue::from_f64(off));
        }
        if let Err(e) = self.context.set_line_dash(&segments) {
            get_logger().warn(
                LogComponent::Infrastructure("CanvasSurface"),
                &format!("set_line_dash failed: {:?}", e),
            );
        }
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, size: CanvasSize) {
        self.context.set_global_alpha(1.0);
        self.context.clear_rect(0.0, 0.0, size.width, size.height);
    }

    fn fill_path(&mut self, path: &[PathCommand], color: Color) {
        self.trace(path);
        self.set_fill(color);
        self.context.fill();
        self.context.set_global_alpha(1.0);
    }

    fn stroke_path(&mut self, path: &[PathCommand], style: &StrokeStyle) {
        self.trace(path);
        self.context.set_global_alpha(style.color.a as f64);
        self.context.set_stroke_style_str(&style.color.to_css_hex());
        self.context.set_line_width(style.width);
        self.set_dash(style.dash);
        self.context.stroke();
        if style.dash.is_some() {
            self.set_dash(None);
        }
        self.context.set_global_alpha(1.0);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.context.begin_path();
        if self.context.arc(center.x, center.y, radius, 0.0, std::f64::consts::TAU).is_err() {
            return;
        }
        self.set_fill(color);
        self.context.fill();
        self.context.set_global_alpha(1.0);
    }

    fn fill_rect(&mut self, origin: Point, width: f64, height: f64, color: Color) {
        self.set_fill(color);
        self.context.fill_rect(origin.x, origin.y, width, height);
        self.context.set_global_alpha(1.0);
    }
}
