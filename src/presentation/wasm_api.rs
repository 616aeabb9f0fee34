use wasm_bindgen::prelude::*;

use crate::{
    application::DepthChartSession,
    domain::{
        chart::{DepthChartConfig, ViewConfig, ViewFlag},
        errors::DepthChartError,
        logging::{LogComponent, get_logger},
        number_format::{NumberFormat, format_number},
        order_book::{DepthBook, sample::sample_book},
    },
    infrastructure::rendering::CanvasSurface,
};

fn to_js(err: DepthChartError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Mid price rounded to whole units, as shown in the chart footer.
pub fn mid_price_text(book: &DepthBook) -> String {
    format_number(book.mid_price().as_ref(), &NumberFormat::price().decimals(0))
}

/// Depth chart bound to a canvas element, driven from JavaScript
#[wasm_bindgen]
pub struct DepthChartHandle {
    canvas_id: String,
    session: DepthChartSession,
}

#[wasm_bindgen]
impl DepthChartHandle {
    /// Both sides are JSON arrays of `{"price": "...", "quantity": "..."}`, best price first.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: String, buys_json: &str, sells_json: &str) -> Result<DepthChartHandle, JsValue> {
        let book = DepthBook::from_json(buys_json, sells_json).map_err(to_js)?;
        Ok(Self::with_book(canvas_id, book))
    }

    /// Chart over the built-in demo book.
    pub fn demo(canvas_id: String) -> Result<DepthChartHandle, JsValue> {
        let book = sample_book().map_err(to_js)?;
        Ok(Self::with_book(canvas_id, book))
    }

    /// Replace both sides of the book and redraw.
    #[wasm_bindgen(js_name = setLevels)]
    pub fn set_levels(&mut self, buys_json: &str, sells_json: &str) -> Result<(), JsValue> {
        let book = DepthBook::from_json(buys_json, sells_json).map_err(to_js)?;
        self.session.set_book(book);
        self.render();
        Ok(())
    }

    /// Redraw at the canvas's current size. Returns false when the canvas is unavailable.
    pub fn render(&mut self) -> bool {
        let canvas_id = &self.canvas_id;
        self.session.redraw_with(|| {
            let surface = CanvasSurface::from_canvas_id(canvas_id)?;
            let size = surface.size();
            Ok((surface, size))
        })
    }

    /// Feed a viewport X coordinate. Redraws only when the hovered level changes.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, client_x: f64) -> bool {
        let canvas = match CanvasSurface::find_canvas(&self.canvas_id) {
            Ok(canvas) => canvas,
            Err(e) => {
                get_logger().warn(LogComponent::Presentation("DepthChartHandle"), &e.to_string());
                return false;
            }
        };
        let changed = self.session.pointer_move(CanvasSurface::local_x(&canvas, client_x));
        if changed {
            self.render();
        }
        changed
    }

    #[wasm_bindgen(js_name = pointerLeave)]
    pub fn pointer_leave(&mut self) -> bool {
        let changed = self.session.pointer_leave();
        if changed {
            self.render();
        }
        changed
    }

    /// Partial `ViewConfig` JSON; missing toggles default to on.
    #[wasm_bindgen(js_name = setViewConfig)]
    pub fn set_view_config(&mut self, json: &str) -> Result<(), JsValue> {
        let view: ViewConfig = serde_json::from_str(json).map_err(|e| to_js(e.into()))?;
        self.session.set_view_config(view);
        self.render();
        Ok(())
    }

    /// Full `DepthChartConfig` JSON. Also applies the log level.
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&mut self, json: &str) -> Result<(), JsValue> {
        let config = DepthChartConfig::from_json(json).map_err(to_js)?;
        get_logger().set_min_level(config.log_level);
        self.session.set_config(&config);
        self.render();
        Ok(())
    }

    /// Flip one layer by label: "Grid", "Points" or "Center".
    pub fn toggle(&mut self, label: &str) -> Result<(), JsValue> {
        let flag: ViewFlag = label
            .parse()
            .map_err(|_| to_js(DepthChartError::Parse(format!("Unknown layer '{}'", label))))?;
        self.session.toggle(flag);
        self.render();
        Ok(())
    }

    /// Tooltip of the hovered level as JSON, or `undefined` when nothing is hovered.
    #[wasm_bindgen(js_name = tooltipJson)]
    pub fn tooltip_json(&self) -> Option<String> {
        let tooltip = self.session.tooltip()?;
        match serde_json::to_string(&tooltip) {
            Ok(json) => Some(json),
            Err(e) => {
                get_logger().error(LogComponent::Presentation("DepthChartHandle"), &e.to_string());
                None
            }
        }
    }

    #[wasm_bindgen(js_name = midPrice)]
    pub fn mid_price(&self) -> String {
        mid_price_text(self.session.book())
    }
}

impl DepthChartHandle {
    fn with_book(canvas_id: String, book: DepthBook) -> Self {
        get_logger().info(
            LogComponent::Presentation("DepthChartHandle"),
            &format!("Depth chart bound to #{}", canvas_id),
        );
        Self { canvas_id, session: DepthChartSession::new(book, &DepthChartConfig::default()) }
    }
}
