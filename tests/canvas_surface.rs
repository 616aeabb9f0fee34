#![cfg(target_arch = "wasm32")]

use depth_chart_wasm::application::DepthChartSession;
use depth_chart_wasm::domain::chart::DepthChartConfig;
use depth_chart_wasm::domain::order_book::sample::sample_book;
use depth_chart_wasm::infrastructure::rendering::CanvasSurface;
use depth_chart_wasm::presentation::DepthChartHandle;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_canvas(id: &str) -> web_sys::HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document.create_element("canvas").unwrap().dyn_into::<web_sys::HtmlCanvasElement>().unwrap();
    canvas.set_id(id);
    canvas.set_attribute("style", "width: 600px; height: 300px;").unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn surface_matches_css_size() {
    let canvas = mount_canvas("depth-surface-size");
    let surface = CanvasSurface::from_element(canvas.clone()).unwrap();
    assert_eq!(surface.size().width, 600.0);
    assert_eq!(surface.size().height, 300.0);
    assert_eq!(canvas.width(), (600.0 * surface.pixel_ratio()).round() as u32);
}

#[wasm_bindgen_test]
fn session_draws_into_canvas() {
    let canvas = mount_canvas("depth-surface-draw");
    let mut session = DepthChartSession::new(sample_book().unwrap(), &DepthChartConfig::default());
    let drawn = session.redraw_with(|| {
        let surface = CanvasSurface::from_element(canvas.clone())?;
        let size = surface.size();
        Ok((surface, size))
    });
    assert!(drawn);
    assert!(canvas.to_data_url().unwrap().starts_with("data:image/png"));
}

#[wasm_bindgen_test]
fn missing_canvas_is_a_no_op() {
    let mut handle = DepthChartHandle::demo("depth-missing-canvas".to_string()).unwrap();
    assert!(!handle.render());
    assert!(!handle.pointer_move(10.0));
    assert!(handle.tooltip_json().is_none());
}

#[wasm_bindgen_test]
fn handle_hovers_through_client_coordinates() {
    let canvas = mount_canvas("depth-handle-hover");
    let mut handle = DepthChartHandle::demo("depth-handle-hover".to_string()).unwrap();
    assert!(handle.render());
    let left = canvas.get_bounding_client_rect().x();
    assert!(handle.pointer_move(left + 281.0));
    assert!(handle.tooltip_json().unwrap().contains("\"side\":\"buy\""));
    assert!(handle.pointer_leave());
    assert_eq!(handle.mid_price(), "$95,550");
}
