use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod domain;
pub mod infrastructure;
pub mod application;
pub mod presentation;
pub mod app;

/// Install the panic hook, console logger and browser clock.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    get_logger().info(LogComponent::Presentation("Initialize"), "Depth chart module initialized");
}

/// Mount the demo depth chart into `<body>`.
#[wasm_bindgen(js_name = mountDepthChart)]
pub fn mount_depth_chart() {
    use leptos::*;

    use crate::app::App;

    mount_to_body(|| view! { <App/> });
}
