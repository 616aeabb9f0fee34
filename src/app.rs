use gloo::render::{AnimationFrame, request_animation_frame};
use leptos::html::Canvas;
use leptos::*;
use strum::IntoEnumIterator;

use crate::{
    application::DepthChartSession,
    domain::{
        chart::{DepthChartConfig, Tooltip, ViewFlag},
        logging::{LogComponent, get_logger},
        order_book::{DepthBook, sample::sample_book},
    },
    infrastructure::rendering::CanvasSurface,
    presentation::wasm_api::mid_price_text,
};

const STYLES: &str = r#"
.depth-chart-app {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    padding: 20px;
    color: #424242;
}

.depth-toggles {
    display: flex;
    gap: 16px;
    margin-bottom: 8px;
    font-size: 13px;
}

.depth-chart-wrapper {
    position: relative;
}

.depth-canvas {
    display: block;
    width: 100%;
    height: 320px;
    cursor: crosshair;
}

.depth-tooltip {
    position: absolute;
    pointer-events: none;
    background: rgba(255, 255, 255, 0.95);
    border: 1px solid #e0e0e0;
    border-radius: 4px;
    padding: 6px 8px;
    font-size: 12px;
    white-space: nowrap;
    transform: translateX(-50%);
}

.depth-footer {
    display: flex;
    justify-content: space-between;
    margin-top: 8px;
    font-size: 13px;
}

.depth-footer .buy { color: #26a69a; }
.depth-footer .sell { color: #ef5350; }
"#;

/// Demo page over the built-in sample book
#[component]
pub fn App() -> impl IntoView {
    let book = sample_book().unwrap_or_else(|e| {
        get_logger().error(LogComponent::Presentation("App"), &format!("Sample book rejected: {}", e));
        DepthBook::default()
    });

    view! {
        <style>{STYLES}</style>
        <div class="depth-chart-app">
            <DepthChartPanel book=book />
        </div>
    }
}

/// Interactive depth chart: layer toggles, canvas, tooltip and footer.
#[component]
pub fn DepthChartPanel(book: DepthBook, #[prop(optional)] config: DepthChartConfig) -> impl IntoView {
    let buy_count = book.buys().len();
    let sell_count = book.sells().len();
    let mid_price = mid_price_text(&book);

    let session = store_value(DepthChartSession::new(book, &config));
    let view_config = create_rw_signal(config.view);
    let tooltip = create_rw_signal::<Option<Tooltip>>(None);
    let canvas_ref = create_node_ref::<Canvas>();

    // At most one frame in flight. The handle is kept alive until the next request replaces it.
    let frame_pending = store_value(false);
    let frame_handle = store_value::<Option<AnimationFrame>>(None);

    let redraw = move || {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let element: &web_sys::HtmlCanvasElement = &canvas;
        let element = element.clone();
        session.update_value(|session| {
            session.redraw_with(|| {
                let surface = CanvasSurface::from_element(element)?;
                let size = surface.size();
                Ok((surface, size))
            });
        });
        // resizing moves the anchor
        tooltip.set(session.with_value(DepthChartSession::tooltip));
    };

    let schedule_redraw = move || {
        if frame_pending.get_value() {
            return;
        }
        frame_pending.set_value(true);
        let handle = request_animation_frame(move |_| {
            frame_pending.set_value(false);
            redraw();
        });
        frame_handle.set_value(Some(handle));
    };

    create_effect(move |_| {
        if canvas_ref.get().is_some() {
            schedule_redraw();
        }
    });

    let resize_listener = window_event_listener(ev::resize, move |_| schedule_redraw());
    on_cleanup(move || {
        resize_listener.remove();
        frame_handle.try_update_value(|handle| handle.take());
    });

    let on_mouse_move = move |event: web_sys::MouseEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let x = CanvasSurface::local_x(&canvas, event.client_x() as f64);
        if session.try_update_value(|session| session.pointer_move(x)).unwrap_or(false) {
            tooltip.set(session.with_value(DepthChartSession::tooltip));
            schedule_redraw();
        }
    };

    let on_mouse_leave = move |_event: web_sys::MouseEvent| {
        if session.try_update_value(DepthChartSession::pointer_leave).unwrap_or(false) {
            tooltip.set(None);
            schedule_redraw();
        }
    };

    let toggles = ViewFlag::iter()
        .map(|flag| {
            view! {
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || view_config.with(|view| view.is_enabled(flag))
                        on:change=move |_| {
                            session.update_value(|session| session.toggle(flag));
                            view_config.set(session.with_value(DepthChartSession::view_config));
                            schedule_redraw();
                        }
                    />
                    {flag.to_string()}
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="depth-toggles">{toggles}</div>
        <div class="depth-chart-wrapper">
            <canvas
                class="depth-canvas"
                node_ref=canvas_ref
                on:mousemove=on_mouse_move
                on:mouseleave=on_mouse_leave
            />
            {move || {
                tooltip
                    .get()
                    .map(|tip| {
                        view! {
                            <div
                                class="depth-tooltip"
                                style:left=format!("{}px", tip.anchor.x)
                                style:top=format!("{}px", tip.anchor.y)
                            >
                                {tip.lines().into_iter().map(|line| view! { <div>{line}</div> }).collect_view()}
                            </div>
                        }
                    })
            }}
        </div>
        <div class="depth-footer">
            <span class="buy">{format!("Buy Orders ({} levels)", buy_count)}</span>
            <span>{format!("Current Price: ~{}", mid_price)}</span>
            <span class="sell">{format!("Sell Orders ({} levels)", sell_count)}</span>
        </div>
    }
}
