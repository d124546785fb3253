use bevy::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, window};

use super::page_scroll::{ScrollMetrics, ScrollQueue};

/// Register a `scroll` listener on the window that samples page geometry into
/// the scroll queue. The closure is handed to JavaScript for the page lifetime.
pub fn setup_scroll_listener(queue: Res<ScrollQueue>) {
    let Some(window) = window() else {
        error!("Window object not available, scroll input disabled");
        return;
    };

    let queue = queue.clone();
    let closure = Closure::wrap(Box::new(move |_event: Event| {
        if let Some(metrics) = read_scroll_metrics() {
            queue.push(metrics);
        }
    }) as Box<dyn FnMut(Event)>);

    if let Err(err) =
        window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
    {
        error!("Failed to register scroll listener: {:?}", err);
        return;
    }

    closure.forget();
    info!("Scroll listener registered");
}

/// `window.scrollY`, `document.body.scrollHeight` and `window.innerHeight`.
fn read_scroll_metrics() -> Option<ScrollMetrics> {
    let window = window()?;
    let body = window.document()?.body()?;

    Some(ScrollMetrics {
        scroll_y: window.scroll_y().ok()?,
        scroll_height: f64::from(body.scroll_height()),
        viewport_height: window.inner_height().ok()?.as_f64()?,
    })
}
