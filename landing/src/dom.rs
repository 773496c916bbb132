//! Thin helpers over `web-sys` for the page's DOM contract.
//!
//! Missing elements are never an error here: lookups return `None` or empty
//! results and the caller skips the feature.

use electrotools_core::{ScrollSnapshot, SectionBounds, Visibility};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use web_sys::{Document, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions};

pub const HEADER_ID: &str = "header";

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Subscribe `handler` to `event` on `target` for the lifetime of the page.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F)
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        tracing::warn!(event, "failed to register listener");
    }
    closure.forget(); // Keep the closure alive
}

/// Element by CSS selector, as an `HtmlElement`.
pub fn html_element(selector: &str) -> Option<HtmlElement> {
    document()?
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Every `HtmlElement` matching `selector`, in document order.
pub fn html_elements(selector: &str) -> Vec<HtmlElement> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn header_height() -> f64 {
    document()
        .and_then(|d| d.get_element_by_id(HEADER_ID))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| f64::from(el.offset_height()))
        .unwrap_or(0.0)
}

/// Top offset of the section a fragment href points at.
pub fn section_top(href: &str) -> Option<f64> {
    html_element(href).map(|el| f64::from(el.offset_top()))
}

/// Current scroll offset plus live layout of every `<section>`.
pub fn scroll_snapshot() -> ScrollSnapshot {
    let scroll_y = web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0);
    let sections = html_elements("section")
        .into_iter()
        .map(|el| {
            SectionBounds::new(
                el.id(),
                f64::from(el.offset_top()),
                f64::from(el.offset_height()),
            )
        })
        .collect();
    ScrollSnapshot {
        scroll_y,
        header_height: header_height(),
        sections,
    }
}

pub fn visibility() -> Visibility {
    match document().map(|d| d.visibility_state()) {
        Some(web_sys::VisibilityState::Visible) => Visibility::Visible,
        _ => Visibility::Hidden,
    }
}

pub fn smooth_scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Stop the page behind the open mobile menu from scrolling.
pub fn lock_body_scroll(lock: bool) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let value = if lock { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
}
