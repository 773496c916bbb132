//! IntersectionObserver plumbing for the reveal-on-scroll effect.

use std::time::Duration;

use electrotools_core::PageEvent;
use electrotools_core::config::RevealConfig;
use electrotools_core::reveal::RevealMotion;
use js_sys::Array;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::controller::PageContext;
use crate::dom;

const INDEX_ATTR: &str = "data-reveal";

fn reveal_index(entry: &IntersectionObserverEntry) -> Option<usize> {
    entry.target().get_attribute(INDEX_ATTR)?.parse().ok()
}

/// Hide every matching element and start observing it.
///
/// Returns the observer, or `None` when nothing matched or the browser
/// lacks IntersectionObserver.
pub fn observe(ctx: PageContext, config: &RevealConfig) -> Option<IntersectionObserver> {
    let elements = dom::html_elements(&config.selector);
    if elements.is_empty() {
        return None;
    }

    let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            if let Some(index) = reveal_index(&entry) {
                ctx.dispatch(PageEvent::ElementIntersected(index));
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin);

    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(e) => {
            tracing::warn!("reveal disabled: {e:?}");
            return None;
        }
    };
    callback.forget();

    for (index, el) in elements.iter().enumerate() {
        let _ = el.set_attribute(INDEX_ATTR, &index.to_string());
        let _ = el.style().set_property("opacity", RevealMotion::HIDDEN_OPACITY);
        observer.observe(el);
    }
    ctx.page.update(|page| page.observe_reveals(elements.len()));
    tracing::debug!(count = elements.len(), "reveal observer attached");

    Some(observer)
}

/// Snap the element to `start_transform`, stop observing it, and transition
/// it into place after `delay`.
pub fn run(
    observer: Option<&IntersectionObserver>,
    index: usize,
    start_transform: &str,
    delay: Duration,
) {
    let Some(el) = dom::html_element(&format!("[{INDEX_ATTR}=\"{index}\"]")) else {
        return;
    };
    if let Some(observer) = observer {
        observer.unobserve(&el);
    }

    let style = el.style();
    let _ = style.set_property("opacity", RevealMotion::HIDDEN_OPACITY);
    let _ = style.set_property("transform", start_transform);

    set_timeout(move || settle(&el), delay);
}

fn settle(el: &HtmlElement) {
    let style = el.style();
    let _ = style.set_property("transition", RevealMotion::TRANSITION);
    let _ = style.set_property("opacity", RevealMotion::VISIBLE_OPACITY);
    let _ = style.set_property("transform", RevealMotion::SETTLED_TRANSFORM);
}
