//! Thin wrappers over `IntersectionObserver`. Subscribers get a single bool
//! per report and pick the rule behind it: bare intersection for the section
//! reveals, the strict visible-ratio rule for playback gating.

use vitrin_core::media::visible_above;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Watch `el` and report whether it is intersecting with strictly more than
/// `threshold` of it visible. Used by the playback gates.
pub fn watch_ratio(
    el: &web::Element,
    threshold: f64,
    root_margin: Option<&str>,
    mut on_change: impl FnMut(bool) + 'static,
) -> Option<web::IntersectionObserver> {
    watch(el, threshold, root_margin, move |entry| {
        on_change(visible_above(
            entry.is_intersecting(),
            entry.intersection_ratio(),
            threshold,
        ));
    })
}

/// Watch `el` and report bare intersection. Used by the section reveals,
/// where any visible part counts even when the section dwarfs the viewport
/// and its visible ratio never reaches the observer threshold.
pub fn watch_intersecting(
    el: &web::Element,
    threshold: f64,
    root_margin: Option<&str>,
    mut on_change: impl FnMut(bool) + 'static,
) -> Option<web::IntersectionObserver> {
    watch(el, threshold, root_margin, move |entry| {
        on_change(entry.is_intersecting());
    })
}

/// Common wiring. The observer fires at the `threshold` crossing (and on
/// intersection changes); `root_margin` shifts the intersection box when
/// set. The callback closure is leaked and the observer handed back to the
/// caller, who may keep or drop it since the browser holds it alive through
/// the observed target.
fn watch(
    el: &web::Element,
    threshold: f64,
    root_margin: Option<&str>,
    mut report: impl FnMut(&web::IntersectionObserverEntry) + 'static,
) -> Option<web::IntersectionObserver> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        for entry in entries.iter() {
            let entry: web::IntersectionObserverEntry = entry.unchecked_into();
            report(&entry);
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }

    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| log::error!("IntersectionObserver unavailable: {e:?}"))
            .ok()?;
    observer.observe(el);
    callback.forget();
    Some(observer)
}
