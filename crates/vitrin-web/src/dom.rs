//! Small lookup and listener helpers shared by the controllers.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// First element matching `selector`, cast to the requested type. Lookup and
/// cast failures both come back as `None`; absent page structure simply
/// leaves the corresponding controller unmounted.
pub fn query<T: JsCast>(document: &web::Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Every element matching `selector`.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let mut found = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.get(i).and_then(|node| node.dyn_into::<web::Element>().ok()) {
                found.push(el);
            }
        }
    }
    found
}

/// Attach a listener that ignores the event payload. The closure is leaked;
/// page handlers live as long as the page does.
pub fn on(target: &web::EventTarget, kind: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Attach a listener that receives the event.
pub fn on_event(target: &web::EventTarget, kind: &str, handler: impl FnMut(web::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Attach a mouse listener.
pub fn on_mouse(
    target: &web::EventTarget,
    kind: &str,
    handler: impl FnMut(web::MouseEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Attach a passive listener, for scroll handlers that never call
/// `preventDefault` and must not block the compositor.
pub fn on_passive(target: &web::EventTarget, kind: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// Window inner size as floats, `None` when unavailable or degenerate.
pub fn window_inner_size(window: &web::Window) -> Option<(f64, f64)> {
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    (w > 0.0 && h > 0.0).then_some((w, h))
}
