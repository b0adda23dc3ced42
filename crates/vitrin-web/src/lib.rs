#![cfg(target_arch = "wasm32")]
//! DOM wiring for the vitrin page. Pure controller state lives in
//! `vitrin-core`; this crate owns every `web-sys` touchpoint and the single
//! animation-frame loop that drives the time-based controllers.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys as web;

mod dom;
mod effects;
mod form;
mod frame;
mod media;
mod nav;
mod observe;
mod reveal;
mod slider;
mod vslider;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("vitrin-web starting");

    if let Err(e) = init() {
        log::error!("init failed: {e:?}");
    }
    Ok(())
}

/// Mount every controller whose page structure is present. Each one degrades
/// independently, so a page without, say, the vertical slider still gets the
/// rest of its behaviors.
fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let slider = slider::ImageSlider::mount(&document);
    media::wire_hero_video(&document);
    media::wire_portrait_video(&document);
    reveal::wire_section_reveals(&document);
    nav::wire_anchor_scrolling(&document);
    nav::wire_nav_style(&document);
    let form = form::ContactForm::mount(&document);
    let vslider = vslider::VerticalSlider::mount(&document);
    effects::wire_hero_parallax(&document);

    let ctx = Rc::new(RefCell::new(frame::FrameContext::new(slider, vslider, form)));
    frame::start_loop(ctx);
    Ok(())
}
