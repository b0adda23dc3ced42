//! Shared animation-frame runtime. One self-rescheduling callback measures
//! real frame deltas and advances every time-driven controller, so the page
//! has a single clock instead of a timer per feature.

use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::form::ContactForm;
use crate::slider::ImageSlider;
use crate::vslider::VerticalSlider;

pub struct FrameContext {
    slider: Option<ImageSlider>,
    vslider: Option<VerticalSlider>,
    form: Option<ContactForm>,
    last_instant: Instant,
}

impl FrameContext {
    pub fn new(
        slider: Option<ImageSlider>,
        vslider: Option<VerticalSlider>,
        form: Option<ContactForm>,
    ) -> Self {
        Self { slider, vslider, form, last_instant: Instant::now() }
    }

    fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        if let Some(slider) = &self.slider {
            slider.tick(dt);
        }
        if let Some(vslider) = &self.vslider {
            vslider.tick(dt);
        }
        if let Some(form) = &self.form {
            form.tick(dt);
        }
    }
}

/// Kick off the requestAnimationFrame loop; it reschedules itself forever.
pub fn start_loop(ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
