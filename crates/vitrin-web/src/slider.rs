//! Horizontal image carousel: a translated track, generated dot indicators,
//! arrow buttons and a hover-paused auto-advance.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use vitrin_core::carousel::CarouselState;
use vitrin_core::constants::SLIDER_AUTO_PERIOD;
use web_sys as web;

use crate::dom;

struct SliderInner {
    state: RefCell<CarouselState>,
    track: web::HtmlElement,
    dots: Vec<web::Element>,
}

#[derive(Clone)]
pub struct ImageSlider {
    inner: Rc<SliderInner>,
}

impl ImageSlider {
    /// Build the controller if the full slider structure is present: track,
    /// at least one slide, both arrow buttons and the dot container. With
    /// anything missing the page simply has no horizontal slider.
    pub fn mount(document: &web::Document) -> Option<Self> {
        let track = dom::query::<web::HtmlElement>(document, "#sliderTrack")?;
        let prev = dom::query::<web::Element>(document, "#prevBtn")?;
        let next = dom::query::<web::Element>(document, "#nextBtn")?;
        let dots_host = dom::query::<web::Element>(document, "#sliderDots")?;
        let slide_count = dom::query_all(document, ".slide").len();
        if slide_count == 0 {
            return None;
        }

        let mut state = CarouselState::new(slide_count);
        state.start_auto(SLIDER_AUTO_PERIOD);
        let slider = Self {
            inner: Rc::new(SliderInner {
                state: RefCell::new(state),
                track,
                dots: build_dots(document, &dots_host, slide_count),
            }),
        };

        for (i, dot) in slider.inner.dots.iter().enumerate() {
            let s = slider.clone();
            dom::on(dot, "click", move || s.go_to(i as i64));
        }
        {
            let s = slider.clone();
            dom::on(&prev, "click", move || s.prev());
        }
        {
            let s = slider.clone();
            dom::on(&next, "click", move || s.next());
        }

        // Hovering the track parks the auto-advance; leaving re-arms it.
        {
            let s = slider.clone();
            dom::on(&slider.inner.track, "mouseenter", move || {
                s.inner.state.borrow_mut().stop_auto();
            });
        }
        {
            let s = slider.clone();
            dom::on(&slider.inner.track, "mouseleave", move || {
                s.inner.state.borrow_mut().start_auto(SLIDER_AUTO_PERIOD);
            });
        }

        slider.apply();
        log::info!("[slider] mounted with {slide_count} slides");
        Some(slider)
    }

    pub fn go_to(&self, target: i64) {
        let moved = self.inner.state.borrow_mut().go_to(target);
        if moved.is_some() {
            self.apply();
        }
    }

    pub fn next(&self) {
        let moved = self.inner.state.borrow_mut().next();
        if moved.is_some() {
            self.apply();
        }
    }

    pub fn prev(&self) {
        let moved = self.inner.state.borrow_mut().prev();
        if moved.is_some() {
            self.apply();
        }
    }

    /// Advance auto-advance time. However many periods elapsed, the track is
    /// repositioned once, at the final index.
    pub fn tick(&self, dt: Duration) {
        let steps = self.inner.state.borrow_mut().tick(dt);
        if steps > 0 {
            self.apply();
        }
    }

    /// Reflect the current index: slide the track and re-mark the active dot.
    fn apply(&self) {
        let index = self.inner.state.borrow().index();
        let offset = -(index as f64) * 100.0;
        _ = self
            .inner
            .track
            .style()
            .set_property("transform", &format!("translateX({offset}%)"));
        for (i, dot) in self.inner.dots.iter().enumerate() {
            _ = dot.class_list().toggle_with_force("active", i == index);
        }
    }
}

/// One clickable dot per slide, appended in slide order.
fn build_dots(document: &web::Document, host: &web::Element, count: usize) -> Vec<web::Element> {
    let mut dots = Vec::with_capacity(count);
    for _ in 0..count {
        let Ok(dot) = document.create_element("div") else {
            continue;
        };
        _ = dot.class_list().add_1("dot");
        _ = host.append_child(&dot);
        dots.push(dot);
    }
    dots
}
