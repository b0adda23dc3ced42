//! Vertical portrait carousel. The viewport scrolls by whole slide heights;
//! manual scrolling pauses the auto-advance and resyncs the index once the
//! scroll stream goes quiet.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use vitrin_core::carousel::{settled_index, CarouselState, ScrollSettle, Settled};
use vitrin_core::constants::{SCROLL_SETTLE_QUIET, VSLIDER_AUTO_PERIOD};
use web_sys as web;

use crate::dom;

struct VsliderInner {
    state: RefCell<CarouselState>,
    settle: RefCell<ScrollSettle>,
    viewport: web::Element,
}

#[derive(Clone)]
pub struct VerticalSlider {
    inner: Rc<VsliderInner>,
}

impl VerticalSlider {
    /// Only the viewport is required. The arrow buttons are optional, and a
    /// slideless viewport still mounts with every navigation a no-op.
    pub fn mount(document: &web::Document) -> Option<Self> {
        let viewport = dom::query::<web::Element>(document, "#vsliderViewport")?;
        let count = viewport
            .query_selector_all(".vslide")
            .map(|list| list.length() as usize)
            .unwrap_or(0);

        let mut state = CarouselState::new(count);
        state.start_auto(VSLIDER_AUTO_PERIOD);
        let slider = Self {
            inner: Rc::new(VsliderInner {
                state: RefCell::new(state),
                settle: RefCell::new(ScrollSettle::new(SCROLL_SETTLE_QUIET)),
                viewport,
            }),
        };

        if let Some(prev) = dom::query::<web::Element>(document, ".vslider-btn.vprev") {
            let s = slider.clone();
            dom::on(&prev, "click", move || s.prev());
        }
        if let Some(next) = dom::query::<web::Element>(document, ".vslider-btn.vnext") {
            let s = slider.clone();
            dom::on(&next, "click", move || s.next());
        }

        // Every scroll event restarts the settle countdown. The first manual
        // one of a burst parks the auto-advance until the settle lifts it.
        {
            let s = slider.clone();
            dom::on_passive(&slider.inner.viewport, "scroll", move || {
                let suspend = s.inner.settle.borrow_mut().scrolled();
                if suspend {
                    s.inner.state.borrow_mut().stop_auto();
                }
            });
        }

        // Keep the current slide aligned when the viewport height changes.
        if let Some(window) = web::window() {
            let s = slider.clone();
            dom::on(&window, "resize", move || s.apply(false));
        }

        slider.apply(false);
        log::info!("[vslider] mounted with {count} slides");
        Some(slider)
    }

    pub fn next(&self) {
        let moved = self.inner.state.borrow_mut().next();
        if moved.is_some() {
            self.apply(true);
        }
    }

    pub fn prev(&self) {
        let moved = self.inner.state.borrow_mut().prev();
        if moved.is_some() {
            self.apply(true);
        }
    }

    pub fn tick(&self, dt: Duration) {
        let steps = self.inner.state.borrow_mut().tick(dt);
        if steps > 0 {
            self.apply(true);
        }
        let settled = self.inner.settle.borrow_mut().tick(dt);
        if let Some(outcome) = settled {
            self.on_settled(outcome);
        }
    }

    /// The scroll stream went quiet. Adopt whichever slide the viewport
    /// physically rests on (clamped, manual scrolling cannot wrap) and lift
    /// the auto-advance suspension when one is owed.
    fn on_settled(&self, outcome: Settled) {
        let height = f64::from(self.inner.viewport.client_height());
        let offset = f64::from(self.inner.viewport.scroll_top());
        let count = self.inner.state.borrow().count();
        if let Some(index) = settled_index(offset, height, count) {
            self.inner.state.borrow_mut().set_index(index);
            log::debug!("[vslider] settled on slide {index}");
        }
        if outcome.resume_auto {
            self.inner.state.borrow_mut().start_auto(VSLIDER_AUTO_PERIOD);
        }
    }

    /// Scroll the viewport to the current slide, smoothly for navigation and
    /// instantly for layout corrections.
    fn apply(&self, smooth: bool) {
        let (index, count) = {
            let state = self.inner.state.borrow();
            (state.index(), state.count())
        };
        if count == 0 {
            return;
        }
        let top = index as f64 * f64::from(self.inner.viewport.client_height());
        if (top - f64::from(self.inner.viewport.scroll_top())).abs() >= 1.0 {
            self.inner.settle.borrow_mut().mark_programmatic();
        }
        let options = web::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(if smooth {
            web::ScrollBehavior::Smooth
        } else {
            web::ScrollBehavior::Auto
        });
        self.inner.viewport.scroll_to_with_scroll_to_options(&options);
    }
}
