//! Contact form with simulated submission feedback. Nothing leaves the
//! page; the submit button walks through sending and confirmation states
//! before the form resets.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use vitrin_core::constants::{
    FORM_CONFIRM_BACKGROUND, FORM_CONFIRM_HOLD, FORM_FAKE_LATENCY, FORM_LABEL_SENDING,
    FORM_LABEL_SENT,
};
use vitrin_core::form::{FormFeedback, FormTransition};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

struct FormInner {
    feedback: RefCell<FormFeedback>,
    form: web::HtmlFormElement,
    button: web::HtmlButtonElement,
    saved_label: RefCell<Option<String>>,
}

#[derive(Clone)]
pub struct ContactForm {
    inner: Rc<FormInner>,
}

impl ContactForm {
    pub fn mount(document: &web::Document) -> Option<Self> {
        let form = dom::query::<web::HtmlFormElement>(document, ".form")?;
        let button = form
            .query_selector(".form-button")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())?;

        let contact = Self {
            inner: Rc::new(FormInner {
                feedback: RefCell::new(FormFeedback::new(FORM_FAKE_LATENCY, FORM_CONFIRM_HOLD)),
                form,
                button,
                saved_label: RefCell::new(None),
            }),
        };

        {
            let c = contact.clone();
            dom::on_event(&contact.inner.form, "submit", move |ev| {
                ev.prevent_default();
                c.begin();
            });
        }
        log::info!("[form] mounted");
        Some(contact)
    }

    /// Start the feedback sequence. The button's idle label is captured
    /// here, which is why only an idle submission is accepted; a re-entrant
    /// one would save the transient sending text instead.
    fn begin(&self) {
        let accepted = self.inner.feedback.borrow_mut().submit();
        if !accepted {
            return;
        }
        *self.inner.saved_label.borrow_mut() = self.inner.button.text_content();
        self.inner.button.set_text_content(Some(FORM_LABEL_SENDING));
        self.inner.button.set_disabled(true);
        log::info!("[form] submission started");
    }

    pub fn tick(&self, dt: Duration) {
        let mut transitions = Vec::new();
        self.inner.feedback.borrow_mut().tick(dt, &mut transitions);
        for transition in transitions {
            match transition {
                FormTransition::Sent => self.show_confirmation(),
                FormTransition::Restored => self.restore(),
            }
        }
    }

    fn show_confirmation(&self) {
        self.inner.button.set_text_content(Some(FORM_LABEL_SENT));
        _ = self
            .inner
            .button
            .style()
            .set_property("background", FORM_CONFIRM_BACKGROUND);
    }

    fn restore(&self) {
        let saved = self.inner.saved_label.borrow_mut().take();
        self.inner.button.set_text_content(saved.as_deref());
        self.inner.button.set_disabled(false);
        _ = self.inner.button.style().remove_property("background");
        self.inner.form.reset();
        log::info!("[form] reset to idle");
    }
}
